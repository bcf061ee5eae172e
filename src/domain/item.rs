//! Canonical item reference and raw marketplace links.

use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

use super::Marketplace;

/// Canonical reference to a listing: marketplace plus its item id.
///
/// The id is opaque and marketplace-scoped; it is not validated here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemRef {
    pub marketplace: Marketplace,
    pub id: String,
}

impl ItemRef {
    pub fn new(marketplace: Marketplace, id: impl Into<String>) -> Self {
        Self {
            marketplace,
            id: id.into(),
        }
    }
}

impl fmt::Display for ItemRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.marketplace, self.id)
    }
}

/// A marketplace-native listing URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLink(Url);

impl RawLink {
    pub(crate) fn new(url: Url) -> Self {
        Self(url)
    }

    pub fn url(&self) -> &Url {
        &self.0
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for RawLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}
