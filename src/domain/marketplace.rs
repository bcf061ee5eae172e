//! Marketplace tags.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// E-commerce site natively hosting a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Marketplace {
    Taobao,
    Tmall,
    Weidian,
    #[serde(rename = "1688")]
    Ali1688,
}

impl Marketplace {
    pub const ALL: [Marketplace; 4] = [
        Marketplace::Taobao,
        Marketplace::Tmall,
        Marketplace::Weidian,
        Marketplace::Ali1688,
    ];

    /// Tag used in serialized records and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Taobao => "taobao",
            Self::Tmall => "tmall",
            Self::Weidian => "weidian",
            Self::Ali1688 => "1688",
        }
    }
}

impl fmt::Display for Marketplace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a marketplace tag is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown marketplace '{0}'")]
pub struct UnknownMarketplace(pub String);

impl FromStr for Marketplace {
    type Err = UnknownMarketplace;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "taobao" => Ok(Self::Taobao),
            "tmall" => Ok(Self::Tmall),
            "weidian" => Ok(Self::Weidian),
            "1688" | "ali1688" | "ali_1688" | "alibaba" => Ok(Self::Ali1688),
            _ => Err(UnknownMarketplace(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_round_trip_through_from_str() {
        for marketplace in Marketplace::ALL {
            assert_eq!(marketplace.as_str().parse::<Marketplace>(), Ok(marketplace));
        }
    }

    #[test]
    fn test_from_str_accepts_aliases() {
        assert_eq!("ALI_1688".parse(), Ok(Marketplace::Ali1688));
        assert_eq!(" Weidian ".parse(), Ok(Marketplace::Weidian));
        assert!("amazon".parse::<Marketplace>().is_err());
    }

    #[test]
    fn test_serde_uses_tags() {
        let json = serde_json::to_string(&Marketplace::Ali1688).unwrap();
        assert_eq!(json, "\"1688\"");

        let parsed: Marketplace = serde_json::from_str("\"tmall\"").unwrap();
        assert_eq!(parsed, Marketplace::Tmall);
    }
}
