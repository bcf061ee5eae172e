//! Raw marketplace link codec.
//!
//! Converts between `(marketplace, id)` and the marketplace-native listing
//! URL. Building is a pure template with no id validation; extraction only
//! accepts all-digit ids.

use regex::Regex;
use std::sync::LazyLock;
use url::Url;

use crate::domain::{ItemRef, Marketplace, RawLink};
use crate::error::{Result, TranscodeError};
use crate::registry::{MARKETPLACES, marketplace_spec};
use crate::utils::extract_domain::{extract_domain, host_matches};
use crate::utils::query::query_param;

static OFFER_PATH_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/offer/(\d+)\.html?$").unwrap());

/// Identifies the marketplace hosting `url`, if any.
pub fn identify_marketplace(url: &Url) -> Option<Marketplace> {
    let host = extract_domain(url)?;
    MARKETPLACES
        .iter()
        .find(|spec| spec.hosts.iter().any(|pattern| host_matches(&host, pattern)))
        .map(|spec| spec.marketplace)
}

/// Extracts the item id of a `marketplace` listing from `url`.
///
/// # Errors
///
/// Returns [`TranscodeError::IdNotFound`] if the path or query does not carry
/// an all-digit id where the marketplace puts it.
pub fn extract_id(url: &Url, marketplace: Marketplace) -> Result<String> {
    if marketplace == Marketplace::Ali1688
        && let Some(caps) = OFFER_PATH_REGEX.captures(url.path())
    {
        return Ok(caps[1].to_string());
    }

    marketplace_spec(marketplace)
        .id_params
        .iter()
        .filter_map(|name| query_param(url, name))
        .find(|value| is_numeric_id(value))
        .ok_or_else(|| TranscodeError::IdNotFound {
            url: url.to_string(),
            marketplace,
        })
}

/// Builds the canonical listing URL for `(marketplace, id)`.
pub fn build_raw_link(marketplace: Marketplace, id: &str) -> RawLink {
    let template = match marketplace {
        Marketplace::Taobao => "https://item.taobao.com/item.htm",
        Marketplace::Tmall => "https://detail.tmall.com/item.htm",
        Marketplace::Weidian => "https://weidian.com/item.html",
        Marketplace::Ali1688 => "https://detail.1688.com/",
    };
    let mut url = Url::parse(template).expect("static marketplace template");

    match marketplace {
        Marketplace::Taobao | Marketplace::Tmall => {
            url.query_pairs_mut().append_pair("id", id);
        }
        Marketplace::Weidian => {
            url.query_pairs_mut().append_pair("itemID", id);
        }
        Marketplace::Ali1688 => {
            url.set_path(&format!("/offer/{id}.html"));
        }
    }
    RawLink::new(url)
}

/// Reads `(marketplace, id)` from a raw marketplace link.
///
/// # Errors
///
/// Returns [`TranscodeError::MarketplaceNotDetected`] if the host is not a
/// known marketplace, or [`TranscodeError::IdNotFound`] if no id is present.
pub fn parse_raw_link(url: &Url) -> Result<ItemRef> {
    let marketplace =
        identify_marketplace(url).ok_or_else(|| TranscodeError::MarketplaceNotDetected {
            url: url.to_string(),
        })?;
    let id = extract_id(url, marketplace)?;
    Ok(ItemRef::new(marketplace, id))
}

/// Rebuilds `url` as the canonical link for the listing it references.
pub fn canonicalize(url: &Url) -> Result<RawLink> {
    let item = parse_raw_link(url)?;
    Ok(build_raw_link(item.marketplace, &item.id))
}

pub(crate) fn is_numeric_id(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}
