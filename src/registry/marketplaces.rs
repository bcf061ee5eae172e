//! Static marketplace table.

use crate::domain::Marketplace;

/// Static description of a marketplace.
#[derive(Debug)]
pub struct MarketplaceSpec {
    pub marketplace: Marketplace,
    /// Registrable hosts; subdomains match too.
    pub hosts: &'static [&'static str],
    /// Query parameters holding the item id, in lookup order.
    pub id_params: &'static [&'static str],
}

pub static MARKETPLACES: &[MarketplaceSpec] = &[
    MarketplaceSpec {
        marketplace: Marketplace::Taobao,
        hosts: &["taobao.com"],
        id_params: &["id"],
    },
    MarketplaceSpec {
        marketplace: Marketplace::Tmall,
        hosts: &["tmall.com", "tmall.hk"],
        id_params: &["id"],
    },
    MarketplaceSpec {
        marketplace: Marketplace::Weidian,
        hosts: &["weidian.com", "koudai.com"],
        id_params: &["itemID", "itemId", "id"],
    },
    MarketplaceSpec {
        marketplace: Marketplace::Ali1688,
        hosts: &["1688.com"],
        id_params: &["offerId"],
    },
];

/// Returns the registry entry for `marketplace`.
pub fn marketplace_spec(marketplace: Marketplace) -> &'static MarketplaceSpec {
    MARKETPLACES
        .iter()
        .find(|spec| spec.marketplace == marketplace)
        .unwrap_or_else(|| unreachable!("marketplace {marketplace} missing from registry"))
}
