#![allow(dead_code)]

use agent_links::cipher::DecryptResult;
use agent_links::prelude::*;
use url::Url;

pub const TAOBAO_ID: &str = "675330231400";
pub const TMALL_ID: &str = "652874751412";
pub const WEIDIAN_ID: &str = "1625671124";
pub const ALI1688_ID: &str = "610947572360";

pub fn sample_id(marketplace: Marketplace) -> &'static str {
    match marketplace {
        Marketplace::Taobao => TAOBAO_ID,
        Marketplace::Tmall => TMALL_ID,
        Marketplace::Weidian => WEIDIAN_ID,
        Marketplace::Ali1688 => ALI1688_ID,
    }
}

pub fn sample_item(marketplace: Marketplace) -> ItemRef {
    ItemRef::new(marketplace, sample_id(marketplace))
}

/// Percent-encodes `value` for use as a query parameter value.
pub fn encode_param(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

/// Names of every parameter in the query and in a hash-route fragment.
pub fn param_names(link: &Url) -> Vec<String> {
    let mut names: Vec<String> = link.query_pairs().map(|(k, _)| k.into_owned()).collect();
    if let Some((_, query)) = link.fragment().and_then(|f| f.split_once('?')) {
        names.extend(url::form_urlencoded::parse(query.as_bytes()).map(|(k, _)| k.into_owned()));
    }
    names
}

/// Value of `name` in the query or in a hash-route fragment.
pub fn param_value(link: &Url, name: &str) -> Option<String> {
    let from_query = link
        .query_pairs()
        .find(|(k, _)| k == name)
        .map(|(_, v)| v.into_owned());
    from_query.or_else(|| {
        let (_, query) = link.fragment()?.split_once('?')?;
        url::form_urlencoded::parse(query.as_bytes())
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.into_owned())
    })
}

/// Decryptor that answers every token with the same plaintext.
pub struct FixedDecryptor(pub String);

impl Decryptor for FixedDecryptor {
    fn decrypt(&self, _cipher_text: &str) -> DecryptResult<String> {
        Ok(self.0.clone())
    }
}
