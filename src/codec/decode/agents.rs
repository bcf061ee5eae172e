//! Per-agent decoders.

use regex::Regex;
use std::sync::LazyLock;
use url::Url;

use super::{DecodeContext, embedded_link, embedded_param, structured};
use crate::codec::codes::{
    ACBUY_SOURCES, CSSBUY_PREFIXES, HIPOBUY_TYPES, HOOBUY_CODES, PATH_NAMES, SHOP_TYPES,
};
use crate::codec::raw::is_numeric_id;
use crate::domain::RawLink;
use crate::error::{Result, TranscodeError};
use crate::utils::query::{path_segments, query_or_fragment_param, query_param};

/// Leading characters marking an encrypted pandabuy token.
pub const PANDABUY_CIPHER_PREFIX: &str = "PJ";

static CSSBUY_PATH_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/item-(?:(micro|1688)-)?(\d+)\.html$").unwrap());

static BASETAO_PATH_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/products/agent/(taobao|weidian|1688)/(\d+)\.html$").unwrap());

/// Agents that embed the raw link under `url`.
pub fn url_param(url: &Url, _: &DecodeContext<'_>) -> Result<RawLink> {
    embedded_param(url, "url")
}

pub fn ezbuycn(url: &Url, _: &DecodeContext<'_>) -> Result<RawLink> {
    embedded_param(url, "key")
}

/// Prefers the embedded link, then `source` + `id`.
pub fn acbuy(url: &Url, _: &DecodeContext<'_>) -> Result<RawLink> {
    embedded_param(url, "url").or_else(|_| {
        structured(
            url,
            &ACBUY_SOURCES,
            query_param(url, "source").as_deref(),
            query_param(url, "id").as_deref(),
        )
    })
}

/// Desktop links carry `url` in the query; mobile links route through
/// `#/goodsdetail?url=...`.
pub fn superbuy_family(url: &Url, _: &DecodeContext<'_>) -> Result<RawLink> {
    let value = query_or_fragment_param(url, "url").ok_or_else(|| {
        TranscodeError::decode_failed(url.as_str(), "missing 'url' in query or hash route")
    })?;
    embedded_link(url, &value)
}

pub fn sugargoo(url: &Url, _: &DecodeContext<'_>) -> Result<RawLink> {
    let value = query_or_fragment_param(url, "productLink").ok_or_else(|| {
        TranscodeError::decode_failed(url.as_str(), "missing 'productLink' in hash route")
    })?;
    embedded_link(url, &value)
}

pub fn basetao(url: &Url, _: &DecodeContext<'_>) -> Result<RawLink> {
    let caps = BASETAO_PATH_REGEX
        .captures(url.path())
        .ok_or_else(|| TranscodeError::decode_failed(url.as_str(), "not a product path"))?;
    structured(url, &PATH_NAMES, Some(&caps[1]), Some(&caps[2]))
}

/// `shop_type` + `id` query parameters: cnfans family and lovegobuy.
pub fn cnfans_family(url: &Url, _: &DecodeContext<'_>) -> Result<RawLink> {
    structured(
        url,
        &SHOP_TYPES,
        query_param(url, "shop_type").as_deref(),
        query_param(url, "id").as_deref(),
    )
}

pub fn cssbuy(url: &Url, _: &DecodeContext<'_>) -> Result<RawLink> {
    let caps = CSSBUY_PATH_REGEX
        .captures(url.path())
        .ok_or_else(|| TranscodeError::decode_failed(url.as_str(), "not an item path"))?;
    let prefix = caps.get(1).map_or(String::new(), |m| format!("{}-", m.as_str()));
    structured(url, &CSSBUY_PREFIXES, Some(prefix.as_str()), Some(&caps[2]))
}

pub fn hipobuy(url: &Url, _: &DecodeContext<'_>) -> Result<RawLink> {
    structured(
        url,
        &HIPOBUY_TYPES,
        query_param(url, "t").as_deref(),
        query_param(url, "id").as_deref(),
    )
}

/// `/product/{code}/{id}` with a positional numeric marketplace code.
pub fn hoobuy(url: &Url, _: &DecodeContext<'_>) -> Result<RawLink> {
    match path_segments(url).as_slice() {
        ["product", code, id, ..] => structured(url, &HOOBUY_CODES, Some(*code), Some(*id)),
        _ => Err(TranscodeError::decode_failed(url.as_str(), "not a product path")),
    }
}

pub fn oopbuy(url: &Url, _: &DecodeContext<'_>) -> Result<RawLink> {
    match path_segments(url).as_slice() {
        ["product", name, id, ..] => structured(url, &PATH_NAMES, Some(*name), Some(*id)),
        _ => Err(TranscodeError::decode_failed(url.as_str(), "not a product path")),
    }
}

/// `/purchases/{digits}` is an order history page with no item reference.
pub fn kameymall(url: &Url, _: &DecodeContext<'_>) -> Result<RawLink> {
    if let ["purchases", second, ..] = path_segments(url).as_slice()
        && is_numeric_id(second)
    {
        return Err(TranscodeError::UndecodableLinkShape {
            url: url.to_string(),
        });
    }
    embedded_param(url, "url")
}

/// The `url` parameter is encoded twice. Once unwrapped, a token starting
/// with [`PANDABUY_CIPHER_PREFIX`] goes to the decryptor; anything else is a
/// plain link.
pub fn pandabuy(url: &Url, context: &DecodeContext<'_>) -> Result<RawLink> {
    let once = query_param(url, "url")
        .ok_or_else(|| TranscodeError::decode_failed(url.as_str(), "missing 'url' parameter"))?;
    let token = urlencoding::decode(&once)
        .map_err(|e| TranscodeError::decode_failed(url.as_str(), e.to_string()))?;

    if token.starts_with(PANDABUY_CIPHER_PREFIX) {
        tracing::debug!(url = %url, "Decrypting pandabuy token");
        let plaintext = context
            .decryptor
            .decrypt(&token)
            .map_err(|e| TranscodeError::decode_failed(url.as_str(), e.to_string()))?;
        return embedded_link(url, &plaintext);
    }

    embedded_link(url, &token)
}
