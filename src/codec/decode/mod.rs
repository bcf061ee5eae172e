//! Agent link decoding.
//!
//! Decoding runs an ordered list of [`DecodeStrategy`] values and stops at the
//! first success. The agent's bespoke decoder comes first when it has one,
//! then the generic `url` parameter fallback. A failure marked terminal
//! ([`TranscodeError::is_terminal`]) ends the chain immediately.

pub mod agents;

use url::Url;

use crate::cipher::Decryptor;
use crate::codec::codes::CodeTable;
use crate::codec::raw::{build_raw_link, canonicalize, is_numeric_id};
use crate::domain::{Agent, RawLink};
use crate::error::{Result, TranscodeError};
use crate::registry::agent_spec;
use crate::utils::query::query_param;
use crate::utils::url_normalizer::normalize_url;

/// Conventional parameter name carrying an embedded raw link.
pub const FALLBACK_PARAM: &str = "url";

/// Collaborators a decoder may need.
#[derive(Clone, Copy)]
pub struct DecodeContext<'a> {
    pub decryptor: &'a dyn Decryptor,
}

pub type DecodeFn = fn(&Url, &DecodeContext<'_>) -> Result<RawLink>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeStrategy {
    /// The agent's own decoder from the registry.
    Bespoke(Agent),
    /// Embedded link under [`FALLBACK_PARAM`].
    GenericUrlParam,
}

impl DecodeStrategy {
    fn run(self, url: &Url, context: &DecodeContext<'_>) -> Result<RawLink> {
        match self {
            Self::Bespoke(agent) => match agent_spec(agent).decode {
                Some(decode) => decode(url, context),
                None => Err(TranscodeError::decode_failed(
                    url.as_str(),
                    format!("agent {agent} has no decoder"),
                )),
            },
            Self::GenericUrlParam => fallback(url),
        }
    }
}

/// Strategies tried for a link attributed to `agent`, in order.
pub fn strategies_for(agent: Option<Agent>) -> Vec<DecodeStrategy> {
    let mut strategies = Vec::with_capacity(2);
    if let Some(agent) = agent
        && agent_spec(agent).decode.is_some()
    {
        strategies.push(DecodeStrategy::Bespoke(agent));
    }
    strategies.push(DecodeStrategy::GenericUrlParam);
    strategies
}

/// Decodes an agent link to its raw marketplace link.
///
/// # Errors
///
/// Returns [`TranscodeError::UndecodableLinkShape`] as soon as a strategy
/// reports it, or [`TranscodeError::RawLinkNotFound`] once every strategy
/// has failed.
pub fn decode(url: &Url, agent: Option<Agent>, context: &DecodeContext<'_>) -> Result<RawLink> {
    for strategy in strategies_for(agent) {
        match strategy.run(url, context) {
            Ok(raw) => {
                tracing::debug!(?strategy, raw = %raw, "Decoded agent link");
                return Ok(raw);
            }
            Err(e) if e.is_terminal() => return Err(e),
            Err(e) => {
                tracing::debug!(?strategy, error = %e, "Decode strategy failed, trying next");
            }
        }
    }

    Err(TranscodeError::RawLinkNotFound {
        url: url.to_string(),
    })
}

/// Generic fallback: a raw link embedded under the `url` parameter.
pub fn fallback(url: &Url) -> Result<RawLink> {
    embedded_param(url, FALLBACK_PARAM)
}

/// Reads `param` from the query and decodes the link it embeds.
pub(crate) fn embedded_param(url: &Url, param: &str) -> Result<RawLink> {
    let value = query_param(url, param).ok_or_else(|| {
        TranscodeError::decode_failed(url.as_str(), format!("missing '{param}' parameter"))
    })?;
    embedded_link(url, &value)
}

/// Parses `value` as a raw marketplace link, reporting failures against `url`.
pub(crate) fn embedded_link(url: &Url, value: &str) -> Result<RawLink> {
    let inner = normalize_url(value)
        .map_err(|e| TranscodeError::decode_failed(url.as_str(), e.to_string()))?;
    canonicalize(&inner).map_err(|e| TranscodeError::decode_failed(url.as_str(), e.to_string()))
}

/// Builds a raw link from a marketplace code and id found in an agent link.
pub(crate) fn structured(
    url: &Url,
    table: &CodeTable,
    code: Option<&str>,
    id: Option<&str>,
) -> Result<RawLink> {
    let code = code.ok_or_else(|| TranscodeError::decode_failed(url.as_str(), "missing marketplace code"))?;
    let marketplace = table.marketplace_for(code).ok_or_else(|| {
        TranscodeError::decode_failed(url.as_str(), format!("unknown marketplace code '{code}'"))
    })?;
    let id = id
        .filter(|id| is_numeric_id(id))
        .ok_or_else(|| TranscodeError::decode_failed(url.as_str(), "missing or non-numeric item id"))?;
    Ok(build_raw_link(marketplace, id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cipher::NullDecryptor;

    fn url(input: &str) -> Url {
        Url::parse(input).unwrap()
    }

    fn context() -> DecodeContext<'static> {
        DecodeContext {
            decryptor: &NullDecryptor,
        }
    }

    #[test]
    fn test_strategy_order() {
        assert_eq!(
            strategies_for(Some(Agent::Hagobuy)),
            vec![DecodeStrategy::Bespoke(Agent::Hagobuy), DecodeStrategy::GenericUrlParam]
        );
        assert_eq!(strategies_for(Some(Agent::Itaobuy)), vec![DecodeStrategy::GenericUrlParam]);
        assert_eq!(strategies_for(None), vec![DecodeStrategy::GenericUrlParam]);
    }

    #[test]
    fn test_fallback_reads_url_param() {
        let raw = fallback(&url(
            "https://unknown-agent.io/p?url=https%3A%2F%2Fweidian.com%2Fitem.html%3FitemID%3D5",
        ))
        .unwrap();
        assert_eq!(raw.as_str(), "https://weidian.com/item.html?itemID=5");
    }

    #[test]
    fn test_bespoke_failure_falls_through_to_fallback() {
        // cnfans decoder needs shop_type + id; only a generic url param is present.
        let link = url(
            "https://cnfans.com/product/?url=https%3A%2F%2Fitem.taobao.com%2Fitem.htm%3Fid%3D12",
        );
        let raw = decode(&link, Some(Agent::Cnfans), &context()).unwrap();
        assert_eq!(raw.as_str(), "https://item.taobao.com/item.htm?id=12");
    }

    #[test]
    fn test_all_strategies_fail() {
        let link = url("https://www.hagobuy.com/item/details");
        let err = decode(&link, Some(Agent::Hagobuy), &context()).unwrap_err();
        assert_eq!(
            err,
            TranscodeError::RawLinkNotFound {
                url: "https://www.hagobuy.com/item/details".to_string()
            }
        );
    }

    #[test]
    fn test_terminal_failure_skips_fallback() {
        // Even with a decodable url param, the purchase-history shape wins.
        let link = url(
            "https://www.kameymall.com/purchases/123456?url=https%3A%2F%2Fitem.taobao.com%2Fitem.htm%3Fid%3D1",
        );
        let err = decode(&link, Some(Agent::Kameymall), &context()).unwrap_err();
        assert!(matches!(err, TranscodeError::UndecodableLinkShape { .. }));
    }

    #[test]
    fn test_embedded_link_must_be_a_marketplace() {
        let link = url("https://www.hagobuy.com/item/details?url=https%3A%2F%2Fexample.com%2F");
        let err = embedded_param(&link, "url").unwrap_err();
        assert!(matches!(err, TranscodeError::DecodeFailed { ref url, .. } if url == link.as_str()));
    }

    #[test]
    fn test_structured_rejects_non_numeric_id() {
        let link = url("https://cnfans.com/product/?shop_type=taobao&id=abc");
        let err = structured(
            &link,
            &crate::codec::codes::SHOP_TYPES,
            Some("taobao"),
            Some("abc"),
        )
        .unwrap_err();
        assert!(matches!(err, TranscodeError::DecodeFailed { .. }));
    }
}
