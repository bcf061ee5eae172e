//! Agent link encoding.
//!
//! [`encode`] checks marketplace support, applies the agent's aliases, builds
//! the canonical raw link, hands both to the agent's encoder and assembles the
//! final URL. Agent encoders only describe path and parameters; the referral
//! parameter is always appended last by [`encode`].

pub mod agents;

use url::Url;
use url::form_urlencoded;

use crate::codec::codes::CodeTable;
use crate::codec::raw::build_raw_link;
use crate::domain::{Agent, ItemRef, Marketplace, RawLink};
use crate::error::{Result, TranscodeError};
use crate::registry::{AgentSpec, agent_spec};

/// Tracking value used when the caller supplies none.
pub const DEFAULT_TRACKING_TAG: &str = "1";

/// Inputs of a single encoding call.
#[derive(Debug, Clone, Copy)]
pub struct EncodeRequest<'a> {
    pub marketplace: Marketplace,
    pub id: &'a str,
    pub referral: Option<&'a str>,
    pub tracking_tag: Option<&'a str>,
}

impl<'a> EncodeRequest<'a> {
    pub fn new(marketplace: Marketplace, id: &'a str) -> Self {
        Self {
            marketplace,
            id,
            referral: None,
            tracking_tag: None,
        }
    }

    pub fn referral(mut self, referral: Option<&'a str>) -> Self {
        self.referral = referral;
        self
    }

    pub fn tracking_tag(mut self, tracking_tag: Option<&'a str>) -> Self {
        self.tracking_tag = tracking_tag;
        self
    }
}

/// What an agent encoder hands to [`encode`] for assembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentUrl {
    pub path: String,
    pub params: Vec<(&'static str, String)>,
    /// Hash route that carries the parameters instead of the query string.
    pub route: Option<&'static str>,
}

impl AgentUrl {
    pub fn query(path: impl Into<String>, params: Vec<(&'static str, String)>) -> Self {
        Self {
            path: path.into(),
            params,
            route: None,
        }
    }

    pub fn hash_route(route: &'static str, params: Vec<(&'static str, String)>) -> Self {
        Self {
            path: "/".to_string(),
            params,
            route: Some(route),
        }
    }
}

/// Everything an agent encoder may read.
#[derive(Debug)]
pub struct EncodeContext<'a> {
    pub spec: &'static AgentSpec,
    /// Item after alias resolution.
    pub item: ItemRef,
    pub raw: RawLink,
    pub tracking_tag: &'a str,
}

impl EncodeContext<'_> {
    pub fn raw_link(&self) -> String {
        self.raw.as_str().to_string()
    }

    /// The agent's tracking parameter paired with the tag, if the agent has one.
    pub fn tracking(&self) -> Option<(&'static str, String)> {
        self.spec
            .tracking_param
            .map(|name| (name, self.tracking_tag.to_string()))
    }

    /// Looks up the agent's code for the item's marketplace.
    pub fn code(&self, table: &CodeTable) -> Result<&'static str> {
        table
            .code_for(self.item.marketplace)
            .ok_or(TranscodeError::UnsupportedMarketplaceForAgent {
                agent: self.spec.agent,
                marketplace: self.item.marketplace,
            })
    }
}

pub type EncodeFn = fn(&EncodeContext<'_>) -> Result<AgentUrl>;

/// Encodes a listing as a link of `agent`.
///
/// # Errors
///
/// Returns [`TranscodeError::UnsupportedMarketplaceForAgent`] if `agent` does
/// not handle the requested marketplace. No URL is built in that case.
pub fn encode(agent: Agent, request: EncodeRequest<'_>) -> Result<Url> {
    let spec = agent_spec(agent);
    if !spec.supports(request.marketplace) {
        return Err(TranscodeError::UnsupportedMarketplaceForAgent {
            agent,
            marketplace: request.marketplace,
        });
    }

    let marketplace = spec.resolve(request.marketplace);
    if marketplace != request.marketplace {
        tracing::debug!(
            %agent,
            from = %request.marketplace,
            to = %marketplace,
            "Encoding through marketplace alias"
        );
    }

    let context = EncodeContext {
        spec,
        item: ItemRef::new(marketplace, request.id),
        raw: build_raw_link(marketplace, request.id),
        tracking_tag: request.tracking_tag.unwrap_or(DEFAULT_TRACKING_TAG),
    };
    let agent_url = (spec.encode)(&context)?;

    let referral = spec
        .referral_param
        .zip(request.referral.filter(|code| !code.is_empty()));
    assemble(spec, agent_url, referral)
}

fn assemble(
    spec: &AgentSpec,
    agent_url: AgentUrl,
    referral: Option<(&'static str, &str)>,
) -> Result<Url> {
    let mut url = Url::parse(spec.base).map_err(|e| TranscodeError::invalid_link(spec.base, e))?;
    url.set_path(&agent_url.path);

    let mut params = agent_url.params;
    if let Some((name, code)) = referral {
        params.push((name, code.to_string()));
    }
    if params.is_empty() {
        return Ok(url);
    }

    match agent_url.route {
        None => {
            url.query_pairs_mut().extend_pairs(params.iter());
        }
        Some(route) => {
            let query = form_urlencoded::Serializer::new(String::new())
                .extend_pairs(params.iter())
                .finish();
            url.set_fragment(Some(&format!("{route}?{query}")));
        }
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_marketplace_is_rejected_before_building() {
        let err = encode(Agent::Hoobuy, EncodeRequest::new(Marketplace::Tmall, "1")).unwrap_err();
        assert_eq!(
            err,
            TranscodeError::UnsupportedMarketplaceForAgent {
                agent: Agent::Hoobuy,
                marketplace: Marketplace::Tmall,
            }
        );
    }

    #[test]
    fn test_empty_referral_is_omitted() {
        let url = encode(
            Agent::Cnfans,
            EncodeRequest::new(Marketplace::Weidian, "1").referral(Some("")),
        )
        .unwrap();
        assert_eq!(url.as_str(), "https://cnfans.com/product/?shop_type=weidian&id=1");
    }

    #[test]
    fn test_referral_ignored_for_agent_without_referral_param() {
        let url = encode(
            Agent::Basetao,
            EncodeRequest::new(Marketplace::Taobao, "5").referral(Some("abc")),
        )
        .unwrap();
        assert_eq!(
            url.as_str(),
            "https://www.basetao.com/best-taobao-agent-service/products/agent/taobao/5.html"
        );
    }

    #[test]
    fn test_tracking_tag_defaults_and_overrides() {
        let default = encode(Agent::Hipobuy, EncodeRequest::new(Marketplace::Taobao, "9")).unwrap();
        assert_eq!(default.as_str(), "https://www.hipobuy.com/shopdetail?ra=1&t=tb&id=9");

        let tagged = encode(
            Agent::Hipobuy,
            EncodeRequest::new(Marketplace::Taobao, "9").tracking_tag(Some("42")),
        )
        .unwrap();
        assert_eq!(tagged.as_str(), "https://www.hipobuy.com/shopdetail?ra=42&t=tb&id=9");
    }

    #[test]
    fn test_tracking_tag_ignored_without_tracking_param() {
        let url = encode(
            Agent::Cnfans,
            EncodeRequest::new(Marketplace::Taobao, "9").tracking_tag(Some("42")),
        )
        .unwrap();
        assert!(!url.as_str().contains("42"));
    }

    #[test]
    fn test_hash_route_carries_referral() {
        let url = encode(
            Agent::Sugargoo,
            EncodeRequest::new(Marketplace::Taobao, "7").referral(Some("m1")),
        )
        .unwrap();
        assert_eq!(url.query(), None);
        assert_eq!(
            url.fragment(),
            Some(
                "/home/productDetail?productLink=https%3A%2F%2Fitem.taobao.com%2Fitem.htm%3Fid%3D7&memberId=m1"
            )
        );
    }
}
