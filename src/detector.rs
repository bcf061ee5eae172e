//! Link classification.
//!
//! A link is either a marketplace listing (a raw link) or an agent link. The
//! registries guarantee the two host sets never overlap.

use url::Url;

use crate::codec::raw::identify_marketplace;
use crate::domain::{Agent, Marketplace};
use crate::error::{Result, TranscodeError};
use crate::registry::AGENTS;
use crate::utils::extract_domain::{extract_domain, host_matches};

/// What a link was recognized as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Marketplace(Marketplace),
    Agent(Agent),
}

/// Classifies `url` by host as one of the registered agents.
///
/// Matching ignores case and a leading `www.` or `m.`; subdomains of an
/// agent's host match too. The first matching registry entry wins.
pub fn detect_agent(url: &Url) -> Option<Agent> {
    let host = extract_domain(url)?;
    AGENTS
        .iter()
        .find(|spec| spec.hosts.iter().any(|pattern| host_matches(&host, pattern)))
        .map(|spec| spec.agent)
}

/// Like [`detect_agent`], but reports an unknown host as
/// [`TranscodeError::AgentNotDetected`].
///
/// The error is not fatal to decoding: the transcoder answers it with the
/// generic fallback decoder.
pub fn agent_of(url: &Url) -> Result<Agent> {
    detect_agent(url).ok_or_else(|| TranscodeError::AgentNotDetected {
        url: url.to_string(),
    })
}

/// Classifies `url` by host as one of the registered marketplaces.
pub fn detect_marketplace(url: &Url) -> Option<Marketplace> {
    identify_marketplace(url)
}

/// Classifies `url` as a marketplace or an agent link.
pub fn detect(url: &Url) -> Option<LinkKind> {
    detect_marketplace(url)
        .map(LinkKind::Marketplace)
        .or_else(|| detect_agent(url).map(LinkKind::Agent))
}
