//! Error taxonomy for link detection, encoding and decoding.
//!
//! Every variant that concerns a concrete link carries the offending URL so
//! callers can report it without keeping their own copy around.

use crate::domain::{Agent, Marketplace};

/// Errors produced while transcoding links.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TranscodeError {
    #[error("invalid link '{url}': {reason}")]
    InvalidLink { url: String, reason: String },

    #[error("no marketplace detected for '{url}'")]
    MarketplaceNotDetected { url: String },

    /// Non-fatal: triggers the generic fallback decoder.
    #[error("no agent detected for '{url}'")]
    AgentNotDetected { url: String },

    #[error("no {marketplace} item id found in '{url}'")]
    IdNotFound {
        url: String,
        marketplace: Marketplace,
    },

    #[error("agent {agent} does not support {marketplace} links")]
    UnsupportedMarketplaceForAgent {
        agent: Agent,
        marketplace: Marketplace,
    },

    #[error("failed to decode '{url}': {reason}")]
    DecodeFailed { url: String, reason: String },

    /// A structurally valid link that intentionally carries no item reference.
    #[error("link '{url}' does not reference an item and cannot be decoded")]
    UndecodableLinkShape { url: String },

    #[error("no raw marketplace link found in '{url}'")]
    RawLinkNotFound { url: String },
}

impl TranscodeError {
    pub fn invalid_link(url: impl Into<String>, reason: impl ToString) -> Self {
        Self::InvalidLink {
            url: url.into(),
            reason: reason.to_string(),
        }
    }

    pub fn decode_failed(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::DecodeFailed {
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// Returns true if no other decoding strategy may be tried after this error.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::UndecodableLinkShape { .. })
    }
}

pub type Result<T> = std::result::Result<T, TranscodeError>;
