//! Transcoding facade.
//!
//! [`Transcoder`] wires detection, decoding and encoding together. It holds
//! the decryptor, the default referral codes and the default tracking tag;
//! everything else is looked up in the static registries, so one instance can
//! be shared across threads.

use std::sync::Arc;
use url::Url;

use crate::cipher::{Decryptor, NullDecryptor};
use crate::codec::decode::{self, DecodeContext};
use crate::codec::encode::{self, EncodeRequest};
use crate::codec::raw::{canonicalize, parse_raw_link};
use crate::detector::{agent_of, detect_marketplace};
use crate::domain::{Agent, ItemRef, RawLink, Referrals};
use crate::error::Result;
use crate::outcome::Outcome;
use crate::utils::url_normalizer::parse_link;

/// Where the listing to encode comes from.
#[derive(Debug, Clone, Copy)]
pub enum LinkSource<'a> {
    /// Any supported link: raw marketplace link or agent link.
    Link(&'a str),
    /// A known listing.
    Item(&'a ItemRef),
}

/// Converts links between marketplaces and agents.
#[derive(Clone)]
pub struct Transcoder {
    decryptor: Arc<dyn Decryptor>,
    referrals: Referrals,
    tracking_tag: Option<String>,
}

impl Default for Transcoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Transcoder {
    /// Creates a transcoder without a cipher or default referral codes.
    pub fn new() -> Self {
        Self {
            decryptor: Arc::new(NullDecryptor),
            referrals: Referrals::new(),
            tracking_tag: None,
        }
    }

    pub fn with_decryptor(mut self, decryptor: Arc<dyn Decryptor>) -> Self {
        self.decryptor = decryptor;
        self
    }

    pub fn with_referrals(mut self, referrals: Referrals) -> Self {
        self.referrals = referrals;
        self
    }

    /// Tracking tag used when a call passes none.
    pub fn with_tracking_tag(mut self, tracking_tag: Option<String>) -> Self {
        self.tracking_tag = tracking_tag.filter(|tag| !tag.is_empty());
        self
    }

    /// Resolves any supported link to its canonical raw marketplace link.
    ///
    /// Marketplace links are canonicalized directly. Agent links go through
    /// the agent's decode strategies; links from unknown hosts only through
    /// the generic fallback.
    ///
    /// # Errors
    ///
    /// - [`crate::TranscodeError::InvalidLink`] if the input is not an HTTP(S) URL
    /// - [`crate::TranscodeError::IdNotFound`] for a marketplace link without an id
    /// - [`crate::TranscodeError::UndecodableLinkShape`] for links that reference no item
    /// - [`crate::TranscodeError::RawLinkNotFound`] once every strategy failed
    pub fn to_raw(&self, link: &str) -> Result<RawLink> {
        let url = parse_link(link)?;
        if detect_marketplace(&url).is_some() {
            return canonicalize(&url);
        }

        match agent_of(&url) {
            Ok(agent) => self.decode(&url, Some(agent)),
            Err(e) => {
                tracing::debug!(error = %e, "Using fallback decoder");
                self.decode(&url, None)
            }
        }
    }

    /// Resolves any supported link to `(marketplace, id)`.
    pub fn to_item(&self, link: &str) -> Result<ItemRef> {
        let raw = self.to_raw(link)?;
        parse_raw_link(raw.url())
    }

    /// Encodes a listing as a link of `target`.
    ///
    /// `referral` overrides the transcoder's default code for `target`, and
    /// `tracking_tag` its default tag. The tag only matters for agents with a
    /// tracking parameter.
    ///
    /// # Errors
    ///
    /// Any error of [`Transcoder::to_item`] when decoding a link source, or
    /// [`crate::TranscodeError::UnsupportedMarketplaceForAgent`].
    pub fn to_agent(
        &self,
        source: LinkSource<'_>,
        target: Agent,
        referral: Option<&str>,
        tracking_tag: Option<&str>,
    ) -> Result<Url> {
        let decoded;
        let item = match source {
            LinkSource::Item(item) => item,
            LinkSource::Link(link) => {
                decoded = self.to_item(link)?;
                &decoded
            }
        };

        let referral = referral
            .filter(|code| !code.is_empty())
            .or_else(|| self.referrals.get(target));
        let tracking_tag = tracking_tag
            .filter(|tag| !tag.is_empty())
            .or(self.tracking_tag.as_deref());
        let request = EncodeRequest::new(item.marketplace, &item.id)
            .referral(referral)
            .tracking_tag(tracking_tag);
        encode::encode(target, request)
    }

    /// [`Transcoder::to_raw`] without raising.
    pub fn try_to_raw(&self, link: &str) -> Outcome<String> {
        Outcome::from(self.to_raw(link)).map(|raw| raw.to_string())
    }

    /// [`Transcoder::to_item`] without raising.
    pub fn try_to_item(&self, link: &str) -> Outcome<ItemRef> {
        Outcome::from(self.to_item(link))
    }

    /// [`Transcoder::to_agent`] without raising.
    pub fn try_to_agent(
        &self,
        source: LinkSource<'_>,
        target: Agent,
        referral: Option<&str>,
        tracking_tag: Option<&str>,
    ) -> Outcome<String> {
        Outcome::from(self.to_agent(source, target, referral, tracking_tag)).map(String::from)
    }

    fn decode(&self, url: &Url, agent: Option<Agent>) -> Result<RawLink> {
        let context = DecodeContext {
            decryptor: self.decryptor.as_ref(),
        };
        decode::decode(url, agent, &context)
    }
}
