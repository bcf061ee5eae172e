//! # Agent Links
//!
//! Bidirectional transcoding between marketplace listings (Taobao, Tmall,
//! Weidian, 1688) and the links of shopping agents that purchase on a buyer's
//! behalf.
//!
//! ## Architecture
//!
//! - **Domain** ([`domain`]) - Marketplace and agent tags, item references, referral codes
//! - **Registries** ([`registry`]) - Static tables describing every marketplace and agent
//! - **Codecs** ([`codec`]) - Raw link parsing, agent encoders and decoders
//! - **Detection** ([`detector`]) - Classifies a link by host
//! - **Facade** ([`transcoder`]) - The entry point tying the pieces together
//! - **Cipher** ([`cipher`]) - Pluggable decryption of obfuscated agent links
//!
//! ## Quick Start
//!
//! ```
//! use agent_links::prelude::*;
//!
//! let transcoder = Transcoder::new();
//! let item = ItemRef::new(Marketplace::Weidian, "1625671124");
//!
//! let link = transcoder
//!     .to_agent(LinkSource::Item(&item), Agent::Hipobuy, Some("myC0d3"), None)
//!     .unwrap();
//! assert_eq!(
//!     link.as_str(),
//!     "https://www.hipobuy.com/shopdetail?ra=1&t=wd&id=1625671124&inviteCode=myC0d3"
//! );
//!
//! assert_eq!(transcoder.to_item(link.as_str()).unwrap(), item);
//! ```
//!
//! ## Configuration
//!
//! Default referral codes and the tracking tag are loaded from environment
//! variables via [`config::Config`]. See [`config`] module for available options.

pub mod cipher;
pub mod codec;
pub mod config;
pub mod detector;
pub mod domain;
pub mod error;
pub mod outcome;
pub mod registry;
pub mod transcoder;
pub mod utils;

pub use error::TranscodeError;
pub use outcome::Outcome;
pub use transcoder::{LinkSource, Transcoder};

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::cipher::{DecryptError, Decryptor, NullDecryptor};
    pub use crate::detector::{LinkKind, detect};
    pub use crate::domain::{Agent, ItemRef, Marketplace, RawLink, Referrals};
    pub use crate::error::TranscodeError;
    pub use crate::outcome::Outcome;
    pub use crate::transcoder::{LinkSource, Transcoder};
}
