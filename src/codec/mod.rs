//! Link codecs.
//!
//! - [`raw`] - marketplace-native links to and from `(marketplace, id)`
//! - [`encode`] - `(marketplace, id)` to agent links
//! - [`decode`] - agent links back to raw links, with the generic fallback
//! - [`codes`] - marketplace codes shared by structured encoders and decoders

pub mod codes;
pub mod decode;
pub mod encode;
pub mod raw;
