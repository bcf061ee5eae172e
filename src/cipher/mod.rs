//! Decryption hook for agents that obfuscate their embedded links.
//!
//! Decoders only see the [`Decryptor`] trait, so the cipher can be swapped
//! without touching transcoding logic.
//!
//! # Available Implementations
//!
//! - [`NullDecryptor`] - Rejects every token; used when no cipher is configured

pub mod null_decryptor;
pub mod service;

pub use null_decryptor::NullDecryptor;
#[cfg(test)]
pub use service::MockDecryptor;
pub use service::{DecryptError, DecryptResult, Decryptor};
