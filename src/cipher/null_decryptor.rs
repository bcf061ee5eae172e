//! Decryptor used when no cipher is configured.

use super::service::{DecryptError, DecryptResult, Decryptor};
use tracing::debug;

/// A decryptor that refuses every token.
///
/// Encrypted links then fail their bespoke decoder and fall through to the
/// generic fallback like any other undecodable link.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullDecryptor;

impl Decryptor for NullDecryptor {
    fn decrypt(&self, cipher_text: &str) -> DecryptResult<String> {
        debug!(len = cipher_text.len(), "NullDecryptor rejecting cipher token");
        Err(DecryptError::Unavailable)
    }
}
