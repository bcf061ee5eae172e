//! Decryptor trait and error types.

/// Errors that can occur while decrypting a token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecryptError {
    #[error("no decryptor configured")]
    Unavailable,

    #[error("malformed cipher token: {0}")]
    Malformed(String),
}

pub type DecryptResult<T> = Result<T, DecryptError>;

/// Turns an opaque cipher token into the plaintext link it hides.
///
/// Implementations must be pure and thread-safe: the same token always
/// yields the same plaintext.
#[cfg_attr(test, mockall::automock)]
pub trait Decryptor: Send + Sync {
    /// Decrypts `cipher_text`, including any marker prefix it carries.
    fn decrypt(&self, cipher_text: &str) -> DecryptResult<String>;
}
