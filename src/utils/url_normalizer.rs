//! Link parsing and normalization.
//!
//! Turns user input into a [`Url`] with a consistent shape: scheme restricted
//! to HTTP(S), lowercase host, default ports removed. Fragments are kept
//! because several agents route through them.

use url::Url;

/// Errors that can occur while parsing a link.
#[derive(Debug, thiserror::Error)]
pub enum UrlNormalizationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL has no host")]
    MissingHost,

    #[error("Failed to normalize URL: {0}")]
    NormalizationFailed(String),
}

/// Parses a link into a normalized [`Url`].
///
/// Input without a scheme (`weidian.com/item.html?itemID=1`) is treated as
/// HTTPS. Surrounding whitespace is ignored.
///
/// # Errors
///
/// Returns [`UrlNormalizationError::InvalidFormat`] for malformed input.
/// Returns [`UrlNormalizationError::UnsupportedProtocol`] for non-HTTP(S) schemes.
/// Returns [`UrlNormalizationError::MissingHost`] if no host is present.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(
///     normalize_url("HTTPS://WEIDIAN.COM:443/item.html?itemID=1").unwrap().as_str(),
///     "https://weidian.com/item.html?itemID=1"
/// );
/// ```
pub fn normalize_url(input: &str) -> Result<Url, UrlNormalizationError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(UrlNormalizationError::InvalidFormat("empty input".to_string()));
    }

    let mut url = match Url::parse(input) {
        Ok(url) => url,
        Err(url::ParseError::RelativeUrlWithoutBase) => Url::parse(&format!("https://{input}"))
            .map_err(|e| UrlNormalizationError::InvalidFormat(e.to_string()))?,
        Err(e) => return Err(UrlNormalizationError::InvalidFormat(e.to_string())),
    };

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlNormalizationError::UnsupportedProtocol),
    }

    let Some(host) = url.host_str() else {
        return Err(UrlNormalizationError::MissingHost);
    };
    if host.is_empty() {
        return Err(UrlNormalizationError::MissingHost);
    }

    let host_lowercase = host.to_ascii_lowercase();
    url.set_host(Some(&host_lowercase)).map_err(|_| {
        UrlNormalizationError::NormalizationFailed("Failed to set normalized host".to_string())
    })?;

    let is_default_port = matches!(
        (url.scheme(), url.port()),
        ("http", Some(80)) | ("https", Some(443))
    );
    if is_default_port {
        url.set_port(None).map_err(|_| {
            UrlNormalizationError::NormalizationFailed("Failed to remove default port".to_string())
        })?;
    }

    Ok(url)
}

/// Parses a link, reporting failures as [`crate::TranscodeError::InvalidLink`].
pub fn parse_link(input: &str) -> crate::error::Result<Url> {
    normalize_url(input).map_err(|e| crate::TranscodeError::invalid_link(input.trim(), e))
}
