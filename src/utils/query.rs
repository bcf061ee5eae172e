//! Query and hash-route parameter lookup.

use url::Url;
use url::form_urlencoded;

/// Returns the first value of `name` in the query string, percent-decoded once.
pub fn query_param(url: &Url, name: &str) -> Option<String> {
    url.query_pairs()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

/// Returns the first value of `name` in a hash-routed query such as
/// `#/home/productDetail?productLink=...`, percent-decoded once.
pub fn fragment_param(url: &Url, name: &str) -> Option<String> {
    let fragment = url.fragment()?;
    let (_, query) = fragment.split_once('?')?;
    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

/// Looks in the query first, then in the hash route.
pub fn query_or_fragment_param(url: &Url, name: &str) -> Option<String> {
    query_param(url, name).or_else(|| fragment_param(url, name))
}

/// Non-empty path segments of `url`.
pub fn path_segments(url: &Url) -> Vec<&str> {
    url.path_segments()
        .map(|segments| segments.filter(|s| !s.is_empty()).collect())
        .unwrap_or_default()
}
