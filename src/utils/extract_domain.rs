//! Host extraction and matching for link classification.

use url::Url;

/// Prefixes ignored when comparing hosts against registry patterns.
const IGNORED_PREFIXES: &[&str] = &["www.", "m."];

/// Extracts the host used for classification from a parsed link.
///
/// The host is lowercased, a trailing dot is dropped, and a single leading
/// `www.` or `m.` is stripped. IP addresses and hostless URLs yield `None`.
///
/// # Examples
///
/// ```ignore
/// let url = Url::parse("https://M.PandaBuy.com/product").unwrap();
/// assert_eq!(extract_domain(&url).as_deref(), Some("pandabuy.com"));
/// ```
pub fn extract_domain(url: &Url) -> Option<String> {
    let host = match url.host()? {
        url::Host::Domain(domain) => domain,
        url::Host::Ipv4(_) | url::Host::Ipv6(_) => return None,
    };

    let host = host.trim_end_matches('.').to_ascii_lowercase();
    let stripped = IGNORED_PREFIXES
        .iter()
        .find_map(|prefix| host.strip_prefix(prefix))
        .unwrap_or(&host);

    if stripped.is_empty() {
        None
    } else {
        Some(stripped.to_string())
    }
}

/// Returns true if `host` is `pattern` or a subdomain of it.
pub fn host_matches(host: &str, pattern: &str) -> bool {
    host == pattern
        || host
            .strip_suffix(pattern)
            .is_some_and(|prefix| prefix.ends_with('.'))
}
