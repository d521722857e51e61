/// Domain extraction for the tab list
use url::Url;

/// Extract the host portion of a tab URL for display under its title
///
/// Only the hostname is returned: no scheme, port, path or query.
/// URLs that do not parse, or that parse without a host (`about:blank`,
/// `data:` URLs), yield an empty string.
///
/// Examples:
/// - https://example.com/path?q=1 → example.com
/// - http://localhost:3000 → localhost
/// - chrome://extensions/ → extensions
/// - about:blank → ""
pub fn extract_domain(url: &str) -> String {
    Url::parse(url.trim())
        .ok()
        .and_then(|parsed| parsed.host_str().map(str::to_string))
        .unwrap_or_default()
}
