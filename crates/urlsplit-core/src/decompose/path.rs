//! Path, request target, and percent-decoding helpers.

use super::parts::UrlParts;
use percent_encoding::percent_decode_str;

/// Percent-decodes a URL component. Invalid UTF-8 is replaced, not rejected.
pub fn decode_component(s: &str) -> String {
    percent_decode_str(s).decode_utf8_lossy().into_owned()
}

/// Escaped path plus `?query` and `#fragment` when present. An empty path becomes `/`.
pub fn request_uri(parts: &UrlParts<'_>) -> String {
    let mut target = if parts.path.is_empty() {
        String::from("/")
    } else {
        parts.path.to_string()
    };
    if let Some(query) = parts.query {
        target.push('?');
        target.push_str(query);
    }
    if let Some(fragment) = parts.fragment {
        target.push('#');
        target.push_str(fragment);
    }
    target
}
