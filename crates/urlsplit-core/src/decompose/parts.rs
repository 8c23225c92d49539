//! Raw component slices of a parsed URI reference.

use fluent_uri::encoding::EStr;
use fluent_uri::UriRef;

/// Components exactly as they appear in the input text; nothing is
/// lowercased, resolved or re-encoded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UrlParts<'a> {
    pub scheme: Option<&'a str>,
    /// Text between `//` and the path, including any `userinfo@`.
    pub authority: Option<&'a str>,
    pub path: &'a str,
    pub query: Option<&'a str>,
    pub fragment: Option<&'a str>,
}

impl<'a> UrlParts<'a> {
    pub fn from_uri(uri: &'a UriRef<&'a str>) -> Self {
        let text = uri.as_str();
        // A scheme never contains `:`, so it ends at the first one.
        let scheme = uri
            .scheme()
            .and_then(|_| text.split_once(':'))
            .map(|(scheme, _)| scheme);
        let authority = uri.authority().map(|_| authority_text(text, scheme));
        Self {
            scheme,
            authority,
            path: uri.path().as_str(),
            query: uri.query().map(EStr::as_str),
            fragment: uri.fragment().map(EStr::as_str),
        }
    }
}

/// Slices the authority out of a validated URI reference that has one.
fn authority_text<'a>(text: &'a str, scheme: Option<&str>) -> &'a str {
    let hier = match scheme {
        Some(scheme) => &text[scheme.len() + 1..],
        None => text,
    };
    let hier = hier.strip_prefix("//").unwrap_or(hier);
    let end = hier.find(['/', '?', '#']).unwrap_or(hier.len());
    &hier[..end]
}
