//! URL acquisition: positional argument or standard-input fallback, then parsing.

use crate::error::{Result, UrlSplitError};
use fluent_uri::UriRef;
use std::io::Read;

/// Where the URL may come from when no positional argument was given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputPolicy {
    /// Read the whole input stream and use it as the URL.
    #[default]
    StdinFallback,
    /// The positional argument is mandatory; the input stream is never touched.
    Required,
}

/// Picks the URL text. The argument always wins; otherwise `reader` is drained
/// (and whitespace trimmed when `trim` is set) unless the policy forbids it.
pub fn resolve_input(
    arg: Option<String>,
    policy: InputPolicy,
    trim: bool,
    reader: &mut dyn Read,
) -> Result<String> {
    if let Some(url) = arg {
        return Ok(url);
    }
    if policy == InputPolicy::Required {
        return Err(UrlSplitError::MissingUrl);
    }

    let mut buf = String::new();
    reader
        .read_to_string(&mut buf)
        .map_err(UrlSplitError::InputRead)?;
    tracing::debug!("read {} bytes of URL input from stdin", buf.len());

    if trim {
        Ok(buf.trim().to_string())
    } else {
        Ok(buf)
    }
}

/// Parses an RFC 3986 URI reference without normalising it. Relative
/// references are accepted and decompose with empty scheme and authority.
pub fn parse_url(input: &str) -> Result<UriRef<&str>> {
    UriRef::parse(input).map_err(|source| UrlSplitError::Parse {
        input: input.to_string(),
        source,
    })
}
