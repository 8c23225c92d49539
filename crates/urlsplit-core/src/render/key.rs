//! Key-lookup mode.

use crate::decompose::VarSet;
use crate::error::{Result, UrlSplitError};
use std::io::Write;

/// Writes the value of the first variable named exactly `name`, unquoted and
/// without a trailing newline. Nothing is written when the name is unknown.
pub fn render_key(vars: &VarSet, name: &str, out: &mut dyn Write) -> Result<()> {
    let value = vars
        .get(name)
        .ok_or_else(|| UrlSplitError::NoSuchKey(name.to_string()))?;
    out.write_all(value.as_bytes())
        .map_err(UrlSplitError::OutputWrite)
}
