//! Export mode: shell assignment statements.

use crate::decompose::VarSet;
use crate::error::{Result, UrlSplitError};
use std::fmt::Write as _;
use std::io::Write;

pub const DEFAULT_EXPORT_KEYWORD: &str = "export";

/// Wraps `s` in double quotes. `\`, `"`, `$` and `` ` `` get a backslash;
/// control characters become `\n`, `\t`, `\x00`-style escapes so a value never
/// spans lines or carries raw NUL bytes.
pub fn shell_quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' | '"' | '$' | '`' => {
                out.push('\\');
                out.push(c);
            }
            '\u{07}' => out.push_str("\\a"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0c}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{0b}' => out.push_str("\\v"),
            c if c.is_ascii_control() => {
                let _ = write!(out, "\\x{:02x}", c as u32);
            }
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Writes one line per variable, in order. Stops at the first failed write;
/// lines already written stay written.
pub fn render_export(vars: &VarSet, keyword: &str, out: &mut dyn Write) -> Result<()> {
    for var in vars {
        let assignment = format!("{}={}", var.name, var.value);
        writeln!(out, "{} {}", keyword, shell_quote(&assignment))
            .map_err(UrlSplitError::OutputWrite)?;
    }
    Ok(())
}
