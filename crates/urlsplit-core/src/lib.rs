pub mod config;
pub mod logging;

pub mod decompose;
pub mod error;
pub mod input;
pub mod render;

pub use decompose::{decompose, decompose_parts, UrlParts, Var, VarSet};
pub use error::{Result, UrlSplitError};
pub use input::{parse_url, resolve_input, InputPolicy};
pub use render::{render, Helpers, Mode};

use std::io::Write;

/// Runs the whole pipeline for one resolved URL string: parse, decompose, render.
pub fn split(input: &str, mode: &Mode, helpers: &Helpers, out: &mut dyn Write) -> Result<()> {
    let uri = parse_url(input)?;
    let vars = decompose(&uri);
    // Userinfo may hold credentials; keep it out of the log.
    tracing::debug!(
        scheme = vars.get("URL_SCHEME").unwrap_or_default(),
        host = vars.get("URL_HOSTNAME").unwrap_or_default(),
        "decomposed URL into {} variables",
        vars.len()
    );
    render(&vars, mode, helpers, out)
}
