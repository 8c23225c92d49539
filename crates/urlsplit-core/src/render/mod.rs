//! Output strategies for a decomposed URL.
//!
//! Each mode writes to a caller-supplied sink; nothing here touches stdout
//! directly.

mod export;
mod helpers;
mod key;
mod template;

pub use export::{render_export, shell_quote, DEFAULT_EXPORT_KEYWORD};
pub use helpers::{trim_path, Helper, Helpers};
pub use key::render_key;
pub use template::render_template;

use crate::decompose::VarSet;
use crate::error::Result;
use std::io::Write;

/// The single output strategy selected for an invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// One `<keyword> "<name>=<value>"` line per variable.
    Export { keyword: String },
    /// The bare value of one variable.
    Key(String),
    /// A template source rendered against all variables.
    Template(String),
}

impl Mode {
    /// Export mode with the plain `export` keyword.
    pub fn export() -> Self {
        Mode::Export {
            keyword: DEFAULT_EXPORT_KEYWORD.to_string(),
        }
    }
}

pub fn render(vars: &VarSet, mode: &Mode, helpers: &Helpers, out: &mut dyn Write) -> Result<()> {
    match mode {
        Mode::Export { keyword } => {
            tracing::debug!("rendering {} variables as {} statements", vars.len(), keyword);
            render_export(vars, keyword, out)
        }
        Mode::Key(name) => {
            tracing::debug!("looking up {}", name);
            render_key(vars, name, out)
        }
        Mode::Template(source) => {
            tracing::debug!("rendering template ({} bytes)", source.len());
            render_template(vars, source, helpers, out)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> VarSet {
        let mut vars = VarSet::new();
        vars.push("URL_SCHEME", "https");
        vars.push("URL_PATH", "/a/b/");
        vars
    }

    fn run(mode: Mode) -> String {
        let mut out = Vec::new();
        render(&sample(), &mode, &Helpers::standard(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn dispatches_each_mode() {
        assert_eq!(
            run(Mode::export()),
            "export \"URL_SCHEME=https\"\nexport \"URL_PATH=/a/b/\"\n"
        );
        assert_eq!(run(Mode::Key("URL_SCHEME".into())), "https");
        assert_eq!(
            run(Mode::Template("{{ URL_SCHEME }}:{{ URL_PATH|trimpath }}".into())),
            "https:a/b"
        );
    }

    #[test]
    fn custom_export_keyword() {
        let out = run(Mode::Export {
            keyword: "declare -x".into(),
        });
        assert!(out.starts_with("declare -x \"URL_SCHEME=https\"\n"));
    }
}
