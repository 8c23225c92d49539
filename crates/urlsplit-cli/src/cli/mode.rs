//! Mutually exclusive output-mode flags.

use clap::Args;
use urlsplit_core::config::ExportConfig;
use urlsplit_core::{Mode, UrlSplitError};

/// At most one of these may be given; giving none is reported by `resolve`.
#[derive(Debug, Args)]
#[group(id = "mode", multiple = false)]
pub struct ModeArgs {
    /// Print URL variables as a set of export statements.
    #[arg(short, long)]
    pub export: bool,

    /// Print the value of this key.
    #[arg(short, long, value_name = "NAME")]
    pub key: Option<String>,

    /// Render a template. Use {{KEY}} to replace values in the template.
    #[arg(short, long, value_name = "TEMPLATE")]
    pub format: Option<String>,
}

impl ModeArgs {
    pub fn resolve(&self, export: &ExportConfig) -> Result<Mode, UrlSplitError> {
        if self.export {
            return Ok(export.mode());
        }
        if let Some(key) = &self.key {
            return Ok(Mode::Key(key.clone()));
        }
        if let Some(template) = &self.format {
            return Ok(Mode::Template(template.clone()));
        }
        Err(UrlSplitError::NoModeSelected)
    }
}
