use crate::input::InputPolicy;
use crate::render::{Mode, DEFAULT_EXPORT_KEYWORD};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// `[input]` section: how the URL is acquired.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Never fall back to stdin; the URL argument is always required.
    pub require_url: bool,
    /// Trim surrounding whitespace from a URL read from stdin.
    pub trim: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            require_url: false,
            trim: true,
        }
    }
}

impl InputConfig {
    /// The `--require-url` flag can only tighten the configured policy.
    pub fn policy(&self, require_url_flag: bool) -> InputPolicy {
        if self.require_url || require_url_flag {
            InputPolicy::Required
        } else {
            InputPolicy::StdinFallback
        }
    }
}

/// `[export]` section: shape of export-mode statements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Statement keyword, e.g. `export`, `declare -x` or `local`.
    pub keyword: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            keyword: DEFAULT_EXPORT_KEYWORD.to_string(),
        }
    }
}

impl ExportConfig {
    pub fn mode(&self) -> Mode {
        Mode::Export {
            keyword: self.keyword.clone(),
        }
    }
}

/// Global configuration loaded from `~/.config/urlsplit/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UrlsplitConfig {
    pub input: InputConfig,
    pub export: ExportConfig,
}

/// Existing config file, if any. Never creates directories.
pub fn config_path() -> Result<Option<PathBuf>> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urlsplit")?;
    Ok(xdg_dirs.find_config_file("config.toml"))
}

/// Load configuration from disk, falling back to defaults when no file exists.
/// The file is never written: the tool runs inside scripts.
pub fn load_or_default() -> Result<UrlsplitConfig> {
    match config_path()? {
        Some(path) => load_from(&path),
        None => {
            tracing::debug!("no config file found, using defaults");
            Ok(UrlsplitConfig::default())
        }
    }
}

pub fn load_from(path: &Path) -> Result<UrlsplitConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: UrlsplitConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    tracing::debug!("loaded config from {}", path.display());
    Ok(cfg)
}
