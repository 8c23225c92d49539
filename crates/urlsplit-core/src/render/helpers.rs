//! Helpers exposed to templates.
//!
//! Helpers are handed to the template renderer explicitly; each one becomes
//! both a filter and a function in a freshly built environment.

use std::collections::BTreeMap;
use std::fmt;

/// A string-to-string template helper.
pub type Helper = fn(&str) -> String;

/// Strips leading and trailing `/` characters.
pub fn trim_path(s: &str) -> String {
    s.trim_matches('/').to_string()
}

/// Named helpers available to templates.
#[derive(Clone, Default)]
pub struct Helpers {
    helpers: BTreeMap<&'static str, Helper>,
}

impl Helpers {
    /// No helpers at all; only the engine's built-ins are available.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The helpers the CLI ships with: `trimpath`.
    pub fn standard() -> Self {
        Self::empty().with("trimpath", trim_path)
    }

    /// Adds or replaces a helper.
    pub fn with(mut self, name: &'static str, helper: Helper) -> Self {
        self.helpers.insert(name, helper);
        self
    }

    pub fn get(&self, name: &str) -> Option<Helper> {
        self.helpers.get(name).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Helper)> + '_ {
        self.helpers.iter().map(|(name, helper)| (*name, *helper))
    }
}

impl fmt::Debug for Helpers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.helpers.keys()).finish()
    }
}
