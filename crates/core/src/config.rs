use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::overrides::{resolve_web_root_pattern, OverrideTable};
use crate::sources::resolve_source_entries;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid resolver config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Session settings this crate understands, in launch-configuration form:
///
/// ```json
/// {
///   "webRoot": "/home/me/project/www",
///   "sourceMapPathOverrides": { "webpack:///./*": "${webRoot}/*" },
///   "useDefaultOverrides": false
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResolverConfig {
    pub web_root: String,
    pub source_map_path_overrides: OverrideTable,
    /// Append the bundler presets from `OverrideTable::default_web` after the
    /// user's own entries.
    pub use_default_overrides: bool,
}

impl ResolverConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_web_root(mut self, web_root: impl Into<String>) -> Self {
        self.web_root = web_root.into();
        self
    }

    /// The override table to apply: user entries first, then any presets whose
    /// pattern the user did not already define, with `${webRoot}` expanded.
    pub fn effective_overrides(&self) -> OverrideTable {
        let mut table = self.source_map_path_overrides.clone();
        if self.use_default_overrides {
            for (pattern, replacement) in OverrideTable::default_web().iter() {
                if !table.contains(pattern) {
                    table.insert(pattern, replacement);
                }
            }
        }
        resolve_web_root_pattern(&self.web_root, &table)
    }

    /// Resolve a map's `sources` with this configuration.
    pub fn resolve_sources<S: AsRef<str>>(
        &self,
        generated: &str,
        source_root: &str,
        sources: &[S],
    ) -> Vec<String> {
        let overrides = self.effective_overrides();
        resolve_source_entries(generated, source_root, sources, &self.web_root, &overrides)
    }
}
