//! Reconciler configuration

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use shadow_fs::ConfigStore;

use crate::error::{Error, Result};
use crate::language::{self, Delims};
use crate::marker::Marker;

/// Name of the config file looked up in the working directory.
pub const CONFIG_FILE: &str = ".shadow.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShadowConfig {
    /// Language used when a file's extension is unknown.
    pub default_language: String,
    /// Run the consistency check after every replay.
    pub self_check: bool,
    /// Treat a failed consistency check as an error.
    pub strict_check: bool,
    /// Refuse to reconcile files with a dangling verbatim escape.
    pub abort_on_malformed: bool,
    /// Plain files of at most this many bytes are never propagated by `sync`.
    pub min_plain_size: u64,
    /// Extension (without dot) to language overrides.
    pub extensions: BTreeMap<String, String>,
    /// Language to delimiter-string overrides, e.g. `"c" = "/* */"`.
    pub languages: BTreeMap<String, String>,
}

impl Default for ShadowConfig {
    fn default() -> Self {
        Self {
            default_language: "plain".into(),
            self_check: true,
            strict_check: false,
            abort_on_malformed: false,
            min_plain_size: 10,
            extensions: BTreeMap::new(),
            languages: BTreeMap::new(),
        }
    }
}

impl ShadowConfig {
    /// Load from an explicit config file.
    pub fn load(path: &Path) -> Result<Self> {
        ConfigStore::new().load(path).map_err(Error::Config)
    }

    /// Load `.shadow.toml` from `dir`, or defaults if there is none.
    pub fn discover(dir: &Path) -> Result<Self> {
        ConfigStore::new()
            .load_or_default(&dir.join(CONFIG_FILE))
            .map_err(Error::Config)
    }

    /// Language for a file, by extension.
    pub fn language_for_path(&self, path: &Path) -> String {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        // Files like `x.py.tmp` take the language of the inner extension
        let ext = if ext == "tmp" {
            path.file_stem()
                .map(Path::new)
                .and_then(Path::extension)
                .map(|e| e.to_string_lossy().to_lowercase())
                .unwrap_or_default()
        } else {
            ext
        };

        self.extensions
            .get(&ext)
            .cloned()
            .or_else(|| language::language_for_extension(&ext).map(str::to_string))
            .unwrap_or_else(|| self.default_language.clone())
    }

    /// Marker for a language, honoring delimiter overrides.
    pub fn marker_for_language(&self, language: &str) -> Marker {
        let overridden = self
            .languages
            .get(&language.to_lowercase())
            .and_then(|s| Delims::parse(s))
            .and_then(|d| Marker::from_delims(&d));

        overridden.unwrap_or_else(|| Marker::from_language(language, &self.default_language))
    }

    pub fn marker_for_path(&self, path: &Path) -> Marker {
        self.marker_for_language(&self.language_for_path(path))
    }
}
