//! Command implementations for shadow-cli

pub mod check;
pub mod locate;
pub mod strip;
pub mod sync;

use std::path::Path;

use shadow_core::{Reconciler, ShadowConfig};

use crate::error::Result;

pub use check::run_check;
pub use locate::run_locate;
pub use strip::run_strip;
pub use sync::run_sync;

/// Global options shared by every command.
#[derive(Debug, Clone, Default)]
pub struct Context {
    pub config: ShadowConfig,
    pub language: Option<String>,
}

impl Context {
    /// Load the explicit config file, or `.shadow.toml` from `cwd` if present.
    pub fn load(cwd: &Path, config: Option<&Path>, language: Option<String>) -> Result<Self> {
        let config = match config {
            Some(path) => ShadowConfig::load(path)?,
            None => ShadowConfig::discover(cwd)?,
        };
        tracing::debug!(?config, "loaded configuration");
        Ok(Self { config, language })
    }

    pub fn reconciler(&self) -> Reconciler {
        Reconciler::new(self.config.clone()).with_language(self.language.clone())
    }
}
