//! # hunt-config
//!
//! Layered configuration loading for Hunt using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`HUNT_*` prefix, `__` as separator)
//! 2. Workspace-level `.hunt/config.toml`
//! 3. User-level `~/.config/hunt/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `HUNT_DOCUMENTS__PIPELINE` -> `documents.pipeline`,
//! `HUNT_GENERAL__DEFAULT_FORMAT` -> `general.default_format`, etc. The `__`
//! (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use hunt_config::HuntConfig;
//!
//! let config = HuntConfig::load_with_dotenv(None).expect("config");
//! println!("pipeline file: {}", config.documents.pipeline);
//! ```

mod documents;
mod error;
mod general;
mod parser;

pub use documents::DocumentsConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use parser::ParserConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct HuntConfig {
    #[serde(default)]
    pub documents: DocumentsConfig,
    #[serde(default)]
    pub parser: ParserConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl HuntConfig {
    /// Load configuration from all sources (TOML files + environment
    /// variables) for the given workspace root.
    ///
    /// Does NOT call `dotenvy` — use [`HuntConfig::load_with_dotenv`] for
    /// `.env` support.
    ///
    /// # Errors
    ///
    /// Extraction failures and invalid field values surface as
    /// [`ConfigError`].
    pub fn load(workspace: Option<&Path>) -> Result<Self, ConfigError> {
        let config: Self = Self::figment(workspace).extract()?;
        config.general.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// Loads `.env` from the workspace root (or the current directory) before
    /// building the figment. This is the typical entry point for the CLI.
    ///
    /// # Errors
    ///
    /// Same as [`HuntConfig::load`].
    pub fn load_with_dotenv(workspace: Option<&Path>) -> Result<Self, ConfigError> {
        match workspace {
            Some(root) => {
                let _ = dotenvy::from_path(root.join(".env"));
            }
            None => {
                let _ = dotenvy::dotenv();
            }
        }
        Self::load(workspace)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on
    /// top.
    #[must_use]
    pub fn figment(workspace: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Workspace-local config
        let local_path = workspace
            .map_or_else(|| PathBuf::from(".hunt"), |root| root.join(".hunt"))
            .join("config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("HUNT_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("hunt").join("config.toml"))
    }
}
