//! General application configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_format() -> String {
    String::from("markdown")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Default output format when no `--format` flag is given:
    /// "markdown" or "json".
    #[serde(default = "default_format")]
    pub default_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_format: default_format(),
        }
    }
}

impl GeneralConfig {
    /// Validate field values after extraction.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidValue`] when `default_format` names an unknown
    /// format.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.default_format.as_str() {
            "markdown" | "json" => Ok(()),
            other => Err(ConfigError::InvalidValue {
                field: String::from("general.default_format"),
                reason: format!("'{other}' is not one of: markdown, json"),
            }),
        }
    }
}
