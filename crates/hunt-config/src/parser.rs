//! Field-classification configuration for the pipeline parser.

use serde::{Deserialize, Serialize};

fn default_location_keywords() -> Vec<String> {
    ["remote", "bangalore", "mumbai", "delhi", "hybrid", "onsite", "india"]
        .into_iter()
        .map(String::from)
        .collect()
}

/// Knobs for the pipeline segment classifier.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ParserConfig {
    /// Keywords that mark a pipe segment as a location. Matched
    /// case-insensitively as substrings.
    #[serde(default = "default_location_keywords")]
    pub location_keywords: Vec<String>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            location_keywords: default_location_keywords(),
        }
    }
}
