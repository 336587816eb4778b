//! Workspace document layout configuration.

use serde::{Deserialize, Serialize};

fn default_pipeline() -> String {
    String::from("PIPELINE.md")
}

fn default_profile() -> String {
    String::from("PROFILE.md")
}

fn default_summary() -> String {
    String::from("SUMMARY.md")
}

fn default_glossary() -> String {
    String::from("memory/glossary.md")
}

fn default_memory_dir() -> String {
    String::from("memory")
}

fn default_analytics_dir() -> String {
    String::from("memory/analytics")
}

fn default_exports_dir() -> String {
    String::from("exports")
}

/// File and directory names inside a workspace, all relative to its root.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DocumentsConfig {
    /// Opportunity tracker (heading-per-stage).
    #[serde(default = "default_pipeline")]
    pub pipeline: String,

    /// Searcher profile document.
    #[serde(default = "default_profile")]
    pub profile: String,

    /// Regenerated hot-cache summary.
    #[serde(default = "default_summary")]
    pub summary: String,

    /// Contacts and terms glossary.
    #[serde(default = "default_glossary")]
    pub glossary: String,

    /// Deep-storage root (companies, contacts, applications, analytics).
    #[serde(default = "default_memory_dir")]
    pub memory_dir: String,

    /// Analytics tables directory.
    #[serde(default = "default_analytics_dir")]
    pub analytics_dir: String,

    /// Default destination for `hunt materials`.
    #[serde(default = "default_exports_dir")]
    pub exports_dir: String,
}

impl Default for DocumentsConfig {
    fn default() -> Self {
        Self {
            pipeline: default_pipeline(),
            profile: default_profile(),
            summary: default_summary(),
            glossary: default_glossary(),
            memory_dir: default_memory_dir(),
            analytics_dir: default_analytics_dir(),
            exports_dir: default_exports_dir(),
        }
    }
}
