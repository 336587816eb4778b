//! Workspace resolution and document I/O.
//!
//! A workspace is a directory of documents named by the config layer. All
//! reads are whole-file; missing documents read as empty text except for the
//! mutating commands, which require the document to exist so a typo'd path
//! cannot silently create a new pipeline.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use hunt_config::HuntConfig;

/// A resolved workspace root plus its layered configuration.
#[derive(Debug, Clone)]
pub struct Workspace {
    pub root: PathBuf,
    pub config: HuntConfig,
}

impl Workspace {
    /// Resolve a workspace from an optional root override, defaulting to the
    /// current directory. The override must name an existing directory.
    pub fn resolve(root_override: Option<&str>) -> anyhow::Result<Self> {
        let root = match root_override {
            Some(path) => {
                let explicit = PathBuf::from(path);
                anyhow::ensure!(
                    explicit.is_dir(),
                    "invalid workspace '{}': directory does not exist",
                    explicit.display()
                );
                explicit
            }
            None => std::env::current_dir().context("failed to read current directory")?,
        };
        Self::at(root)
    }

    /// Build a workspace at `root` without requiring it to exist yet
    /// (`hunt init` creates it).
    pub fn at(root: PathBuf) -> anyhow::Result<Self> {
        let config = HuntConfig::load_with_dotenv(Some(root.as_path()))
            .context("failed to load hunt configuration")?;
        Ok(Self { root, config })
    }

    pub fn pipeline_path(&self, override_path: Option<&str>) -> PathBuf {
        self.document_path(override_path, &self.config.documents.pipeline)
    }

    pub fn profile_path(&self, override_path: Option<&str>) -> PathBuf {
        self.document_path(override_path, &self.config.documents.profile)
    }

    #[must_use]
    pub fn summary_path(&self) -> PathBuf {
        self.root.join(&self.config.documents.summary)
    }

    #[must_use]
    pub fn glossary_path(&self) -> PathBuf {
        self.root.join(&self.config.documents.glossary)
    }

    #[must_use]
    pub fn memory_dir(&self) -> PathBuf {
        self.root.join(&self.config.documents.memory_dir)
    }

    #[must_use]
    pub fn analytics_dir(&self) -> PathBuf {
        self.root.join(&self.config.documents.analytics_dir)
    }

    #[must_use]
    pub fn exports_dir(&self) -> PathBuf {
        self.root.join(&self.config.documents.exports_dir)
    }

    /// Location keywords for the pipeline segment classifier.
    #[must_use]
    pub fn location_keywords(&self) -> &[String] {
        &self.config.parser.location_keywords
    }

    fn document_path(&self, override_path: Option<&str>, configured: &str) -> PathBuf {
        override_path.map_or_else(|| self.root.join(configured), PathBuf::from)
    }
}

/// Read a document, treating a missing file as empty input.
#[must_use]
pub fn read_or_empty(path: &Path) -> String {
    match fs::read_to_string(path) {
        Ok(text) => text,
        Err(error) => {
            tracing::debug!(path = %path.display(), %error, "document missing, using empty input");
            String::new()
        }
    }
}

/// Read a document that must exist (mutating commands).
pub fn read_required(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path).with_context(|| format!("cannot read '{}'", path.display()))
}

/// Overwrite a document in full, creating parent directories as needed.
pub fn write_document(path: &Path, content: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("cannot create '{}'", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("cannot write '{}'", path.display()))
}
