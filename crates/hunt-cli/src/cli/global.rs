use clap::ValueEnum;

/// Shared output mode across all commands.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Markdown,
    Json,
}

impl OutputFormat {
    /// Map the `general.default_format` config string to a format.
    ///
    /// The config layer validates the string, so anything unexpected here
    /// just falls back to markdown.
    #[must_use]
    pub fn from_config(value: &str) -> Self {
        if value == "json" { Self::Json } else { Self::Markdown }
    }
}

/// Global flags available before or after subcommands.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    /// `--format` when given; otherwise the config default applies.
    pub format: Option<OutputFormat>,
    pub quiet: bool,
    pub verbose: bool,
    pub workspace: Option<String>,
}

impl GlobalFlags {
    /// The format to emit: flag first, then config, then markdown.
    #[must_use]
    pub fn format_or(&self, config_default: &str) -> OutputFormat {
        self.format
            .unwrap_or_else(|| OutputFormat::from_config(config_default))
    }
}
