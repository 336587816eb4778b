use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `hunt` binary.
#[derive(Debug, Parser)]
#[command(name = "hunt", version, about = "Hunt - job-search workspace tracker")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: markdown, json (default from config, else markdown)
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Workspace root (defaults to the current directory)
    #[arg(short, long, global = true)]
    pub workspace: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            workspace: self.workspace.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, GlobalFlags, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["hunt", "--format", "json", "--verbose", "status"])
            .expect("cli should parse");

        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Status(_)));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["hunt", "status", "--format", "markdown", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, Some(OutputFormat::Markdown));
        assert!(cli.quiet);
    }

    #[test]
    fn format_flag_is_optional() {
        let cli = Cli::try_parse_from(["hunt", "status"]).expect("cli should parse");
        assert_eq!(cli.format, None);

        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.format_or("markdown"), OutputFormat::Markdown);
        assert_eq!(flags.format_or("json"), OutputFormat::Json);
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["hunt", "--format", "xml", "status"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn add_requires_company_and_role() {
        let parsed = Cli::try_parse_from(["hunt", "add", "--company", "Acme"]);
        assert!(parsed.is_err());

        let cli = Cli::try_parse_from(["hunt", "add", "--company", "Acme", "--role", "PM"])
            .expect("cli should parse");
        let Commands::Add(args) = cli.command else {
            panic!("expected add");
        };
        assert_eq!(args.stage, "Discovered");
    }

    #[test]
    fn move_requires_target_stage() {
        let parsed = Cli::try_parse_from(["hunt", "move", "--company", "Acme"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn workspace_flag_is_extracted() {
        let cli = Cli::try_parse_from(["hunt", "--workspace", "/tmp/demo", "sync"])
            .expect("cli should parse");
        let flags = cli.global_flags();
        assert_eq!(flags.workspace.as_deref(), Some("/tmp/demo"));
    }
}
