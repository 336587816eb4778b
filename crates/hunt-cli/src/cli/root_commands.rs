use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Scaffold a job-search workspace.
    Init(InitArgs),
    /// Pipeline status: active counts per stage and pending actions.
    Status(StatusArgs),
    /// Dump all pipeline entries.
    List(ListArgs),
    /// Add an opportunity under a stage heading.
    Add(AddArgs),
    /// Move an entry to another stage.
    Move(MoveArgs),
    /// Follow-ups due across the pipeline.
    Followups(FollowupsArgs),
    /// Score a posting against the profile.
    Score(ScoreArgs),
    /// Daily briefing: pipeline summary, action items, recommendations.
    Briefing(BriefingArgs),
    /// Conversion analytics over the tracking tables.
    Analytics(AnalyticsArgs),
    /// Rebuild the summary document from the source documents.
    Sync(SyncArgs),
    /// Export application materials for one company/role.
    Materials(MaterialsArgs),
    /// Dump JSON schema for a registered type.
    Schema(SchemaArgs),
}

/// Arguments for `hunt init`.
#[derive(Clone, Debug, Args)]
pub struct InitArgs {
    /// Workspace directory to scaffold (defaults to the current directory).
    pub workspace: Option<String>,
}

/// Arguments for `hunt status`.
#[derive(Clone, Debug, Args)]
pub struct StatusArgs {
    /// Pipeline document path (defaults to the workspace pipeline).
    pub path: Option<String>,
}

/// Arguments for `hunt list`.
#[derive(Clone, Debug, Args)]
pub struct ListArgs {
    /// Pipeline document path (defaults to the workspace pipeline).
    pub path: Option<String>,
}

/// Arguments for `hunt add`.
#[derive(Clone, Debug, Args)]
pub struct AddArgs {
    /// Pipeline document path (defaults to the workspace pipeline).
    pub path: Option<String>,
    #[arg(long)]
    pub company: String,
    #[arg(long)]
    pub role: String,
    /// Target stage (heading label or snake/kebab case).
    #[arg(long, default_value = "Discovered")]
    pub stage: String,
    #[arg(long)]
    pub comp: Option<String>,
    #[arg(long)]
    pub location: Option<String>,
    #[arg(long)]
    pub url: Option<String>,
    /// Free-text note, stored as an indented sub-bullet.
    #[arg(long)]
    pub notes: Option<String>,
}

/// Arguments for `hunt move`.
#[derive(Clone, Debug, Args)]
pub struct MoveArgs {
    /// Pipeline document path (defaults to the workspace pipeline).
    pub path: Option<String>,
    /// Search term matched case-insensitively against entry lines.
    #[arg(long)]
    pub company: String,
    /// Target stage (heading label or snake/kebab case).
    #[arg(long)]
    pub to: String,
}

/// Arguments for `hunt followups`.
#[derive(Clone, Debug, Args)]
pub struct FollowupsArgs {
    /// Pipeline document path (defaults to the workspace pipeline).
    pub path: Option<String>,
}

/// Arguments for `hunt score`.
#[derive(Clone, Debug, Args)]
pub struct ScoreArgs {
    /// Profile document path (defaults to the workspace profile).
    #[arg(long)]
    pub profile: Option<String>,
    #[arg(long, default_value = "")]
    pub title: String,
    #[arg(long, default_value = "")]
    pub company: String,
    #[arg(long, default_value = "")]
    pub industry: String,
    #[arg(long, default_value = "")]
    pub location: String,
    #[arg(long, default_value = "")]
    pub comp: String,
    /// Company stage text (e.g. "Series B").
    #[arg(long, default_value = "")]
    pub stage: String,
    /// Remote/hybrid/onsite note, echoed in the report.
    #[arg(long, default_value = "")]
    pub remote: String,
}

/// Arguments for `hunt briefing`.
#[derive(Clone, Debug, Args)]
pub struct BriefingArgs {
    /// Pipeline document path (defaults to the workspace pipeline).
    pub path: Option<String>,
}

/// Arguments for `hunt analytics`.
#[derive(Clone, Debug, Args)]
pub struct AnalyticsArgs {
    /// Workspace directory (defaults to the resolved workspace).
    pub workspace: Option<String>,
}

/// Arguments for `hunt sync`.
#[derive(Clone, Debug, Args)]
pub struct SyncArgs {
    /// Workspace directory (defaults to the resolved workspace).
    pub workspace: Option<String>,
}

/// Arguments for `hunt materials`.
#[derive(Clone, Debug, Args)]
pub struct MaterialsArgs {
    #[arg(long)]
    pub company: String,
    #[arg(long)]
    pub role: String,
    /// Output directory (defaults to `<exports>/<company-role>`).
    #[arg(long)]
    pub output: Option<String>,
}

/// Arguments for `hunt schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    pub type_name: String,
}
