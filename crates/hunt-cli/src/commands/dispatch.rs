use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::workspace::Workspace;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(
    command: Commands,
    workspace: &Workspace,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Status(args) => commands::status::handle(&args, workspace, flags),
        Commands::List(args) => commands::list::handle(&args, workspace, flags),
        Commands::Add(args) => commands::add::handle(&args, workspace, flags),
        Commands::Move(args) => commands::transition::handle(&args, workspace, flags),
        Commands::Followups(args) => commands::followups::handle(&args, workspace, flags),
        Commands::Score(args) => commands::score::handle(&args, workspace, flags),
        Commands::Briefing(args) => commands::briefing::handle(&args, workspace, flags),
        Commands::Analytics(args) => commands::analytics::handle(&args, workspace, flags),
        Commands::Sync(args) => commands::sync::handle(&args, workspace, flags),
        Commands::Materials(args) => commands::materials::handle(&args, workspace, flags),
        Commands::Init(_) | Commands::Schema(_) => {
            unreachable!("init/schema are pre-dispatched in main")
        }
    }
}
