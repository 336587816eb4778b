use clap::Parser;

mod cli;
mod commands;
mod output;
mod workspace;


fn main() {
    if let Err(error) = run() {
        eprintln!("hunt error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();

    // init scaffolds a possibly-nonexistent root and schema needs no
    // workspace at all, so both dispatch before workspace resolution.
    match &cli.command {
        cli::Commands::Init(args) => return commands::init::handle(args, &flags),
        cli::Commands::Schema(args) => return commands::schema::handle(args),
        _ => {}
    }

    let workspace = workspace::Workspace::resolve(flags.workspace.as_deref())?;
    commands::dispatch::dispatch(cli.command, &workspace, &flags)
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("HUNT_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
