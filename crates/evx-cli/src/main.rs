use clap::Parser;

mod bootstrap;
mod cli;
mod commands;
mod output;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("evx error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();

    // Schema inspection needs no store configuration.
    if let cli::Commands::Schema(args) = &cli.command {
        return commands::schema::handle(args, &flags);
    }

    let config = bootstrap::load_config(&flags)?;

    match cli.command {
        cli::Commands::Seed => commands::seed::handle(&config, &flags).await,
        cli::Commands::Query(args) => commands::query::handle(&args, &config, &flags).await,
        cli::Commands::Run(args) => commands::run::handle(&args, &config, &flags).await,
        // Handled before config load.
        cli::Commands::Schema(_) => Ok(()),
    }
}

/// Wire up the tracing subscriber once, honoring `EVIDEX_LOG` over the
/// `--quiet`/`--verbose` flags. Events go to stderr so they never mix
/// with rendered command output on stdout.
fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let fallback = match (quiet, verbose) {
        (true, _) => "error",
        (false, true) => "debug",
        (false, false) => "warn",
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("EVIDEX_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
