mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    // Initialize tracing; diagnostics go to stderr so the stdout JSON
    // contract of `handle` stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Ask {
            query,
            corpus,
            config,
            json,
        } => commands::ask::run(&query, &corpus, config.as_deref(), json),
        Commands::Handle { corpus, config } => commands::handle::run(&corpus, config.as_deref()),
        Commands::Stats { corpus, config } => commands::stats::run(&corpus, config.as_deref()),
        Commands::Version => commands::version::run(),
    }
}
