// CLI-specific lint overrides
#![allow(clippy::print_stdout, reason = "CLI tools print to stdout")]
#![allow(clippy::print_stderr, reason = "CLI tools print to stderr")]
#![allow(clippy::unwrap_used, reason = "CLI can unwrap for user-facing errors")]
#![allow(clippy::expect_used, reason = "CLI can expect for user-facing errors")]

mod cli;
mod commands;
mod output;
mod wallet;

use clap::Parser;
use cli::{Cli, Commands};
use color_eyre::eyre::Result;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Propose(args) => commands::propose::run(args, cli.json).await,
        Commands::Deploy(args) => commands::deploy::run(args, cli.json).await,
        Commands::Predict(command) => commands::predict::run(command, cli.json).await,
        Commands::Hash(args) => commands::hash::run(args, cli.json).await,
        Commands::List(args) => commands::list::run(args, cli.json).await,
    }
}

/// Logs go to stderr so `--json` output on stdout stays parseable
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}
