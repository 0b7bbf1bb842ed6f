//! hatch CLI - validated, blueprint-driven project scaffolding
//!
//! This is the main entry point for the hatch command-line interface.

mod cli;
mod commands;
mod init_command;
mod output;
mod tasks;

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> ExitCode {
    // Parse CLI args
    let cli = Cli::parse();

    // Initialize tracing
    let verbosity = cli.verbose.saturating_add(cli.command.trailing_verbosity());
    init_tracing(verbosity, cli.quiet);

    // Run command
    let config = cli.config.as_deref();
    let result = match cli.command {
        Commands::New(args) => commands::new::run(args, config).await,
        Commands::Init(args) => commands::init::run(args, config).await,
        Commands::Blueprint(cmd) => commands::blueprint::run(cmd, config),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

/// Initialize tracing with appropriate verbosity
fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("info"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}
