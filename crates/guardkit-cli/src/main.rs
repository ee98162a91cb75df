//! # guardkit CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use guardkit_cli::check::{run_check, run_describe, CheckArgs, DescribeArgs};
use guardkit_core::DiagnosticConfig;

/// guardkit — runtime record guards from declarative schema files.
#[derive(Parser, Debug)]
#[command(name = "guardkit", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check documents against a schema file.
    Check(CheckArgs),

    /// Print the guards a schema file resolves to.
    Describe(DescribeArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Diagnostics are printed per document by `check`; the tracing copy
    // only shows up with -v.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn,guardkit::diagnostics=off"),
        1 => EnvFilter::new("info"),
        _ => EnvFilter::new("debug"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match DiagnosticConfig::from_env() {
        Ok(config) => config.install(),
        Err(e) => {
            tracing::error!("{e}");
            return ExitCode::from(2);
        }
    }

    let result = match cli.command {
        Commands::Check(args) => run_check(&args),
        Commands::Describe(args) => run_describe(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(2)
        }
    }
}
