//! # auditlog CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.
//! Uses clap derive macros for argument parsing.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use auditlog_cli::demo::{run_demo, DemoArgs};
use auditlog_cli::verify::{run_verify, VerifyArgs};

/// Append-only tamper-evident ledger toolkit.
///
/// Builds hash-chained record sequences and verifies, after the fact,
/// whether any record's content or ordering was altered.
#[derive(Parser, Debug)]
#[command(name = "auditlog", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the scripted tamper-evidence walkthrough.
    Demo(DemoArgs),

    /// Verify an exported ledger file and report the first offense.
    Verify(VerifyArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let result = match &cli.command {
        Commands::Demo(args) => run_demo(args),
        Commands::Verify(args) => run_verify(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
