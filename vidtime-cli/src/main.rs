// vidtime-cli/src/main.rs
//
// Entry point for the vidtime CLI. Parses arguments, initializes logging,
// dispatches to the command implementations, and maps failures to a colored
// error line with a non-zero exit code.
//
// Logging uses env_logger with the RUST_LOG environment variable:
// - RUST_LOG=info (default): normal operation logs
// - RUST_LOG=debug: per-file probe details

mod cli;
mod commands;
mod config;
mod output;

use std::process;

use clap::Parser;
use colored::*;

use cli::{Cli, Commands};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    log::debug!("vidtime run started: {}", chrono::Local::now());

    let result = match cli.command {
        Commands::Scan(args) => commands::scan::execute_scan(args),
        Commands::Probe(args) => commands::probe::execute_probe(args),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".bright_red().bold(), e);
        process::exit(1);
    }
}
