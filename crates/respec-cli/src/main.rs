//! respec - check API response bodies against an OpenAPI schema subset
//!
//! Copyright (c) 2025 Respec Team
//! Licensed under the Apache-2.0 license

mod cli;
mod handlers;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match run(&cli) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            process::exit(2);
        }
    }
}

fn run(cli: &Cli) -> Result<i32> {
    match &cli.command {
        Commands::Check(args) => handlers::handle_check(args, cli.schema.as_deref(), cli.format),
        Commands::Routes(args) => handlers::handle_routes(args, cli.schema.as_deref(), cli.format),
    }
}

/// RUST_LOG wins when set; otherwise verbosity flags pick the filter
fn init_logging(verbosity: u8) {
    let default_filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
