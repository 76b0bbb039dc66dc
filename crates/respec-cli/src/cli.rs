//! Command-line argument definitions
//!
//! Copyright (c) 2025 Respec Team
//! Licensed under the Apache-2.0 license

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Check captured API response bodies against an OpenAPI-subset schema
#[derive(Debug, Parser)]
#[command(name = "respec", version, about, long_about = None)]
pub struct Cli {
    /// Schema document to load (YAML or JSON)
    #[arg(short, long, global = true, env = "RESPEC_SCHEMA")]
    pub schema: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Validate a response body against the schema for an endpoint
    Check(CheckArgs),
    /// List the endpoint templates registered in the schema document
    Routes(RoutesArgs),
}

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// HTTP method of the request, e.g. GET
    pub method: String,

    /// Concrete request path, e.g. /api/agents/42
    pub path: String,

    /// File containing the JSON response body; '-' or omitted reads stdin
    pub body: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct RoutesArgs {
    /// Only show routes that declare a JSON response schema
    #[arg(long)]
    pub with_schema: bool,
}

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable, colored text
    Text,
    /// Machine-readable JSON report
    Json,
}
