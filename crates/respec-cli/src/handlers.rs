//! Command handlers
//!
//! Handlers return the process exit code: 0 for a clean check (or a
//! skipped one - a missing schema for an endpoint is not a failure), 1
//! when violations are found.
//!
//! Copyright (c) 2025 Respec Team
//! Licensed under the Apache-2.0 license

use crate::cli::{CheckArgs, OutputFormat, RoutesArgs};
use anyhow::{bail, Context, Result};
use colored::Colorize;
use respec_core::{load_document, SchemaDocument};
use serde::Serialize;
use serde_json::Value;
use std::io::Read;
use std::path::Path;
use tracing::info;

/// Machine-readable outcome of a `check` run
#[derive(Debug, Serialize)]
struct CheckReport<'a> {
    method: &'a str,
    path: &'a str,
    schema_applied: bool,
    valid: bool,
    violations: Vec<String>,
}

pub fn handle_check(args: &CheckArgs, schema: Option<&Path>, format: OutputFormat) -> Result<i32> {
    let document = load_schema(schema)?;
    let body = read_body(args.body.as_deref())?;

    let method = args.method.to_uppercase();
    let outcome = document.schema_for_endpoint(&method, &args.path);

    let (schema_applied, violations) = match outcome {
        Some(fragment) => (true, respec_core::validate_response(&body, fragment)),
        None => (false, Vec::new()),
    };
    let valid = violations.is_empty();

    info!(%method, path = %args.path, schema_applied, violations = violations.len(), "check complete");

    match format {
        OutputFormat::Json => {
            let report = CheckReport {
                method: &method,
                path: &args.path,
                schema_applied,
                valid,
                violations: violations.clone(),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => {
            if !schema_applied {
                println!(
                    "{} no response schema registered for {} {}",
                    "skipped:".yellow().bold(),
                    method,
                    args.path
                );
            } else if valid {
                println!("{} {} {}", "ok:".green().bold(), method, args.path);
            } else {
                println!(
                    "{} {} {} ({} violation{})",
                    "invalid:".red().bold(),
                    method,
                    args.path,
                    violations.len(),
                    if violations.len() == 1 { "" } else { "s" }
                );
                for violation in &violations {
                    println!("  {}", violation.red());
                }
            }
        }
    }

    Ok(if valid { 0 } else { 1 })
}

pub fn handle_routes(args: &RoutesArgs, schema: Option<&Path>, format: OutputFormat) -> Result<i32> {
    let document = load_schema(schema)?;

    #[derive(Debug, Serialize)]
    struct RouteEntry<'a> {
        template: &'a str,
        method: String,
        has_schema: bool,
    }

    let entries: Vec<RouteEntry> = document
        .routes()
        .iter()
        .flat_map(|route| {
            route.operations().iter().map(|operation| RouteEntry {
                template: route.template(),
                method: operation.method().to_uppercase(),
                has_schema: operation.response().is_some(),
            })
        })
        .filter(|entry| !args.with_schema || entry.has_schema)
        .collect();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&entries)?),
        OutputFormat::Text => {
            for entry in &entries {
                let marker = if entry.has_schema {
                    "schema".green()
                } else {
                    "no schema".dimmed()
                };
                println!("{:7} {}  [{}]", entry.method, entry.template, marker);
            }
        }
    }

    Ok(0)
}

fn load_schema(schema: Option<&Path>) -> Result<SchemaDocument> {
    let Some(path) = schema else {
        bail!("no schema document given; pass --schema or set RESPEC_SCHEMA");
    };
    Ok(load_document(path)?)
}

fn read_body(body: Option<&Path>) -> Result<Value> {
    let content = match body {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read body file '{}'", path.display()))?,
        _ => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read body from stdin")?;
            buffer
        }
    };

    serde_json::from_str(&content).context("response body is not valid JSON")
}
