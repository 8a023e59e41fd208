//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `domain_recon` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use domain_recon::initialization::init_logger_with;
use domain_recon::{run_lookup, Config, LookupReport, OutputFormat};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    let output = config.output.clone();
    match run_lookup(config).await {
        Ok(report) => {
            match output {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
                OutputFormat::Text => print_report(&report),
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("domain_recon error: {:#}", e);
            process::exit(1);
        }
    }
}

fn print_report(report: &LookupReport) {
    if !report.whois.is_empty() {
        println!("== WHOIS ({} fields) ==", report.whois.len());
        for field in &report.whois {
            println!("{}: {}", field.name, field.value);
        }
        println!();
    }

    if !report.ip_lookup.is_empty() {
        println!("== IP lookup ==");
        for entry in &report.ip_lookup {
            println!("{}", entry.ip);
            for line in entry.summary.lines() {
                println!("    {line}");
            }
        }
        println!();
    }

    if !report.http_headers.is_empty() {
        println!("== HTTP headers ==");
        for (name, values) in &report.http_headers {
            for value in values {
                println!("{name}: {value}");
            }
        }
        println!();
    }

    if !report.dns_records.is_empty() {
        println!("== DNS records ==");
        for record in &report.dns_records {
            let name = if record.name.is_empty() { "@" } else { &record.name };
            println!(
                "{:<5} {:<24} {}",
                record.record_type.to_string(),
                name,
                record.value.replace('\n', " | ")
            );
        }
        println!();
    }

    println!("== Zone ==");
    println!("{}", report.zone);
}
