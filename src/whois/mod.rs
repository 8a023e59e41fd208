// whois/mod.rs
// Registrar-field collection via the system whois client.

mod parse;

pub use parse::WhoisField;

use std::process::Stdio;
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::process::Command;

use crate::config::WHOIS_TIMEOUT_SECS;

/// Looks up the registrar fields of a domain.
///
/// Failure of any kind (client missing, timeout, no answer) degrades to an
/// empty field list with a warning; the DNS legs of a lookup do not depend
/// on WHOIS succeeding.
pub async fn lookup_registrar_fields(domain: &str) -> Vec<WhoisField> {
    match run_whois(domain).await {
        Ok(raw) => {
            let fields = parse::parse_registrar_fields(&raw);
            if fields.is_empty() {
                log::warn!("whois returned no registrar fields for {domain}");
            }
            fields
        }
        Err(e) => {
            log::warn!("whois lookup failed for {domain}: {e:#}");
            Vec::new()
        }
    }
}

/// Summarizes the ownership of one IP address: the NetName, Organization and
/// OrgName lines of its WHOIS answer, joined by newlines. Empty on failure.
pub async fn ip_ownership_summary(ip: &str) -> String {
    const OWNERSHIP_FIELDS: [&str; 3] = ["NetName:", "Organization:", "OrgName:"];

    match run_whois(ip).await {
        Ok(raw) => raw
            .lines()
            .map(str::trim)
            .filter(|line| OWNERSHIP_FIELDS.iter().any(|f| line.starts_with(f)))
            .collect::<Vec<&str>>()
            .join("\n"),
        Err(e) => {
            log::warn!("whois lookup failed for {ip}: {e:#}");
            String::new()
        }
    }
}

/// Runs the system whois client for one query.
///
/// The query is passed as a single argument vector entry; no shell is
/// involved and no command string is built from the input.
async fn run_whois(query: &str) -> Result<String> {
    let output = tokio::time::timeout(
        Duration::from_secs(WHOIS_TIMEOUT_SECS),
        Command::new("whois")
            .arg(query)
            .stdin(Stdio::null())
            .output(),
    )
    .await
    .context("whois timed out")?
    .context("failed to run whois (is it installed?)")?;

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    if stdout.trim().is_empty() {
        anyhow::bail!(
            "whois produced no output (exit status {})",
            output.status
        );
    }
    Ok(stdout)
}
