//! Configuration types and CLI options.

use clap::{Parser, ValueEnum};

use crate::classifier::WildcardPolicy;

/// Logging level for the application.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Report output format.
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable sections followed by the zone text
    Text,
    /// The full report as one JSON document
    Json,
}

/// Lookup configuration and CLI options.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "domain_recon",
    about = "Resolves a hostname into a synthesized DNS zone file plus WHOIS, IP and HTTP header details."
)]
pub struct Config {
    /// Hostname to look up (e.g. "example.com" or "www.example.co.uk")
    pub domain: String,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    pub log_format: LogFormat,

    /// Report output format
    #[arg(long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Whether wildcard answers suppress identical exact-match records
    #[arg(long, value_enum, default_value = "record-only")]
    pub wildcard_policy: WildcardPolicy,

    /// Skip the WHOIS leg of the lookup
    #[arg(long)]
    pub skip_whois: bool,

    /// Skip the HTTP header-collection leg of the lookup
    #[arg(long)]
    pub skip_headers: bool,
}
