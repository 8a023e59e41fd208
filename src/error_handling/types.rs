//! Error type definitions.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// Error initializing the DNS resolver.
    #[error("DNS resolver initialization error: {0}")]
    #[allow(dead_code)] // Reserved for resolver configurations that can fail
    DnsResolverError(String),
}

/// Rejection reasons for the input hostname.
///
/// An invalid hostname is the only condition fatal to a lookup; every
/// per-probe failure downstream degrades to "no record for this probe."
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HostnameError {
    /// The hostname contains no dot, so it cannot name a zone.
    #[error("invalid hostname (no dot found): {0}")]
    MissingDot(String),

    /// Shorter than any real domain name.
    #[error("no domain name is that short: {0}")]
    TooShort(String),

    /// Longer than the accepted bound.
    #[error("hostname too long: {0}")]
    TooLong(String),

    /// A label violates hostname syntax.
    #[error("invalid hostname: {0}")]
    InvalidSyntax(String),
}
