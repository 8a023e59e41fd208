//! Hostname validation and registrable-domain extraction.
//!
//! The lookup accepts any hostname (subdomains included); WHOIS, however, is
//! queried for the registrable (base) domain, extracted with the compiled
//! Public Suffix List so multi-part suffixes like `co.uk` or `com.pe`
//! resolve correctly.

use std::sync::OnceLock;

use regex::Regex;

use crate::config::{MAX_HOSTNAME_LEN, MIN_HOSTNAME_LEN};
use crate::error_handling::HostnameError;

fn hostname_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        // Labels: alphanumeric with inner hyphens, 1-63 chars each; the
        // final label must be alphabetic.
        Regex::new(r"^(?:[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?\.)+[A-Za-z]{2,}$")
            .expect("hostname regex is valid")
    })
}

/// Validates the input hostname before any probing starts.
///
/// This is the only fatal precondition of a lookup: a hostname without a
/// dot, outside the accepted length bounds, or violating label syntax is
/// rejected up front.
pub fn validate_hostname(hostname: &str) -> Result<(), HostnameError> {
    if !hostname.contains('.') {
        return Err(HostnameError::MissingDot(hostname.to_string()));
    }
    if hostname.len() < MIN_HOSTNAME_LEN {
        return Err(HostnameError::TooShort(hostname.to_string()));
    }
    if hostname.len() > MAX_HOSTNAME_LEN {
        return Err(HostnameError::TooLong(hostname.to_string()));
    }
    if !hostname_regex().is_match(hostname) {
        return Err(HostnameError::InvalidSyntax(hostname.to_string()));
    }
    Ok(())
}

/// Extracts the registrable domain of a hostname (`www.example.co.uk` →
/// `example.co.uk`). Falls back to the hostname itself when the suffix list
/// has no answer, so WHOIS still gets a sensible query.
pub fn base_domain(hostname: &str) -> String {
    match psl::domain_str(hostname) {
        Some(domain) => domain.to_string(),
        None => {
            log::warn!("base-domain extraction failed for {hostname}");
            hostname.to_string()
        }
    }
}

#[cfg(test)]
mod tests;
