//! Per-IP ownership lookup.
//!
//! Resolves the hostname's addresses through the oracle and attaches a
//! filtered WHOIS ownership summary to each.

use serde::Serialize;

use crate::catalog::RecordType;
use crate::oracle::ResolverOracle;
use crate::whois;

/// One resolved address with its WHOIS ownership summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IpOwnership {
    /// The resolved address.
    pub ip: String,
    /// NetName/Organization/OrgName lines of the address's WHOIS answer;
    /// empty when the lookup failed.
    pub summary: String,
}

/// Resolves `hostname` to its addresses and summarizes each one's owner.
pub async fn lookup_ip_ownership<O: ResolverOracle>(
    oracle: &O,
    hostname: &str,
) -> Vec<IpOwnership> {
    let mut results = Vec::new();
    for ip in oracle.resolve_type(RecordType::A, hostname).await {
        let summary = whois::ip_ownership_summary(&ip).await;
        results.push(IpOwnership { ip, summary });
    }
    results
}
