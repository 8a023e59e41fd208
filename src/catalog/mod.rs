//! Probe catalog: the fixed, ordered list of record-existence checks.
//!
//! The catalog is pure data. It determines both the order probes are
//! evaluated in and the order entries appear in the flat record log; it is
//! never re-sorted. The names cover the apex plus the well-known mail,
//! DKIM/DMARC, autodiscovery, enterprise-enrollment, ACME and generic alias
//! conventions, along with wildcard probes and apex NS/SOA.

use serde::Serialize;
use strum_macros::{Display, EnumIter, EnumString};

/// DNS record types this tool probes for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum RecordType {
    /// IPv4 address record
    A,
    /// Canonical name (alias) record
    Cname,
    /// Mail exchanger record
    Mx,
    /// Text record
    Txt,
    /// Service locator record
    Srv,
    /// Nameserver record
    Ns,
    /// Start of authority record
    Soa,
}

/// One catalog entry: a record type plus the owner-name prefix to probe.
///
/// An empty prefix probes the apex. The full query name is
/// `{prefix}.{domain}` for a non-empty prefix, `{domain}` otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Probe {
    /// Record type to look up.
    pub record_type: RecordType,
    /// Owner-name prefix relative to the queried domain; `""` for the apex,
    /// `"*"` for the wildcard.
    pub name_prefix: &'static str,
}

impl Probe {
    const fn new(record_type: RecordType, name_prefix: &'static str) -> Self {
        Probe {
            record_type,
            name_prefix,
        }
    }
}

/// The fixed probe catalog, in evaluation order.
pub fn record_catalog() -> &'static [Probe] {
    use RecordType::*;

    const CATALOG: &[Probe] = &[
        Probe::new(A, ""),
        Probe::new(A, "*"),
        Probe::new(A, "mail"),
        Probe::new(A, "remote"),
        Probe::new(A, "www"),
        Probe::new(Cname, "*"),
        Probe::new(Cname, "www"),
        Probe::new(Cname, "autodiscover"),
        Probe::new(Cname, "sip"),
        Probe::new(Cname, "lyncdiscover"),
        Probe::new(Cname, "enterpriseregistration"),
        Probe::new(Cname, "enterpriseenrollment"),
        Probe::new(Cname, "email.mg"),
        Probe::new(Cname, "msoid"),
        Probe::new(Cname, "_acme-challenge"),
        Probe::new(Cname, "k1._domainkey"),
        Probe::new(Cname, "k2._domainkey"),
        Probe::new(Cname, "k3._domainkey"),
        Probe::new(Cname, "s1._domainkey"),
        Probe::new(Cname, "s2._domainkey"),
        Probe::new(Cname, "selector1._domainkey"),
        Probe::new(Cname, "selector2._domainkey"),
        Probe::new(Cname, "ctct1._domainkey"),
        Probe::new(Cname, "ctct2._domainkey"),
        Probe::new(Cname, "mail"),
        Probe::new(Cname, "ftp"),
        Probe::new(Mx, ""),
        Probe::new(Mx, "mg"),
        Probe::new(Txt, ""),
        Probe::new(Txt, "_dmarc"),
        Probe::new(Txt, "_amazonses"),
        Probe::new(Txt, "_acme-challenge"),
        Probe::new(Txt, "_acme-challenge.www"),
        Probe::new(Txt, "_mailchannels"),
        Probe::new(Txt, "default._domainkey"),
        Probe::new(Txt, "google._domainkey"),
        Probe::new(Txt, "mg"),
        Probe::new(Txt, "smtp._domainkey.mg"),
        Probe::new(Txt, "k1._domainkey"),
        Probe::new(Srv, "_sip._tls"),
        Probe::new(Srv, "_sipfederationtls._tcp"),
        Probe::new(Ns, ""),
        Probe::new(Soa, ""),
    ];

    CATALOG
}
