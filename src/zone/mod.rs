//! Zone model: an origin-scoped, ordered, append-only collection of typed
//! resource records.
//!
//! The model performs no validation and no deduplication beyond what the
//! classifier already guarantees; multiple records sharing name and type are
//! legal (round-robin A, multiple MX/NS). A `Zone` is built once per lookup
//! request, consumed once by the serializer, then discarded.

mod serializer;

pub use serializer::serialize_zone;

use crate::catalog::RecordType;
use crate::config::DEFAULT_TTL;

/// DNS class of a resource record. Only the Internet class is probed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DnsClass {
    /// Internet class (`IN`)
    #[default]
    In,
}

impl std::fmt::Display for DnsClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DnsClass::In => f.write_str("IN"),
        }
    }
}

/// Type-specific payload of a resource record.
///
/// TXT text is stored raw and unchunked; chunking long values is a
/// serialization concern. SOA fields are stored verbatim as received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rdata {
    /// IPv4 address
    A {
        /// Dotted-quad address text.
        address: String,
    },
    /// Alias target
    Cname {
        /// Canonical name the owner aliases.
        target: String,
    },
    /// Nameserver hostname
    Ns {
        /// Authoritative nameserver hostname.
        nameserver: String,
    },
    /// Mail exchanger with preference value (lower is preferred)
    Mx {
        /// Preference value; lower is preferred.
        priority: u16,
        /// Mail exchanger hostname.
        target: String,
    },
    /// Free-form text
    Txt {
        /// Raw text, quotes stripped, unchunked.
        text: String,
    },
    /// Start of authority: the seven positional fields, verbatim
    Soa {
        /// Primary nameserver.
        primary_ns: String,
        /// Responsible party mailbox in domain-name form.
        resp_email: String,
        /// Zone serial.
        serial: String,
        /// Secondary refresh interval.
        refresh: String,
        /// Failed-refresh retry interval.
        retry: String,
        /// Expiry bound for secondaries.
        expire: String,
        /// Negative-caching TTL.
        minimum: String,
    },
    /// Service locator
    Srv {
        /// Target selection priority; lower is preferred.
        priority: u16,
        /// Relative weight among equal priorities.
        weight: u16,
        /// Service port.
        port: u16,
        /// Service host.
        target: String,
    },
}

impl Rdata {
    /// The record type this payload belongs to.
    pub fn record_type(&self) -> RecordType {
        match self {
            Rdata::A { .. } => RecordType::A,
            Rdata::Cname { .. } => RecordType::Cname,
            Rdata::Ns { .. } => RecordType::Ns,
            Rdata::Mx { .. } => RecordType::Mx,
            Rdata::Txt { .. } => RecordType::Txt,
            Rdata::Soa { .. } => RecordType::Soa,
            Rdata::Srv { .. } => RecordType::Srv,
        }
    }
}

/// One typed DNS answer entry: owner name, optional TTL, class, and rdata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    /// Owner name; `@` for the zone apex.
    pub name: String,
    /// Record TTL. `None` inherits the zone default and renders blank.
    pub ttl: Option<u32>,
    /// Record class.
    pub class: DnsClass,
    /// Type-specific payload.
    pub rdata: Rdata,
}

impl ResourceRecord {
    /// Creates a record with the zone-default TTL and `IN` class.
    pub fn new(name: impl Into<String>, rdata: Rdata) -> Self {
        ResourceRecord {
            name: name.into(),
            ttl: None,
            class: DnsClass::In,
            rdata,
        }
    }
}

/// An origin-scoped ordered record collection plus a default TTL.
#[derive(Debug, Clone)]
pub struct Zone {
    origin: String,
    default_ttl: u32,
    records: Vec<ResourceRecord>,
}

impl Zone {
    /// Creates an empty zone for the given domain. The origin is stored in
    /// absolute form (trailing dot appended if missing).
    pub fn new(domain: &str) -> Self {
        let origin = if domain.ends_with('.') {
            domain.to_string()
        } else {
            format!("{domain}.")
        };
        Zone {
            origin,
            default_ttl: DEFAULT_TTL,
            records: Vec::new(),
        }
    }

    /// Zone origin in absolute form.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Default TTL applied to records without an explicit TTL.
    pub fn default_ttl(&self) -> u32 {
        self.default_ttl
    }

    /// Appends a record unconditionally, preserving insertion order.
    pub fn add_resource_record(&mut self, rr: ResourceRecord) {
        self.records.push(rr);
    }

    /// Records in insertion order.
    pub fn records(&self) -> &[ResourceRecord] {
        &self.records
    }

    /// Whether the zone holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests;
