//! domain_recon library: hostname-to-zone lookup functionality
//!
//! This library resolves a hostname into a synthesized DNS zone plus a flat
//! record log by evaluating a fixed catalog of record-existence probes, and
//! collects WHOIS registrar fields, per-IP ownership summaries and HTTP
//! response headers alongside.
//!
//! # Example
//!
//! ```no_run
//! use clap::Parser;
//! use domain_recon::{run_lookup, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::parse_from(["domain_recon", "example.com"]);
//! let report = run_lookup(config).await?;
//! println!("{}", report.zone);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

#![warn(missing_docs)]

mod catalog;
mod classifier;
pub mod config;
mod domain;
mod error_handling;
mod headers;
pub mod initialization;
mod ip_lookup;
mod oracle;
mod whois;
mod zone;

// Re-export public API
pub use catalog::{record_catalog, Probe, RecordType};
pub use classifier::{Classifier, FlatLogEntry, WildcardPolicy};
pub use config::{Config, LogFormat, LogLevel, OutputFormat};
pub use error_handling::{HostnameError, InitializationError};
pub use ip_lookup::IpOwnership;
pub use oracle::{DnsOracle, ResolverOracle};
pub use run::{run_lookup, LookupReport};
pub use whois::WhoisField;
pub use zone::{serialize_zone, DnsClass, Rdata, ResourceRecord, Zone};

// Internal run module (contains the lookup orchestration)
mod run {
    use std::collections::BTreeMap;

    use anyhow::{Context, Result};
    use log::info;
    use serde::Serialize;

    use crate::catalog::record_catalog;
    use crate::classifier::{Classifier, FlatLogEntry};
    use crate::config::Config;
    use crate::domain;
    use crate::headers;
    use crate::initialization::{init_http_client, init_resolver};
    use crate::ip_lookup::{self, IpOwnership};
    use crate::oracle::DnsOracle;
    use crate::whois::{self, WhoisField};
    use crate::zone::{serialize_zone, Zone};

    /// Everything one lookup produced: the two core outputs (zone text and
    /// flat record log) plus the collaborator sections.
    #[derive(Debug, Serialize)]
    pub struct LookupReport {
        /// The hostname that was looked up.
        pub domain: String,
        /// Registrar fields of the registrable domain, deduplicated and
        /// sorted.
        pub whois: Vec<WhoisField>,
        /// Flat record log, in catalog order.
        pub dns_records: Vec<FlatLogEntry>,
        /// Resolved addresses with ownership summaries.
        pub ip_lookup: Vec<IpOwnership>,
        /// Final-response HTTP headers, lowercase names.
        pub http_headers: BTreeMap<String, Vec<String>>,
        /// The synthesized zone, serialized.
        pub zone: String,
    }

    /// Runs one complete lookup.
    ///
    /// The hostname is validated up front; an invalid hostname is the only
    /// fatal input condition. The DNS catalog is evaluated strictly in
    /// catalog order; the WHOIS, header and IP legs are independent of it
    /// and run concurrently. All state is scoped to this call.
    pub async fn run_lookup(config: Config) -> Result<LookupReport> {
        domain::validate_hostname(&config.domain)?;

        let oracle = DnsOracle::new(init_resolver());
        let client = init_http_client().context("failed to initialize HTTP client")?;

        let whois_domain = domain::base_domain(&config.domain);
        info!("looking up {} (whois: {})", config.domain, whois_domain);

        let dns_leg = async {
            let mut zone = Zone::new(&config.domain);
            let mut classifier =
                Classifier::new(&oracle, &config.domain, config.wildcard_policy);
            let dns_records = classifier.evaluate_catalog(record_catalog(), &mut zone).await;
            (zone, dns_records)
        };
        let whois_leg = async {
            if config.skip_whois {
                Vec::new()
            } else {
                whois::lookup_registrar_fields(&whois_domain).await
            }
        };
        let headers_leg = async {
            if config.skip_headers {
                BTreeMap::new()
            } else {
                headers::collect_http_headers(&client, &config.domain).await
            }
        };
        let ip_leg = ip_lookup::lookup_ip_ownership(&oracle, &config.domain);

        let ((zone, dns_records), whois_fields, http_headers, ips) =
            tokio::join!(dns_leg, whois_leg, headers_leg, ip_leg);

        info!(
            "{}: {} records from {} probes",
            config.domain,
            zone.records().len(),
            dns_records.len()
        );

        Ok(LookupReport {
            domain: config.domain,
            whois: whois_fields,
            dns_records,
            ip_lookup: ips,
            http_headers,
            zone: serialize_zone(&zone),
        })
    }
}
