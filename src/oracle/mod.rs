//! Resolver oracle: the external name-resolution collaborator.
//!
//! The classifier consumes lookups exclusively through the [`ResolverOracle`]
//! trait, which takes structured `(type, name)` parameters. Lookup failures
//! of any kind (timeout, NXDOMAIN, transport errors) surface as an empty
//! answer, never as an error crossing into the classifier; "absent" and
//! "lookup failed" are deliberately indistinguishable at this layer.

use hickory_resolver::proto::rr::{RData, RecordType as HickoryType};
use hickory_resolver::TokioAsyncResolver;

use crate::catalog::RecordType;

/// One textual lookup per probe.
///
/// `resolve_type` returns zero or more answer lines, ascending-sorted when
/// multi-valued. `resolve_alias_target` is the dedicated alias-detection path
/// used for CNAME probes; it distinguishes "is an alias for" answers from
/// plain lookups.
#[allow(async_fn_in_trait)]
pub trait ResolverOracle: Send + Sync {
    /// Looks up `fqdn` for the given record type and returns the textual
    /// answer lines, empty on no data or failure.
    async fn resolve_type(&self, record_type: RecordType, fqdn: &str) -> Vec<String>;

    /// Returns the alias target of `fqdn` if the name is an alias, `None`
    /// otherwise.
    async fn resolve_alias_target(&self, fqdn: &str) -> Option<String>;
}

/// Production oracle backed by `hickory-resolver`.
///
/// Each call is independent and bounded by the resolver's configured timeout;
/// no answers are cached across probes.
pub struct DnsOracle {
    resolver: TokioAsyncResolver,
}

impl DnsOracle {
    /// Wraps a configured resolver.
    pub fn new(resolver: TokioAsyncResolver) -> Self {
        DnsOracle { resolver }
    }

    async fn lookup_lines(&self, record_type: RecordType, fqdn: &str) -> Vec<String> {
        let hickory_type = to_hickory_type(record_type);
        match self.resolver.lookup(fqdn, hickory_type).await {
            Ok(lookup) => {
                let mut lines: Vec<String> = lookup
                    .iter()
                    .filter_map(|rdata| rdata_line(record_type, rdata))
                    .collect();
                // Multi-valued answers are ascending-sorted so repeated runs
                // see the same line order.
                lines.sort();
                lines
            }
            Err(e) => {
                let error_msg = e.to_string();
                // "no records found" and NXDomain are expected for most
                // catalog probes; anything else is a degraded lookup.
                if error_msg.contains("no records found") || error_msg.contains("NXDomain") {
                    log::debug!("no {record_type} records for {fqdn}");
                } else {
                    log::warn!("{record_type} lookup failed for {fqdn}: {e}");
                }
                Vec::new()
            }
        }
    }
}

impl ResolverOracle for DnsOracle {
    async fn resolve_type(&self, record_type: RecordType, fqdn: &str) -> Vec<String> {
        self.lookup_lines(record_type, fqdn).await
    }

    async fn resolve_alias_target(&self, fqdn: &str) -> Option<String> {
        match self.resolver.lookup(fqdn, HickoryType::CNAME).await {
            Ok(lookup) => lookup.iter().find_map(|rdata| {
                if let RData::CNAME(target) = rdata {
                    Some(target.to_utf8())
                } else {
                    None
                }
            }),
            Err(e) => {
                let error_msg = e.to_string();
                if !error_msg.contains("no records found") && !error_msg.contains("NXDomain") {
                    log::warn!("alias lookup failed for {fqdn}: {e}");
                }
                None
            }
        }
    }
}

fn to_hickory_type(record_type: RecordType) -> HickoryType {
    match record_type {
        RecordType::A => HickoryType::A,
        RecordType::Cname => HickoryType::CNAME,
        RecordType::Mx => HickoryType::MX,
        RecordType::Txt => HickoryType::TXT,
        RecordType::Srv => HickoryType::SRV,
        RecordType::Ns => HickoryType::NS,
        RecordType::Soa => HickoryType::SOA,
    }
}

/// Renders one answer rdata into the textual line shape the classifier
/// decodes: IPs and hostnames bare, MX as `preference exchange`, TXT quoted
/// (as `dig +short` emits it), SRV and SOA as their space-separated fields.
/// Answers of a type other than the queried one are ignored.
fn rdata_line(record_type: RecordType, rdata: &RData) -> Option<String> {
    match (record_type, rdata) {
        (RecordType::A, RData::A(a)) => Some(a.to_string()),
        (RecordType::Cname, RData::CNAME(target)) => Some(target.to_utf8()),
        (RecordType::Ns, RData::NS(ns)) => Some(ns.to_utf8()),
        (RecordType::Mx, RData::MX(mx)) => {
            Some(format!("{} {}", mx.preference(), mx.exchange().to_utf8()))
        }
        (RecordType::Txt, RData::TXT(txt)) => {
            let joined: String = txt
                .iter()
                .map(|bytes| String::from_utf8_lossy(bytes).to_string())
                .collect::<Vec<String>>()
                .join("");
            Some(format!("\"{joined}\""))
        }
        (RecordType::Srv, RData::SRV(srv)) => Some(format!(
            "{} {} {} {}",
            srv.priority(),
            srv.weight(),
            srv.port(),
            srv.target().to_utf8()
        )),
        (RecordType::Soa, RData::SOA(soa)) => Some(format!(
            "{} {} {} {} {} {} {}",
            soa.mname().to_utf8(),
            soa.rname().to_utf8(),
            soa.serial(),
            soa.refresh(),
            soa.retry(),
            soa.expire(),
            soa.minimum()
        )),
        _ => None,
    }
}
