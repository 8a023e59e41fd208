//! Record classifier: the per-probe state machine.
//!
//! For each catalog probe, in catalog order: compute the query name, resolve
//! it through the oracle (alias-target path preferred for CNAME probes),
//! abandon on empty, decode per type, reclassify letter-bearing A answers as
//! CNAME, keep wildcard bookkeeping, stable-sort MX answers by priority, and
//! append the accepted records to the zone plus exactly one flat log entry
//! for the probe.
//!
//! Per-probe failures never raise; every degraded outcome is "no record for
//! this probe."

mod decode;

use std::collections::HashSet;

use clap::ValueEnum;
use serde::Serialize;

use crate::catalog::{Probe, RecordType};
use crate::oracle::ResolverOracle;
use crate::zone::{Rdata, ResourceRecord, Zone};

/// Whether a wildcard answer suppresses later identical exact-match records.
///
/// Observed variants of this logic disagree; the default records wildcard
/// values without suppressing anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum WildcardPolicy {
    /// Record wildcard values but never suppress exact-match records.
    #[default]
    RecordOnly,
    /// Drop a non-wildcard record whose value equals a previously seen
    /// wildcard value of the same type.
    SuppressExactMatches,
}

/// Per-run accumulator of wildcard answers, populated by `*` probes.
#[derive(Debug, Default)]
struct WildcardState {
    last_wildcard_a: HashSet<String>,
    last_wildcard_cname: Option<String>,
}

/// One flat log entry: emitted once per probe that yielded a non-empty final
/// value, independent of how many resource records the probe produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlatLogEntry {
    /// Record type, post-reclassification.
    #[serde(rename = "type")]
    pub record_type: RecordType,
    /// The probe's name prefix (`""` for the apex).
    pub name: String,
    /// Full raw answer text, pre-chunking, lines joined by newlines.
    pub value: String,
}

/// Evaluates catalog probes against an oracle, filling a zone and a flat log.
///
/// All transient state is scoped to one instance, which is scoped to one
/// lookup request.
pub struct Classifier<'a, O> {
    oracle: &'a O,
    domain: &'a str,
    policy: WildcardPolicy,
    wildcards: WildcardState,
}

impl<'a, O: ResolverOracle> Classifier<'a, O> {
    /// Creates a classifier for one request.
    pub fn new(oracle: &'a O, domain: &'a str, policy: WildcardPolicy) -> Self {
        Classifier {
            oracle,
            domain,
            policy,
            wildcards: WildcardState::default(),
        }
    }

    /// Evaluates every probe in catalog order, appending accepted records to
    /// `zone`. The returned flat log is in catalog order.
    pub async fn evaluate_catalog(&mut self, probes: &[Probe], zone: &mut Zone) -> Vec<FlatLogEntry> {
        let mut log = Vec::new();
        for probe in probes {
            self.evaluate_probe(probe, zone, &mut log).await;
        }
        log
    }

    async fn evaluate_probe(
        &mut self,
        probe: &Probe,
        zone: &mut Zone,
        log: &mut Vec<FlatLogEntry>,
    ) {
        let query_name = if probe.name_prefix.is_empty() {
            self.domain.to_string()
        } else {
            format!("{}.{}", probe.name_prefix, self.domain)
        };
        let mut record_type = probe.record_type;

        // CNAME probes prefer the dedicated alias-detection path; an explicit
        // alias answer displaces the generic lookup for this probe.
        let mut lines = if record_type == RecordType::Cname {
            match self.oracle.resolve_alias_target(&query_name).await {
                Some(target) => vec![target],
                None => {
                    self.oracle
                        .resolve_type(RecordType::Cname, &query_name)
                        .await
                }
            }
        } else {
            self.oracle.resolve_type(record_type, &query_name).await
        };
        trim_lines(&mut lines);
        if lines.is_empty() {
            // The sole "record not configured" signal; lookup failure and
            // absence are indistinguishable here.
            return;
        }

        // An A answer containing any letter cannot be an address: the name is
        // an alias seen through a textual lookup. Re-query as CNAME and
        // restart; the original A text is never used.
        if record_type == RecordType::A && contains_letter(&lines) {
            record_type = RecordType::Cname;
            lines = self
                .oracle
                .resolve_type(RecordType::Cname, &query_name)
                .await;
            trim_lines(&mut lines);
            if lines.is_empty() {
                return;
            }
        }

        let mut rdata = decode::decode_lines(record_type, &lines);

        if record_type == RecordType::Mx {
            // Stable sort: equal priorities keep their resolver order.
            rdata.sort_by_key(|rd| match rd {
                Rdata::Mx { priority, .. } => *priority,
                _ => 0,
            });
        }

        if probe.name_prefix == "*" {
            self.remember_wildcard(&rdata);
        } else if self.policy == WildcardPolicy::SuppressExactMatches {
            rdata.retain(|rd| !self.matches_wildcard(rd));
            if rdata.is_empty() {
                log::debug!(
                    "{record_type} {query_name}: all values matched a wildcard, suppressed"
                );
                return;
            }
        }

        let owner = record_name(record_type, probe.name_prefix, self.domain);
        for rd in rdata {
            zone.add_resource_record(ResourceRecord::new(owner.clone(), rd));
        }

        log.push(FlatLogEntry {
            record_type,
            name: probe.name_prefix.to_string(),
            value: lines.join("\n"),
        });
    }

    fn remember_wildcard(&mut self, rdata: &[Rdata]) {
        for rd in rdata {
            match rd {
                Rdata::A { address } => {
                    self.wildcards.last_wildcard_a.insert(address.clone());
                }
                Rdata::Cname { target } => {
                    self.wildcards.last_wildcard_cname = Some(target.clone());
                }
                _ => {}
            }
        }
    }

    fn matches_wildcard(&self, rd: &Rdata) -> bool {
        match rd {
            Rdata::A { address } => self.wildcards.last_wildcard_a.contains(address),
            Rdata::Cname { target } => {
                self.wildcards.last_wildcard_cname.as_deref() == Some(target.as_str())
            }
            _ => false,
        }
    }
}

/// Owner name for accepted records. An empty prefix names the apex `@`,
/// except CNAME, which uses the full queried hostname. Preserved asymmetry.
fn record_name(record_type: RecordType, name_prefix: &str, domain: &str) -> String {
    if name_prefix.is_empty() {
        if record_type == RecordType::Cname {
            domain.to_string()
        } else {
            "@".to_string()
        }
    } else {
        name_prefix.to_string()
    }
}

fn trim_lines(lines: &mut Vec<String>) {
    for line in lines.iter_mut() {
        *line = line.trim().to_string();
    }
    lines.retain(|line| !line.is_empty());
}

fn contains_letter(lines: &[String]) -> bool {
    lines
        .iter()
        .any(|line| line.chars().any(|c| c.is_ascii_alphabetic()))
}
