//! Per-type rdata decoders.
//!
//! One decoder per tagged variant, so the A→CNAME reclassification step
//! re-enters the same dispatch instead of special-casing control flow. A line
//! failing its type's structural check (token arity, numeric fields) is
//! dropped silently; remaining valid lines from the same probe are still
//! accepted.

use crate::catalog::RecordType;
use crate::zone::Rdata;

/// Decodes the raw answer lines of one probe into rdata payloads.
pub(crate) fn decode_lines(record_type: RecordType, lines: &[String]) -> Vec<Rdata> {
    match record_type {
        RecordType::A => lines
            .iter()
            .map(|line| Rdata::A {
                address: line.clone(),
            })
            .collect(),
        RecordType::Cname => lines
            .iter()
            .map(|line| Rdata::Cname {
                target: line.clone(),
            })
            .collect(),
        RecordType::Ns => lines
            .iter()
            .map(|line| Rdata::Ns {
                nameserver: line.clone(),
            })
            .collect(),
        RecordType::Mx => lines.iter().filter_map(|line| decode_mx(line)).collect(),
        RecordType::Txt => lines
            .iter()
            .map(|line| Rdata::Txt {
                text: strip_quotes(line).to_string(),
            })
            .collect(),
        RecordType::Srv => lines.iter().filter_map(|line| decode_srv(line)).collect(),
        RecordType::Soa => lines.iter().filter_map(|line| decode_soa(line)).collect(),
    }
}

/// MX lines must split into exactly two tokens with a numeric priority.
fn decode_mx(line: &str) -> Option<Rdata> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 2 {
        return None;
    }
    let priority = tokens[0].parse::<u16>().ok()?;
    Some(Rdata::Mx {
        priority,
        target: tokens[1].to_string(),
    })
}

/// SRV lines must split into exactly four tokens, the first three numeric.
fn decode_srv(line: &str) -> Option<Rdata> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 4 {
        return None;
    }
    Some(Rdata::Srv {
        priority: tokens[0].parse().ok()?,
        weight: tokens[1].parse().ok()?,
        port: tokens[2].parse().ok()?,
        target: tokens[3].to_string(),
    })
}

/// SOA lines must split into at least seven tokens; the seven positional
/// fields are stored verbatim, anything past them is ignored.
fn decode_soa(line: &str) -> Option<Rdata> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < 7 {
        return None;
    }
    Some(Rdata::Soa {
        primary_ns: tokens[0].to_string(),
        resp_email: tokens[1].to_string(),
        serial: tokens[2].to_string(),
        refresh: tokens[3].to_string(),
        retry: tokens[4].to_string(),
        expire: tokens[5].to_string(),
        minimum: tokens[6].to_string(),
    })
}

/// Strips one layer of surrounding double quotes, as emitted by textual
/// lookup tools for TXT answers. Chunking is a serialization concern; the
/// stored text is the raw value.
fn strip_quotes(line: &str) -> &str {
    if line.len() >= 2 && line.starts_with('"') && line.ends_with('"') {
        &line[1..line.len() - 1]
    } else {
        line
    }
}
