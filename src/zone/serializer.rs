//! Column-aligned zone-file rendering.
//!
//! Each record renders as one line with the fields
//! `name  ttl  class  type  rdata`, where every field starts at the same
//! character offset computed from that field's maximum width across the whole
//! record set. The TTL column is blank for records inheriting the zone
//! default. Rdata uses the standard single-line textual conventions, with one
//! override: TXT values longer than [`TXT_CHUNK_SIZE`] bytes render as a
//! parenthesized multi-line block of quoted chunks indented to the rdata
//! column.

use crate::catalog::RecordType;
use crate::config::TXT_CHUNK_SIZE;

use super::{Rdata, ResourceRecord, Zone};

/// Renders the zone into canonical zone-file text.
///
/// Records are emitted in insertion order; rendering is deterministic, so
/// serializing the same zone twice yields byte-identical output.
pub fn serialize_zone(zone: &Zone) -> String {
    let name_width = column_width(zone, |rr| rr.name.len());
    let ttl_width = column_width(zone, |rr| ttl_text(rr, zone.default_ttl()).len());
    let class_width = column_width(zone, |rr| rr.class.to_string().len());
    let type_width = column_width(zone, |rr| type_token(rr.rdata.record_type()).len());

    // Offset of the rdata column; continuation lines of chunked TXT blocks
    // are indented to it.
    let rdata_padding = name_width + 1 + ttl_width + 1 + class_width + 1 + type_width + 1;

    let mut out = String::new();
    out.push_str(&format!("$ORIGIN {}\n", zone.origin()));
    out.push_str(&format!("$TTL {}\n", zone.default_ttl()));

    for rr in zone.records() {
        out.push('\n');
        out.push_str(&format!(
            "{:<name_width$} {:<ttl_width$} {:<class_width$} {:<type_width$} {}",
            rr.name,
            ttl_text(rr, zone.default_ttl()),
            rr.class.to_string(),
            type_token(rr.rdata.record_type()),
            format_rdata(&rr.rdata, rdata_padding),
        ));
    }

    out.push('\n');
    out
}

fn column_width(zone: &Zone, field_len: impl Fn(&ResourceRecord) -> usize) -> usize {
    zone.records().iter().map(field_len).max().unwrap_or(0)
}

fn ttl_text(rr: &ResourceRecord, default_ttl: u32) -> String {
    match rr.ttl {
        Some(ttl) if ttl != default_ttl => ttl.to_string(),
        _ => String::new(),
    }
}

fn type_token(record_type: RecordType) -> &'static str {
    match record_type {
        RecordType::A => "A",
        RecordType::Cname => "CNAME",
        RecordType::Mx => "MX",
        RecordType::Txt => "TXT",
        RecordType::Srv => "SRV",
        RecordType::Ns => "NS",
        RecordType::Soa => "SOA",
    }
}

/// Renders one rdata payload. Dispatch is by variant; only TXT carries the
/// chunking override.
fn format_rdata(rdata: &Rdata, padding: usize) -> String {
    match rdata {
        Rdata::A { address } => address.clone(),
        Rdata::Cname { target } => target.clone(),
        Rdata::Ns { nameserver } => nameserver.clone(),
        Rdata::Mx { priority, target } => format!("{priority} {target}"),
        Rdata::Txt { text } => format_txt(text, padding),
        Rdata::Soa {
            primary_ns,
            resp_email,
            serial,
            refresh,
            retry,
            expire,
            minimum,
        } => format!("{primary_ns} {resp_email} {serial} {refresh} {retry} {expire} {minimum}"),
        Rdata::Srv {
            priority,
            weight,
            port,
            target,
        } => format!("{priority} {weight} {port} {target}"),
    }
}

/// Quotes a TXT value, chunking values longer than [`TXT_CHUNK_SIZE`] bytes
/// into a parenthesized block with one quoted chunk per line.
fn format_txt(text: &str, padding: usize) -> String {
    if text.len() <= TXT_CHUNK_SIZE {
        return format!("\"{}\"", escape_txt(text));
    }

    let indent = " ".repeat(padding);
    let mut out = String::from("(\n");
    for chunk in text.as_bytes().chunks(TXT_CHUNK_SIZE) {
        let chunk = String::from_utf8_lossy(chunk);
        out.push_str(&indent);
        out.push_str(&format!("\"{}\"\n", escape_txt(&chunk)));
    }
    out.push_str(&indent);
    out.push(')');
    out
}

/// Backslash-escapes embedded `"` and `\` so the quoted form stays parseable.
fn escape_txt(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if c == '"' || c == '\\' {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
