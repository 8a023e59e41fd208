//! Zone model and serializer tests.

use super::*;
use crate::config::{DEFAULT_TTL, TXT_CHUNK_SIZE};

fn zone_with(records: Vec<ResourceRecord>) -> Zone {
    let mut zone = Zone::new("example.com");
    for rr in records {
        zone.add_resource_record(rr);
    }
    zone
}

#[test]
fn origin_gains_trailing_dot() {
    assert_eq!(Zone::new("example.com").origin(), "example.com.");
    assert_eq!(Zone::new("example.com.").origin(), "example.com.");
}

#[test]
fn append_preserves_insertion_order_and_duplicates() {
    let zone = zone_with(vec![
        ResourceRecord::new(
            "@",
            Rdata::A {
                address: "192.0.2.1".into(),
            },
        ),
        ResourceRecord::new(
            "@",
            Rdata::A {
                address: "192.0.2.2".into(),
            },
        ),
        ResourceRecord::new(
            "@",
            Rdata::A {
                address: "192.0.2.1".into(),
            },
        ),
    ]);
    // No deduplication: round-robin A records are legal.
    assert_eq!(zone.records().len(), 3);
    let addresses: Vec<_> = zone
        .records()
        .iter()
        .map(|rr| match &rr.rdata {
            Rdata::A { address } => address.as_str(),
            other => panic!("unexpected rdata: {other:?}"),
        })
        .collect();
    assert_eq!(addresses, vec!["192.0.2.1", "192.0.2.2", "192.0.2.1"]);
}

#[test]
fn serialization_is_deterministic() {
    let zone = zone_with(vec![
        ResourceRecord::new(
            "@",
            Rdata::Mx {
                priority: 10,
                target: "mx1.example.com.".into(),
            },
        ),
        ResourceRecord::new(
            "www",
            Rdata::Cname {
                target: "example.com.".into(),
            },
        ),
    ]);
    let first = serialize_zone(&zone);
    let second = serialize_zone(&zone);
    assert_eq!(first, second);
}

#[test]
fn header_carries_origin_and_default_ttl() {
    let zone = zone_with(vec![]);
    let text = serialize_zone(&zone);
    assert!(text.starts_with("$ORIGIN example.com.\n$TTL 3600\n"));
}

#[test]
fn columns_align_across_records() {
    let zone = zone_with(vec![
        ResourceRecord::new(
            "@",
            Rdata::A {
                address: "192.0.2.1".into(),
            },
        ),
        ResourceRecord::new(
            "enterpriseregistration",
            Rdata::Cname {
                target: "enterpriseregistration.windows.net.".into(),
            },
        ),
    ]);
    let text = serialize_zone(&zone);
    let lines: Vec<&str> = text.lines().filter(|l| !l.is_empty() && !l.starts_with('$')).collect();
    assert_eq!(lines.len(), 2);
    // The type token of each record starts at the same offset.
    let offset_a = lines[0].find(" A ").unwrap();
    let offset_cname = lines[1].find(" CNAME ").unwrap();
    assert_eq!(offset_a, offset_cname);
    // Both lines place the owner name in a column as wide as the longest name.
    let name_width = "enterpriseregistration".len();
    assert!(lines[0].starts_with(&format!("{:<name_width$} ", "@")));
    assert!(lines[1].starts_with("enterpriseregistration "));
}

#[test]
fn ttl_column_is_blank_when_equal_to_zone_default() {
    let mut explicit = ResourceRecord::new(
        "@",
        Rdata::Ns {
            nameserver: "ns1.example.com.".into(),
        },
    );
    explicit.ttl = Some(DEFAULT_TTL);
    let mut overridden = ResourceRecord::new(
        "@",
        Rdata::Ns {
            nameserver: "ns2.example.com.".into(),
        },
    );
    overridden.ttl = Some(300);

    let zone = zone_with(vec![explicit, overridden]);
    let text = serialize_zone(&zone);
    let lines: Vec<&str> = text.lines().filter(|l| l.contains("NS")).collect();
    assert!(!lines[0].contains("3600"));
    assert!(lines[1].contains("300"));
}

#[test]
fn txt_of_exactly_chunk_size_renders_as_one_quoted_line() {
    let text_value = "x".repeat(TXT_CHUNK_SIZE);
    let zone = zone_with(vec![ResourceRecord::new(
        "@",
        Rdata::Txt {
            text: text_value.clone(),
        },
    )]);
    let text = serialize_zone(&zone);
    assert!(text.contains(&format!("\"{text_value}\"")));
    assert!(!text.contains('('));
}

#[test]
fn txt_one_byte_over_chunk_size_renders_as_two_chunk_block() {
    let text_value = format!("{}y", "x".repeat(TXT_CHUNK_SIZE));
    let zone = zone_with(vec![ResourceRecord::new(
        "@",
        Rdata::Txt { text: text_value },
    )]);
    let text = serialize_zone(&zone);

    let lines: Vec<&str> = text.lines().collect();
    let open = lines
        .iter()
        .position(|l| l.ends_with('('))
        .expect("opening parenthesis line");
    // Two chunk lines: 500 bytes then 1 byte, each quoted on its own line,
    // then the closing parenthesis on its own indented line.
    let chunk_500 = lines[open + 1].trim_start();
    let chunk_1 = lines[open + 2].trim_start();
    assert_eq!(chunk_500.len(), TXT_CHUNK_SIZE + 2);
    assert_eq!(chunk_1, "\"y\"");
    assert_eq!(lines[open + 3].trim_start(), ")");

    // Chunk lines are indented to the rdata column, where "(" begins.
    let rdata_offset = lines[open].len() - 1;
    assert!(lines[open + 1].starts_with(&" ".repeat(rdata_offset)));
    assert!(lines[open + 3].starts_with(&" ".repeat(rdata_offset)));
}

#[test]
fn txt_quotes_and_backslashes_are_escaped() {
    let zone = zone_with(vec![ResourceRecord::new(
        "@",
        Rdata::Txt {
            text: r#"v=DKIM1; p="key\data""#.into(),
        },
    )]);
    let text = serialize_zone(&zone);
    assert!(text.contains(r#""v=DKIM1; p=\"key\\data\"""#));
}

#[test]
fn soa_renders_all_seven_fields_on_one_line() {
    let zone = zone_with(vec![ResourceRecord::new(
        "@",
        Rdata::Soa {
            primary_ns: "ns1.example.com.".into(),
            resp_email: "hostmaster.example.com.".into(),
            serial: "2024010101".into(),
            refresh: "7200".into(),
            retry: "3600".into(),
            expire: "1209600".into(),
            minimum: "86400".into(),
        },
    )]);
    let text = serialize_zone(&zone);
    assert!(text.contains(
        "SOA ns1.example.com. hostmaster.example.com. 2024010101 7200 3600 1209600 86400"
    ));
}

#[test]
fn srv_and_mx_render_numeric_fields_in_order() {
    let zone = zone_with(vec![
        ResourceRecord::new(
            "_sip._tls",
            Rdata::Srv {
                priority: 100,
                weight: 1,
                port: 443,
                target: "sipdir.online.lync.com.".into(),
            },
        ),
        ResourceRecord::new(
            "@",
            Rdata::Mx {
                priority: 10,
                target: "mx1.example.com.".into(),
            },
        ),
    ]);
    let text = serialize_zone(&zone);
    assert!(text.contains("SRV 100 1 443 sipdir.online.lync.com."));
    assert!(text.contains("MX  10 mx1.example.com."));
}
