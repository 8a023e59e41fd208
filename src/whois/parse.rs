//! Registrar-field extraction from raw WHOIS text.

use serde::Serialize;

/// The registrar fields surfaced in the report; everything else in the WHOIS
/// answer is ignored.
const REGISTRAR_FIELDS: [&str; 8] = [
    "Domain Name",
    "Registrar",
    "Registrar IANA ID",
    "Name Server",
    "Creation Date",
    "Updated Date",
    "Domain Status",
    "Reseller",
];

/// Fields whose values are case-insensitive names, normalized to lowercase
/// so registries that shout do not produce spurious duplicates.
const LOWERCASED_FIELDS: [&str; 2] = ["Domain Name", "Name Server"];

/// One name/value pair extracted from the WHOIS answer.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct WhoisField {
    /// Field name, e.g. `Name Server`.
    pub name: String,
    /// Field value, verbatim except for lowercased name fields.
    pub value: String,
}

/// Extracts the registrar fields from raw WHOIS text: one pair per matching
/// line, deduplicated, sorted by name then value.
pub(crate) fn parse_registrar_fields(raw: &str) -> Vec<WhoisField> {
    let mut fields: Vec<WhoisField> = raw
        .lines()
        .filter_map(|line| {
            let (name, value) = line.trim().split_once(':')?;
            let name = name.trim();
            if !REGISTRAR_FIELDS.contains(&name) {
                return None;
            }
            let mut value = value.trim().to_string();
            if LOWERCASED_FIELDS.contains(&name) {
                value = value.to_lowercase();
            }
            Some(WhoisField {
                name: name.to_string(),
                value,
            })
        })
        .collect();

    fields.sort();
    fields.dedup();
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Domain Name: EXAMPLE.COM
   Registrar: Example Registrar, Inc.
   Registrar IANA ID: 1234
   Name Server: NS2.EXAMPLE-DNS.COM
   Name Server: NS1.EXAMPLE-DNS.COM
   Name Server: ns1.example-dns.com
   Creation Date: 1995-08-14T04:00:00Z
   Updated Date: 2023-08-14T07:01:31Z
   Domain Status: clientDeleteProhibited https://icann.org/epp#clientDeleteProhibited
   Registrant Email: hidden@example.com
>>> Last update of whois database: 2024-01-01T00:00:00Z <<<
";

    #[test]
    fn extracts_only_registrar_fields() {
        let fields = parse_registrar_fields(SAMPLE);
        assert!(fields.iter().all(|f| f.name != "Registrant Email"));
        assert!(fields.iter().any(|f| f.name == "Registrar"));
        assert!(fields.iter().any(|f| f.name == "Creation Date"));
    }

    #[test]
    fn name_fields_are_lowercased_and_deduplicated() {
        let fields = parse_registrar_fields(SAMPLE);
        let nameservers: Vec<&str> = fields
            .iter()
            .filter(|f| f.name == "Name Server")
            .map(|f| f.value.as_str())
            .collect();
        // NS1 appears twice with different casing; one survives.
        assert_eq!(nameservers, vec!["ns1.example-dns.com", "ns2.example-dns.com"]);

        let domains: Vec<&str> = fields
            .iter()
            .filter(|f| f.name == "Domain Name")
            .map(|f| f.value.as_str())
            .collect();
        assert_eq!(domains, vec!["example.com"]);
    }

    #[test]
    fn fields_are_sorted_by_name_then_value() {
        let fields = parse_registrar_fields(SAMPLE);
        let mut sorted = fields.clone();
        sorted.sort();
        assert_eq!(fields, sorted);
    }

    #[test]
    fn values_containing_colons_survive_intact() {
        let fields =
            parse_registrar_fields("Domain Status: ok https://icann.org/epp#ok\n");
        assert_eq!(
            fields[0].value,
            "ok https://icann.org/epp#ok"
        );
    }

    #[test]
    fn empty_input_yields_no_fields() {
        assert!(parse_registrar_fields("").is_empty());
        assert!(parse_registrar_fields("no colons here\n").is_empty());
    }
}
