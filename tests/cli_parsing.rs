//! CLI argument parsing tests.

use clap::Parser;
use domain_recon::{Config, OutputFormat, WildcardPolicy};

#[test]
fn hostname_is_the_only_required_argument() {
    let config = Config::parse_from(["domain_recon", "example.com"]);
    assert_eq!(config.domain, "example.com");
}

#[test]
fn missing_hostname_is_a_parse_error() {
    assert!(Config::try_parse_from(["domain_recon"]).is_err());
}

#[test]
fn output_format_and_policy_flags_parse() {
    let config = Config::parse_from([
        "domain_recon",
        "example.com",
        "--output",
        "json",
        "--wildcard-policy",
        "suppress-exact-matches",
        "--skip-whois",
    ]);
    assert_eq!(config.output, OutputFormat::Json);
    assert_eq!(config.wildcard_policy, WildcardPolicy::SuppressExactMatches);
    assert!(config.skip_whois);
    assert!(!config.skip_headers);
}

#[test]
fn unknown_flags_are_rejected() {
    assert!(Config::try_parse_from(["domain_recon", "example.com", "--frobnicate"]).is_err());
}
