//! Hostname validation and base-domain tests.

use super::*;

#[test]
fn accepts_plain_and_subdomained_hostnames() {
    assert!(validate_hostname("example.com").is_ok());
    assert!(validate_hostname("www.example.co.uk").is_ok());
    assert!(validate_hostname("mail-01.internal.example.org").is_ok());
}

#[test]
fn rejects_hostname_without_a_dot() {
    assert_eq!(
        validate_hostname("localhost"),
        Err(HostnameError::MissingDot("localhost".to_string()))
    );
}

#[test]
fn rejects_hostnames_outside_the_length_bounds() {
    assert_eq!(
        validate_hostname("a.b"),
        Err(HostnameError::TooShort("a.b".to_string()))
    );

    let long = format!("{}.com", "a".repeat(MAX_HOSTNAME_LEN));
    assert_eq!(
        validate_hostname(&long),
        Err(HostnameError::TooLong(long.clone()))
    );
}

#[test]
fn rejects_invalid_label_syntax() {
    assert!(matches!(
        validate_hostname("exa mple.com"),
        Err(HostnameError::InvalidSyntax(_))
    ));
    assert!(matches!(
        validate_hostname("-example.com"),
        Err(HostnameError::InvalidSyntax(_))
    ));
    assert!(matches!(
        validate_hostname("example.com-"),
        Err(HostnameError::InvalidSyntax(_))
    ));
    assert!(matches!(
        validate_hostname("http://example.com"),
        Err(HostnameError::InvalidSyntax(_))
    ));
}

#[test]
fn base_domain_strips_subdomains() {
    assert_eq!(base_domain("www.example.com"), "example.com");
    assert_eq!(base_domain("example.com"), "example.com");
}

#[test]
fn base_domain_handles_multi_part_suffixes() {
    assert_eq!(base_domain("shop.example.co.uk"), "example.co.uk");
    assert_eq!(base_domain("example.com.pe"), "example.com.pe");
}
