//! Configuration constants.

/// DNS query timeout in seconds. Most queries complete well under a second;
/// a short timeout keeps a catalog run from stalling on one unresponsive
/// server, and a timed-out probe is simply treated as absent.
pub const DNS_TIMEOUT_SECS: u64 = 3;

/// Timeout for one `whois` client invocation, in seconds.
pub const WHOIS_TIMEOUT_SECS: u64 = 10;

/// HTTP header-collection request timeout in seconds.
pub const HTTP_TIMEOUT_SECS: u64 = 10;

/// Default TTL applied to the synthesized zone and to every record that does
/// not carry an explicit TTL.
pub const DEFAULT_TTL: u32 = 3600;

/// TXT values longer than this many bytes are rendered as a parenthesized
/// multi-line block of quoted chunks of this size.
pub const TXT_CHUNK_SIZE: usize = 500;

/// Shortest hostname accepted as input; no real domain is shorter.
pub const MIN_HOSTNAME_LEN: usize = 4;

/// Longest hostname accepted as input.
pub const MAX_HOSTNAME_LEN: usize = 80;
