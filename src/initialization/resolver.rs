//! DNS resolver initialization.

use std::time::Duration;

use hickory_resolver::TokioAsyncResolver;

use crate::config::DNS_TIMEOUT_SECS;

/// Initializes the DNS resolver backing the oracle.
///
/// Uses the default resolver configuration with aggressive timeouts so a
/// slow or unresponsive DNS server costs one probe a few seconds rather than
/// stalling the catalog run. `ndots` is set to 0 to prevent search-domain
/// appending on the probed names.
pub fn init_resolver() -> TokioAsyncResolver {
    use hickory_resolver::config::{ResolverConfig, ResolverOpts};

    let mut opts = ResolverOpts::default();
    opts.timeout = Duration::from_secs(DNS_TIMEOUT_SECS);
    opts.attempts = 2; // fail faster than the default
    opts.ndots = 0;

    TokioAsyncResolver::tokio(ResolverConfig::default(), opts)
}
