//! HTTP client initialization.

use std::time::Duration;

use crate::config::HTTP_TIMEOUT_SECS;
use crate::error_handling::InitializationError;

/// Initializes the HTTP client used for header collection.
///
/// Redirects are followed (the headers of interest are those of the final
/// response) and every request is bounded by a single overall timeout.
pub fn init_http_client() -> Result<reqwest::Client, InitializationError> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()?;
    Ok(client)
}
