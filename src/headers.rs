//! HTTP response header collection.
//!
//! Fetches the hostname over HTTP, following redirects, and collects the
//! final response's headers. Purely informational; failure degrades to an
//! empty map.

use std::collections::BTreeMap;

/// Collects the final-response headers of `http://{hostname}/`.
///
/// Header names are lowercased; repeated headers accumulate their values in
/// arrival order.
pub async fn collect_http_headers(
    client: &reqwest::Client,
    hostname: &str,
) -> BTreeMap<String, Vec<String>> {
    let url = format!("http://{hostname}/");
    let response = match client.head(&url).send().await {
        Ok(response) => response,
        Err(e) => {
            log::warn!("header collection failed for {url}: {e}");
            return BTreeMap::new();
        }
    };

    let mut headers: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for (name, value) in response.headers() {
        headers
            .entry(name.as_str().to_string())
            .or_default()
            .push(String::from_utf8_lossy(value.as_bytes()).into_owned());
    }
    headers
}
