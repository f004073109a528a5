//! Plugin Serving Helpers
//!
//! Small pure functions for building the request's base URL and filling in
//! the OpenAPI description's server placeholder. Keeping them separated from
//! the handlers makes them straightforward to test.

use axum::http::HeaderMap;

use super::HOSTNAME_PLACEHOLDER;

/// Builds the base URL (`scheme://host`) the requesting client used.
///
/// The scheme comes from `x-forwarded-proto` when a proxy set it, falling
/// back to plain `http`. The host (including any port) is the `Host` header
/// value as received.
pub fn request_base_url(headers: &HeaderMap, host: &str) -> String {
    let scheme = headers
        .get("x-forwarded-proto")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("http");

    format!("{}://{}", scheme, host)
}

/// Replaces every occurrence of the server-URL placeholder in `text` with
/// `base_url`.
///
/// This is the trick used to populate the OpenAPI description's `servers`
/// entry with the address the agent actually reached us on.
pub fn substitute_hostname(text: &str, base_url: &str) -> String {
    text.replace(HOSTNAME_PLACEHOLDER, base_url)
}
