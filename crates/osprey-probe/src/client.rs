//! Per-check HTTP client construction.
//!
//! Each identifier check owns its own client (and therefore its own
//! connection pool) for the duration of the call; nothing is shared across
//! checks.

use crate::error::Result;
use reqwest::header::{HeaderMap, CONTENT_TYPE};
use reqwest::{redirect, Client};
use std::time::Duration;

/// Build a client with the given per-request timeout and user agent.
///
/// Redirects are followed (bounded), matching what the probed endpoints
/// serve to ordinary browsers.
pub fn build_client(timeout: Duration, user_agent: &str) -> Result<Client> {
    let client = Client::builder()
        .timeout(timeout)
        .connect_timeout(timeout)
        .user_agent(user_agent)
        .redirect(redirect::Policy::limited(10))
        .build()?;
    Ok(client)
}

/// Extract the charset label a server declared in its Content-Type header.
#[must_use]
pub fn declared_charset(headers: &HeaderMap) -> Option<String> {
    let content_type = headers.get(CONTENT_TYPE)?.to_str().ok()?;
    let charset = content_type
        .split(';')
        .map(str::trim)
        .find_map(|part| part.strip_prefix("charset="))?;
    Some(charset.trim_matches('"').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    fn headers_with_content_type(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_str(value).expect("valid header value"),
        );
        headers
    }

    #[test]
    fn test_declared_charset_parsed() {
        let headers = headers_with_content_type("text/html; charset=windows-1256");
        assert_eq!(declared_charset(&headers).as_deref(), Some("windows-1256"));
    }

    #[test]
    fn test_declared_charset_quoted() {
        let headers = headers_with_content_type("text/html; charset=\"utf-8\"");
        assert_eq!(declared_charset(&headers).as_deref(), Some("utf-8"));
    }

    #[test]
    fn test_declared_charset_absent() {
        let headers = headers_with_content_type("application/json");
        assert_eq!(declared_charset(&headers), None);

        assert_eq!(declared_charset(&HeaderMap::new()), None);
    }

    #[test]
    fn test_build_client() {
        let client = build_client(Duration::from_secs(5), "osprey-test/0.1");
        assert!(client.is_ok());
    }
}
