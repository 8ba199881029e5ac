//! HTTP plumbing for the World Bank API: URL building, query strings,
//! blocking GET requests, and JSON decoding into a generic value tree.

use crate::error::Error;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};
use reqwest::blocking::Client as HttpClient;
use reqwest::redirect::Policy;
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;

/// Scheme/host/port of the public World Bank API.
pub const WB_SCHEME: &str = "http";
pub const WB_HOST: &str = "api.worldbank.org";
pub const WB_PORT: u16 = 80;

// Allow -, _, . unescaped in codes (common for indicator ids)
const SAFE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.');

/// Percent-encode one path segment or query component.
pub fn encode(part: &str) -> String {
    percent_encoding::utf8_percent_encode(part.trim(), SAFE).to_string()
}

/// Build a query string from a parameter map.
///
/// Returns an empty string for an empty map, otherwise `?k=v&k=v...`.
/// The map has no defined iteration order, so the order of the pairs is
/// unspecified; the server does not care, and neither should callers.
pub fn build_query(params: &HashMap<String, String>) -> String {
    if params.is_empty() {
        return String::new();
    }
    let pairs: Vec<String> = params
        .iter()
        .map(|(k, v)| format!("{}={}", encode(k), encode(v)))
        .collect();
    format!("?{}", pairs.join("&"))
}

/// Decode a response body into a generic JSON tree.
pub fn decode(bytes: &[u8]) -> Result<Value, Error> {
    serde_json::from_slice(bytes).map_err(|e| Error::Decode(e.to_string()))
}

/// Blocking transport against one fixed scheme/host/port.
///
/// Holds no business logic: it turns a path (query string included) into an
/// absolute URL, issues a single GET, and hands back the full body. One
/// instance is meant to be constructed by the caller and reused; pass it to
/// [`crate::Client::new`] rather than relying on any process-wide global.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    scheme: String,
    host: String,
    port: u16,
    http: HttpClient,
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new(WB_SCHEME, WB_HOST, WB_PORT)
    }
}

impl HttpTransport {
    pub fn new(scheme: &str, host: &str, port: u16) -> Self {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30)) // total request timeout
            .connect_timeout(Duration::from_secs(10)) // connect timeout
            .redirect(Policy::limited(5)) // cap redirects
            .user_agent(concat!("wbc_rs/", env!("CARGO_PKG_VERSION"))) // set user agent
            .build()
            .expect("reqwest client build");
        Self {
            scheme: scheme.into(),
            host: host.into(),
            port,
            http,
        }
    }

    fn build_url(&self, path: &str) -> String {
        let sep = if path.starts_with('/') { "" } else { "/" };
        format!("{}://{}:{}{}{}", self.scheme, self.host, self.port, sep, path)
    }

    /// Issue a single GET for `path` and read the body to completion.
    ///
    /// One attempt only; retrying is the caller's business. Errors follow
    /// the crate taxonomy: [`Error::Request`] when the request cannot be
    /// built, [`Error::Response`] for network failures, HTTP status >= 400,
    /// or a short body read.
    pub fn get(&self, path: &str) -> Result<Vec<u8>, Error> {
        let url = self.build_url(path);
        let resp = match self.http.get(&url).send() {
            Ok(r) => r,
            Err(e) if e.is_builder() => return Err(Error::Request { url, source: e }),
            Err(e) => {
                return Err(Error::Response {
                    url,
                    reason: e.to_string(),
                });
            }
        };
        let status = resp.status();
        if status.is_client_error() || status.is_server_error() {
            return Err(Error::Response {
                url,
                reason: format!("HTTP {status}"),
            });
        }
        let body = resp.bytes().map_err(|e| Error::Response {
            url,
            reason: format!("body read: {e}"),
        })?;
        Ok(body.to_vec())
    }
}
