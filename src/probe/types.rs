//! Probe result types.

use serde::{Deserialize, Serialize};

use super::headers::ResponseHeaders;
use crate::config::{
    HEADER_CONTENT_LENGTH, HEADER_CONTENT_TYPE, HEADER_SERVER, HEADER_X_FORWARDED_FOR,
    HEADER_X_POWERED_BY, HEADER_X_REAL_IP, UNREACHABLE_STATUS_TEXT,
};
use crate::error_handling::ErrorType;

/// Transport protocol of the final (post-redirect) URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Protocol {
    Http,
    Https,
    /// Only used for unreachable targets
    Unknown,
}

impl Protocol {
    /// Derives the protocol from a URL's scheme (case-insensitive).
    pub fn from_url(url: &str) -> Self {
        match url.split_once("://") {
            Some((scheme, _)) if scheme.eq_ignore_ascii_case("https") => Protocol::Https,
            Some((scheme, _)) if scheme.eq_ignore_ascii_case("http") => Protocol::Http,
            _ => Protocol::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Protocol::Http => "HTTP",
            Protocol::Https => "HTTPS",
            Protocol::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for Protocol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of the single request made against a target.
///
/// Built once per analysis and never mutated afterwards. A `status_code` of
/// `0` is the sentinel for "unreachable": headers are empty and `failure`
/// names the transport error category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbeResult {
    /// URL that was requested
    pub url: String,
    /// URL after following redirects (equal to `url` when unreachable)
    pub final_url: String,
    pub status_code: u16,
    pub status_text: String,
    pub headers: ResponseHeaders,
    /// Wall-clock time until response headers arrived
    pub response_time_ms: u64,
    pub protocol: Protocol,
    /// Parsed `Content-Length`, 0 when absent or unparsable
    pub content_length: u64,
    pub failure: Option<ErrorType>,
}

impl ProbeResult {
    /// Builds the sentinel result for a target that could not be reached.
    pub fn unreachable(url: &str, failure: ErrorType) -> Self {
        Self {
            url: url.to_string(),
            final_url: url.to_string(),
            status_code: 0,
            status_text: UNREACHABLE_STATUS_TEXT.to_string(),
            headers: ResponseHeaders::new(),
            response_time_ms: 0,
            protocol: Protocol::Unknown,
            content_length: 0,
            failure: Some(failure),
        }
    }

    pub fn is_reachable(&self) -> bool {
        self.status_code != 0
    }

    pub fn server(&self) -> Option<&str> {
        self.headers.get_non_empty(HEADER_SERVER)
    }

    pub fn x_powered_by(&self) -> Option<&str> {
        self.headers.get_non_empty(HEADER_X_POWERED_BY)
    }

    pub fn content_type(&self) -> Option<&str> {
        self.headers.get_non_empty(HEADER_CONTENT_TYPE)
    }

    /// Client address reported by an upstream proxy: `x-forwarded-for`,
    /// then `x-real-ip`.
    pub fn remote_address(&self) -> Option<&str> {
        self.headers
            .get_non_empty(HEADER_X_FORWARDED_FOR)
            .or_else(|| self.headers.get_non_empty(HEADER_X_REAL_IP))
    }

    /// Host of the final URL, if it parses.
    pub fn host(&self) -> Option<String> {
        url::Url::parse(&self.final_url)
            .ok()
            .and_then(|u| u.host_str().map(str::to_string))
    }

    /// True when the request was redirected to a different URL.
    pub fn was_redirected(&self) -> bool {
        self.is_reachable() && self.final_url != self.url
    }
}

/// Parses `Content-Length`, falling back to 0.
pub(crate) fn parse_content_length(headers: &ResponseHeaders) -> u64 {
    headers
        .get(HEADER_CONTENT_LENGTH)
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(0)
}
