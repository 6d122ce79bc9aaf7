//! Configuration constants.
//!
//! This module defines the constants used throughout the application,
//! including timeouts, limits, and report layout parameters.

use std::time::Duration;

/// Per-request timeout in seconds (used as the CLI default)
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// TCP connection timeout in seconds
pub const TCP_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Connect timeout applied to the shared HTTP client
pub const TCP_CONNECT_TIMEOUT: Duration = Duration::from_secs(TCP_CONNECT_TIMEOUT_SECS);

/// Identifying User-Agent sent with every probe.
///
/// The scanner announces itself instead of posing as a browser; site owners
/// can recognise (and allow or block) the probe from their access logs.
///
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str = "WebSec-Analyzer/1.0 (Security Scanner)";

// Redirect handling
/// Maximum number of redirect hops to follow
pub const MAX_REDIRECT_HOPS: usize = 10;

/// Maximum URL length (2048 characters), matching common browser and server limits.
pub const MAX_URL_LENGTH: usize = 2048;

/// Response time above which the server response is flagged as slow (TTFB).
pub const SLOW_RESPONSE_THRESHOLD_MS: u64 = 600;

/// Status text used for the sentinel result of an unreachable target
pub const UNREACHABLE_STATUS_TEXT: &str = "Connection Failed";

// Report layout
/// Lines per page in the plain-text report (including the footer line)
pub const REPORT_LINES_PER_PAGE: usize = 60;
/// Maximum characters per line before wrapping in the plain-text report
pub const REPORT_LINE_WIDTH: usize = 80;
/// Number of fastest locations listed in the report
pub const REPORT_TOP_LOCATIONS: usize = 10;
/// Prefix for exported report file names
pub const REPORT_FILE_PREFIX: &str = "websec-analysis";
/// Longest sanitized URL kept in a report file name; longer URLs are cut
/// and suffixed with a hash of the full URL
pub const REPORT_URL_SEGMENT_MAX: usize = 100;
/// Numbered names tried when a report file name is already taken
pub const REPORT_NAME_ATTEMPTS: usize = 1000;

/// Analysis method recorded for header-based CDN classification
pub const ANALYSIS_METHOD_HEADERS: &str = "http_headers_analysis";
/// Analysis method recorded when the target could not be probed
pub const ANALYSIS_METHOD_ERROR: &str = "error";
