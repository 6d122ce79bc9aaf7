//! Security finding types.

use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

/// Types of security warnings that can be detected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SecurityWarning {
    /// Site uses HTTP instead of HTTPS
    NoHttps,
    /// Missing Strict-Transport-Security (HSTS) header
    MissingHsts,
    /// Missing Content-Security-Policy header
    MissingCsp,
    /// Missing X-Content-Type-Options header
    MissingContentTypeOptions,
    /// Missing X-Frame-Options header
    MissingFrameOptions,
    /// Missing X-XSS-Protection header
    MissingXssProtection,
}

impl SecurityWarning {
    /// Returns a human-readable description of the warning
    pub fn description(&self) -> &'static str {
        match self {
            SecurityWarning::NoHttps => "Site uses HTTP instead of HTTPS",
            SecurityWarning::MissingHsts => "Missing Strict-Transport-Security (HSTS) header",
            SecurityWarning::MissingCsp => "Missing Content-Security-Policy header",
            SecurityWarning::MissingContentTypeOptions => "Missing X-Content-Type-Options header",
            SecurityWarning::MissingFrameOptions => "Missing X-Frame-Options header",
            SecurityWarning::MissingXssProtection => "Missing X-XSS-Protection header",
        }
    }

    /// Returns a short code for the warning
    pub fn code(&self) -> &'static str {
        match self {
            SecurityWarning::NoHttps => "no_https",
            SecurityWarning::MissingHsts => "missing_hsts",
            SecurityWarning::MissingCsp => "missing_csp",
            SecurityWarning::MissingContentTypeOptions => "missing_content_type_options",
            SecurityWarning::MissingFrameOptions => "missing_frame_options",
            SecurityWarning::MissingXssProtection => "missing_xss_protection",
        }
    }

    /// Suggested remediation shown in the report.
    pub fn remediation(&self) -> &'static str {
        match self {
            SecurityWarning::NoHttps => "Serve the site over HTTPS and redirect HTTP traffic",
            SecurityWarning::MissingHsts => {
                "Add Strict-Transport-Security: max-age=31536000; includeSubDomains"
            }
            SecurityWarning::MissingCsp => {
                "Define a Content-Security-Policy to restrict script and resource origins"
            }
            SecurityWarning::MissingContentTypeOptions => "Add X-Content-Type-Options: nosniff",
            SecurityWarning::MissingFrameOptions => {
                "Add X-Frame-Options: DENY (or SAMEORIGIN) to prevent clickjacking"
            }
            SecurityWarning::MissingXssProtection => "Add X-XSS-Protection: 1; mode=block",
        }
    }
}

/// Presence flags for the tracked security headers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SecurityHeaders {
    pub hsts: bool,
    pub csp: bool,
    pub xframe: bool,
    pub xss: bool,
    pub content_type_options: bool,
}

impl SecurityHeaders {
    /// Number of tracked headers that are present.
    pub fn present_count(&self) -> usize {
        [
            self.hsts,
            self.csp,
            self.xframe,
            self.xss,
            self.content_type_options,
        ]
        .iter()
        .filter(|&&flag| flag)
        .count()
    }
}

/// Overall security rating for a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SecurityRating {
    Excellent,
    Good,
    Warning,
    Critical,
}

impl SecurityRating {
    pub fn as_str(&self) -> &'static str {
        match self {
            SecurityRating::Excellent => "excellent",
            SecurityRating::Good => "good",
            SecurityRating::Warning => "warning",
            SecurityRating::Critical => "critical",
        }
    }
}

impl std::fmt::Display for SecurityRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
