//! Security analysis functions.

use super::types::{SecurityHeaders, SecurityRating, SecurityWarning};
use crate::config::{
    HEADER_CONTENT_SECURITY_POLICY, HEADER_STRICT_TRANSPORT_SECURITY,
    HEADER_X_CONTENT_TYPE_OPTIONS, HEADER_X_FRAME_OPTIONS, HEADER_X_XSS_PROTECTION,
};
use crate::probe::{Protocol, ResponseHeaders};

impl SecurityHeaders {
    /// Reads the presence flags from response headers.
    ///
    /// A header counts only when its value is non-empty.
    pub fn from_headers(headers: &ResponseHeaders) -> Self {
        Self {
            hsts: headers.has(HEADER_STRICT_TRANSPORT_SECURITY),
            csp: headers.has(HEADER_CONTENT_SECURITY_POLICY),
            xframe: headers.has(HEADER_X_FRAME_OPTIONS),
            xss: headers.has(HEADER_X_XSS_PROTECTION),
            content_type_options: headers.has(HEADER_X_CONTENT_TYPE_OPTIONS),
        }
    }
}

/// Analyzes a response and returns a list of security warnings
///
/// # Arguments
///
/// * `final_url` - The final URL after redirects (to check if HTTPS)
/// * `headers` - Response headers
///
/// # Returns
///
/// A vector of security warnings found, in a fixed order
pub fn analyze_security(final_url: &str, headers: &ResponseHeaders) -> Vec<SecurityWarning> {
    let mut warnings = Vec::new();

    // Plain HTTP reports only the transport finding
    if Protocol::from_url(final_url) != Protocol::Https {
        warnings.push(SecurityWarning::NoHttps);
        return warnings;
    }

    let flags = SecurityHeaders::from_headers(headers);
    if !flags.hsts {
        warnings.push(SecurityWarning::MissingHsts);
    }
    if !flags.csp {
        warnings.push(SecurityWarning::MissingCsp);
    }
    if !flags.content_type_options {
        warnings.push(SecurityWarning::MissingContentTypeOptions);
    }
    if !flags.xframe {
        warnings.push(SecurityWarning::MissingFrameOptions);
    }
    if !flags.xss {
        warnings.push(SecurityWarning::MissingXssProtection);
    }

    warnings
}

impl SecurityRating {
    /// Rates a target from its warnings.
    ///
    /// Plain HTTP is always critical; otherwise the rating drops with the
    /// number of missing headers.
    pub fn from_warnings(warnings: &[SecurityWarning]) -> Self {
        if warnings.contains(&SecurityWarning::NoHttps) {
            return SecurityRating::Critical;
        }
        match warnings.len() {
            0 => SecurityRating::Excellent,
            1..=2 => SecurityRating::Good,
            3..=4 => SecurityRating::Warning,
            _ => SecurityRating::Critical,
        }
    }
}
