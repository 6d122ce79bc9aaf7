//! Error type definitions.
//!
//! This module defines all error, warning, and info types used throughout the application.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use serde::{Deserialize, Serialize};
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Reasons a URL is rejected before any request is made.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UrlError {
    /// The URL is longer than the supported maximum.
    #[error("URL exceeds maximum length ({length} > {max})")]
    TooLong {
        /// Length of the rejected URL
        length: usize,
        /// Configured maximum
        max: usize,
    },

    /// The URL could not be parsed.
    #[error("invalid URL '{url}': {reason}")]
    Invalid {
        /// The offending input
        url: String,
        /// Parser message
        reason: String,
    },

    /// The URL uses a scheme other than http or https.
    #[error("unsupported scheme '{scheme}' in URL '{url}'")]
    UnsupportedScheme {
        /// The offending input
        url: String,
        /// Scheme found in the URL
        scheme: String,
    },

    /// The URL has no host to probe.
    #[error("URL '{0}' has no host")]
    MissingHost(String),
}

/// Errors raised while writing a report to disk.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Filesystem error creating the directory or writing the file.
    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),

    /// The record could not be serialized to JSON.
    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Types of errors that can occur while analyzing a URL.
///
/// Transport failures are absorbed into a sentinel probe result; this enum
/// records which kind of failure it was.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    // HTTP/Network errors
    HttpRequestBuilderError,
    HttpRequestRedirectError,
    HttpRequestTimeoutError,
    HttpRequestRequestError,
    HttpRequestConnectError,
    HttpRequestBodyError,
    HttpRequestDecodeError,
    HttpRequestOtherError,
    // Input errors
    InvalidUrl,
    // Output errors
    ReportWriteError,
}

/// Types of warnings that can occur during analysis.
///
/// Warnings indicate findings that don't prevent the report from being built
/// but are worth counting across a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum WarningType {
    NoHttps,                // Target served over plain HTTP
    MissingSecurityHeaders, // At least one tracked security header absent
}

/// Types of informational metrics collected during analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum InfoType {
    HttpRedirect,  // Final URL differs from the requested URL
    HttpsRedirect, // HTTP to HTTPS redirect
    CdnDetected,   // A CDN provider was classified
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::HttpRequestBuilderError => "HTTP request builder error",
            ErrorType::HttpRequestRedirectError => "HTTP request redirect error",
            ErrorType::HttpRequestTimeoutError => "HTTP request timeout error",
            ErrorType::HttpRequestRequestError => "HTTP request error",
            ErrorType::HttpRequestConnectError => "HTTP request connect error",
            ErrorType::HttpRequestBodyError => "HTTP request body error",
            ErrorType::HttpRequestDecodeError => "HTTP request decode error",
            ErrorType::HttpRequestOtherError => "HTTP request other error",
            ErrorType::InvalidUrl => "Invalid URL",
            ErrorType::ReportWriteError => "Report write error",
        }
    }
}

impl WarningType {
    /// Returns a human-readable string representation of the warning type.
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningType::NoHttps => "No HTTPS",
            WarningType::MissingSecurityHeaders => "Missing security headers",
        }
    }
}

impl InfoType {
    /// Returns a human-readable string representation of the info type.
    pub fn as_str(&self) -> &'static str {
        match self {
            InfoType::HttpRedirect => "HTTP redirect",
            InfoType::HttpsRedirect => "HTTP to HTTPS redirect",
            InfoType::CdnDetected => "CDN detected",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_error_type_as_str() {
        assert_eq!(
            ErrorType::HttpRequestTimeoutError.as_str(),
            "HTTP request timeout error"
        );
        assert_eq!(ErrorType::InvalidUrl.to_string(), "Invalid URL");
    }

    #[test]
    fn test_all_types_have_labels() {
        for error_type in ErrorType::iter() {
            assert!(!error_type.as_str().is_empty());
        }
        for warning_type in WarningType::iter() {
            assert!(!warning_type.as_str().is_empty());
        }
        for info_type in InfoType::iter() {
            assert!(!info_type.as_str().is_empty());
        }
    }

    #[test]
    fn test_error_type_serializes_snake_case() {
        let json = serde_json::to_string(&ErrorType::HttpRequestConnectError)
            .expect("Failed to serialize error type");
        assert_eq!(json, "\"http_request_connect_error\"");
    }

    #[test]
    fn test_url_error_messages() {
        let err = UrlError::TooLong {
            length: 3000,
            max: 2048,
        };
        assert_eq!(err.to_string(), "URL exceeds maximum length (3000 > 2048)");

        let err = UrlError::UnsupportedScheme {
            url: "ftp://example.com".to_string(),
            scheme: "ftp".to_string(),
        };
        assert!(err.to_string().contains("ftp"));
    }
}
