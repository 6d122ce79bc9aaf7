//! Header-based CDN classification.

use serde::{Deserialize, Serialize};

use super::signatures::{CdnProvider, ProviderSignature, SIGNATURES};
use crate::config::{ANALYSIS_METHOD_ERROR, ANALYSIS_METHOD_HEADERS};
use crate::probe::ResponseHeaders;

/// Outcome of classifying one set of response headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClassificationResult {
    pub detected: bool,
    pub provider_name: Option<String>,
    /// Domains served through the detected provider (empty when none)
    pub matched_domains: Vec<String>,
    pub analysis_method: String,
}

impl ClassificationResult {
    /// Result for headers that match no provider.
    pub fn none() -> Self {
        Self {
            detected: false,
            provider_name: None,
            matched_domains: Vec::new(),
            analysis_method: ANALYSIS_METHOD_HEADERS.to_string(),
        }
    }

    /// Result for a target that could not be probed.
    pub fn unreachable() -> Self {
        Self {
            analysis_method: ANALYSIS_METHOD_ERROR.to_string(),
            ..Self::none()
        }
    }

    fn detected(provider: CdnProvider) -> Self {
        Self {
            detected: true,
            provider_name: Some(provider.name().to_string()),
            ..Self::none()
        }
    }
}

/// Returns the first provider in `table` whose signature matches.
pub fn detect_provider_with(
    headers: &ResponseHeaders,
    table: &[ProviderSignature],
) -> Option<CdnProvider> {
    table
        .iter()
        .find(|signature| signature.matches(headers))
        .map(|signature| signature.provider)
}

/// Returns the first provider in the built-in table whose signature matches.
pub fn detect_provider(headers: &ResponseHeaders) -> Option<CdnProvider> {
    detect_provider_with(headers, SIGNATURES)
}

/// Classifies response headers against the built-in signature table.
///
/// Pure and infallible: an empty header map simply yields "no match".
///
/// # Example
///
/// ```
/// use websec_analyzer::cdn::classify;
/// use websec_analyzer::probe::ResponseHeaders;
///
/// let headers: ResponseHeaders = vec![("X-Amz-Cf-Id", "abc")].into_iter().collect();
/// let result = classify(&headers);
/// assert!(result.detected);
/// assert_eq!(result.provider_name.as_deref(), Some("AWS CloudFront"));
/// ```
pub fn classify(headers: &ResponseHeaders) -> ClassificationResult {
    match detect_provider(headers) {
        Some(provider) => ClassificationResult::detected(provider),
        None => ClassificationResult::none(),
    }
}

/// Like [`classify`], recording `host` as the matched domain on detection.
pub fn classify_for_host(headers: &ResponseHeaders, host: &str) -> ClassificationResult {
    let mut result = classify(headers);
    if result.detected && !host.is_empty() {
        result.matched_domains.push(host.to_string());
    }
    result
}
