//! Error categorization.
//!
//! Maps transport failures onto [`ErrorType`] so the prober can record what
//! went wrong without propagating the raw error.

use super::types::ErrorType;

/// Categorizes a `reqwest::Error` into an `ErrorType`.
///
/// The probe never calls `error_for_status()`, so status-code errors cannot
/// reach this function; only transport-level categories are distinguished.
///
/// # Arguments
///
/// * `error` - The `reqwest::Error` to categorize
///
/// # Returns
///
/// The appropriate `ErrorType` for the error.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> ErrorType {
    // Timeout is checked before connect: a connect timeout reports both.
    if error.is_builder() {
        ErrorType::HttpRequestBuilderError
    } else if error.is_redirect() {
        ErrorType::HttpRequestRedirectError
    } else if error.is_timeout() {
        ErrorType::HttpRequestTimeoutError
    } else if error.is_connect() {
        ErrorType::HttpRequestConnectError
    } else if error.is_request() {
        ErrorType::HttpRequestRequestError
    } else if error.is_body() {
        ErrorType::HttpRequestBodyError
    } else if error.is_decode() {
        ErrorType::HttpRequestDecodeError
    } else {
        ErrorType::HttpRequestOtherError
    }
}
