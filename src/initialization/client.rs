//! HTTP client initialization.

use std::sync::Arc;
use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::{Config, MAX_REDIRECT_HOPS, TCP_CONNECT_TIMEOUT};
use crate::error_handling::InitializationError;

/// Builds the shared HTTP client.
///
/// The client carries the whole-request timeout and User-Agent from
/// `config`, a fixed connect timeout, and follows up to
/// [`MAX_REDIRECT_HOPS`] redirects. Content decoding is left to the caller:
/// only headers are inspected.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if the TLS backend or
/// the User-Agent value is rejected.
pub fn init_client(config: &Config) -> Result<Arc<reqwest::Client>, InitializationError> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .connect_timeout(TCP_CONNECT_TIMEOUT)
        .user_agent(config.user_agent.clone())
        .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECT_HOPS))
        .build()?;
    Ok(Arc::new(client))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_client_with_defaults() {
        assert!(init_client(&Config::default()).is_ok());
    }

    #[test]
    fn test_init_client_rejects_invalid_user_agent() {
        let config = Config {
            user_agent: "bad\nagent".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            init_client(&config),
            Err(InitializationError::HttpClientError(_))
        ));
    }
}
