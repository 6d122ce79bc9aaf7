//! `reqwest`-backed prober.

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use log::{debug, warn};

use super::headers::ResponseHeaders;
use super::request::build_request;
use super::types::{parse_content_length, ProbeResult, Protocol};
use super::Prober;
use crate::config::ProbeMethod;
use crate::error_handling::categorize_reqwest_error;

/// Probes targets with one HEAD or GET request on a shared client.
///
/// The client carries the timeout, User-Agent and redirect policy (see
/// [`crate::initialization::init_client`]); this type only picks the method.
#[derive(Clone)]
pub struct HttpProber {
    client: Arc<reqwest::Client>,
    method: ProbeMethod,
}

impl HttpProber {
    pub fn new(client: Arc<reqwest::Client>, method: ProbeMethod) -> Self {
        Self { client, method }
    }
}

#[async_trait]
impl Prober for HttpProber {
    async fn probe(&self, url: &str) -> ProbeResult {
        let start = Instant::now();
        let response = match build_request(&self.client, self.method, url).send().await {
            Ok(response) => response,
            Err(e) => {
                let category = categorize_reqwest_error(&e);
                warn!("Probe of {url} failed ({category}): {e}");
                return ProbeResult::unreachable(url, category);
            }
        };
        let response_time_ms = start.elapsed().as_millis() as u64;

        let status = response.status();
        let final_url = response.url().to_string();
        let headers = ResponseHeaders::from_header_map(response.headers());
        let content_length = parse_content_length(&headers);

        debug!(
            "Probe of {url} returned {} in {response_time_ms}ms ({} headers)",
            status.as_u16(),
            headers.len()
        );

        ProbeResult {
            url: url.to_string(),
            protocol: Protocol::from_url(&final_url),
            final_url,
            status_code: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or("").to_string(),
            headers,
            response_time_ms,
            content_length,
            failure: None,
        }
    }
}
