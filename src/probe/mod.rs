//! HTTP probing.
//!
//! A probe is exactly one outbound request against the target. Its result
//! carries status, lowercase headers, timing and protocol. Transport failures
//! (DNS, connect, timeout) are absorbed into a sentinel result with
//! `status_code == 0`; callers must treat that as "unreachable".

mod headers;
mod http;
mod request;
mod types;

use async_trait::async_trait;

pub use headers::ResponseHeaders;
pub use http::HttpProber;
pub use types::{ProbeResult, Protocol};

/// Source of probe results.
///
/// Implemented by [`HttpProber`] for real requests; tests substitute fixed
/// results.
#[async_trait]
pub trait Prober: Send + Sync {
    /// Issues one request to `url` and never fails.
    async fn probe(&self, url: &str) -> ProbeResult;
}
