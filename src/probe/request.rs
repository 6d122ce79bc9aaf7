//! Request construction for the probe.

use reqwest::header::{
    HeaderName, ACCEPT, ACCEPT_ENCODING, ACCEPT_LANGUAGE, UPGRADE_INSECURE_REQUESTS,
};

use crate::config::ProbeMethod;

/// Fixed request headers sent with every probe.
///
/// Compression is advertised so the response's `Content-Encoding` reflects
/// what the server would serve to a browser. The body is never decoded.
pub(crate) struct RequestHeaders;

impl RequestHeaders {
    const ACCEPT: &'static str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";
    const ACCEPT_LANGUAGE: &'static str = "en-US,en;q=0.9";
    const ACCEPT_ENCODING: &'static str = "gzip, deflate, br";

    /// Returns the headers as `(name, value)` pairs.
    pub(crate) fn as_vec() -> Vec<(HeaderName, &'static str)> {
        vec![
            (ACCEPT, Self::ACCEPT),
            (ACCEPT_LANGUAGE, Self::ACCEPT_LANGUAGE),
            (ACCEPT_ENCODING, Self::ACCEPT_ENCODING),
            (UPGRADE_INSECURE_REQUESTS, "1"),
        ]
    }

    /// Applies the standard request headers to a `reqwest::RequestBuilder`.
    pub(crate) fn apply_to_request_builder(
        builder: reqwest::RequestBuilder,
    ) -> reqwest::RequestBuilder {
        Self::as_vec()
            .into_iter()
            .fold(builder, |b, (name, value)| b.header(name, value))
    }
}

/// Builds the single request for `url` with the configured method.
pub(crate) fn build_request(
    client: &reqwest::Client,
    method: ProbeMethod,
    url: &str,
) -> reqwest::RequestBuilder {
    let builder = match method {
        ProbeMethod::Head => client.head(url),
        ProbeMethod::Get => client.get(url),
    };
    RequestHeaders::apply_to_request_builder(builder)
}
