//! Performance analysis over a probe result.

use super::types::{Compression, PerformanceSummary, Recommendation, RecommendationCategory};
use crate::config::{CACHE_HEADERS, HEADER_CONTENT_ENCODING, SLOW_RESPONSE_THRESHOLD_MS};
use crate::probe::{ProbeResult, Protocol, ResponseHeaders};

impl Compression {
    /// Parses a `Content-Encoding` value.
    ///
    /// Matching is by substring, so `"gzip, br"` sets both flags.
    pub fn from_content_encoding(value: Option<&str>) -> Self {
        let value = value.map(str::trim).filter(|v| !v.is_empty());
        let lower = value.map(str::to_ascii_lowercase).unwrap_or_default();
        Self {
            gzip: lower.contains("gzip"),
            brotli: lower.contains("br"),
            deflate: lower.contains("deflate"),
            content_encoding: value.map(str::to_string),
        }
    }

    pub fn from_headers(headers: &ResponseHeaders) -> Self {
        Self::from_content_encoding(headers.get(HEADER_CONTENT_ENCODING))
    }
}

impl PerformanceSummary {
    /// Summarizes a probe. `cdn_detected` comes from the classifier.
    ///
    /// Unreachable probes produce a zeroed summary with no recommendations.
    pub fn from_probe(probe: &ProbeResult, cdn_detected: bool) -> Self {
        let compression = Compression::from_headers(&probe.headers);
        let recommendations = if probe.is_reachable() {
            recommend(probe, &compression, cdn_detected)
        } else {
            Vec::new()
        };

        Self {
            load_time_secs: probe.response_time_ms as f64 / 1000.0,
            page_size: probe.content_length,
            response_time_ms: probe.response_time_ms,
            compression,
            recommendations,
        }
    }

    /// Recommendations in a given category.
    pub fn recommendations_for(
        &self,
        category: RecommendationCategory,
    ) -> impl Iterator<Item = &Recommendation> {
        self.recommendations
            .iter()
            .filter(move |r| r.category == category)
    }
}

fn recommendation(category: RecommendationCategory, message: &str) -> Recommendation {
    Recommendation {
        category,
        message: message.to_string(),
    }
}

/// Builds the deterministic recommendation list, in category order.
fn recommend(
    probe: &ProbeResult,
    compression: &Compression,
    cdn_detected: bool,
) -> Vec<Recommendation> {
    let mut out = Vec::new();

    if !CACHE_HEADERS.iter().any(|h| probe.headers.has(h)) {
        out.push(recommendation(
            RecommendationCategory::Caching,
            "Set Cache-Control for static resources and use ETag or Last-Modified for validation",
        ));
    }
    if !cdn_detected {
        out.push(recommendation(
            RecommendationCategory::Cdn,
            "Serve content through a CDN to cut latency for distant visitors",
        ));
    }
    if !compression.is_compressed() {
        out.push(recommendation(
            RecommendationCategory::Compression,
            "Enable Brotli or gzip compression for text responses",
        ));
    }
    if probe.response_time_ms > SLOW_RESPONSE_THRESHOLD_MS {
        out.push(Recommendation {
            category: RecommendationCategory::ServerResponse,
            message: format!(
                "Server responded in {} ms (over {} ms); review backend processing and edge caching",
                probe.response_time_ms, SLOW_RESPONSE_THRESHOLD_MS
            ),
        });
    }
    if probe.protocol != Protocol::Https {
        out.push(recommendation(
            RecommendationCategory::Transport,
            "Serve the site over HTTPS; it is also required for HTTP/2 and HTTP/3",
        ));
    }

    out
}
