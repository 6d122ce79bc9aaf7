//! Performance summary types.

use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

/// Content encodings observed on the response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Compression {
    pub gzip: bool,
    pub brotli: bool,
    pub deflate: bool,
    /// Raw `Content-Encoding` value, if any
    pub content_encoding: Option<String>,
}

impl Compression {
    /// True when any supported encoding was used.
    pub fn is_compressed(&self) -> bool {
        self.gzip || self.brotli || self.deflate
    }
}

/// Area a recommendation applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationCategory {
    Caching,
    Cdn,
    Compression,
    ServerResponse,
    Transport,
}

impl RecommendationCategory {
    /// Section title used in the text report.
    pub fn title(&self) -> &'static str {
        match self {
            RecommendationCategory::Caching => "Caching",
            RecommendationCategory::Cdn => "CDN",
            RecommendationCategory::Compression => "Compression",
            RecommendationCategory::ServerResponse => "Server response",
            RecommendationCategory::Transport => "Transport",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Recommendation {
    pub category: RecommendationCategory,
    pub message: String,
}

/// Load-time figures and recommendations for one analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PerformanceSummary {
    /// Response time in seconds
    pub load_time_secs: f64,
    /// Declared page size in bytes (`Content-Length`)
    pub page_size: u64,
    pub response_time_ms: u64,
    pub compression: Compression,
    pub recommendations: Vec<Recommendation>,
}
