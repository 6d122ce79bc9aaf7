//! Compression flags, load-time summary and rule-based recommendations.

mod analysis;
mod types;

pub use types::{Compression, PerformanceSummary, Recommendation, RecommendationCategory};
