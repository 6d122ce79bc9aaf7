//! The flat analysis record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cdn::ClassificationResult;
use crate::error_handling::ErrorType;
use crate::performance::PerformanceSummary;
use crate::probe::Protocol;
use crate::security::{SecurityHeaders, SecurityRating, SecurityWarning};
use crate::simulation::LocationsSection;

/// Everything known about one analyzed URL.
///
/// Serialized as-is for JSON output and rendered by the text report.
/// Unreachable targets still produce a record: `reachable` is false,
/// optional fields are `None` and numeric fields are zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalysisRecord {
    pub url: String,
    pub final_url: String,
    pub analyzed_at: DateTime<Utc>,
    pub reachable: bool,
    pub status_code: u16,
    pub status_text: String,
    /// Transport failure category when unreachable
    pub failure: Option<ErrorType>,
    pub server: Option<String>,
    pub x_powered_by: Option<String>,
    /// Client address forwarded by a proxy in front of the origin
    pub remote_address: Option<String>,
    pub protocol: Protocol,
    pub response_time_ms: u64,
    pub content_type: Option<String>,
    pub content_length: u64,
    pub cdn: ClassificationResult,
    /// Same as `cdn.provider_name`, lifted for flat consumers
    pub detected_provider: Option<String>,
    pub security_headers: SecurityHeaders,
    pub security_warnings: Vec<SecurityWarning>,
    pub security_rating: SecurityRating,
    pub performance: PerformanceSummary,
    /// Present only when location simulation was requested
    pub locations: Option<LocationsSection>,
}
