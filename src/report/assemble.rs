//! Merges the per-component results into an [`AnalysisRecord`].

use chrono::{DateTime, Utc};

use super::types::AnalysisRecord;
use crate::cdn::{classify_for_host, ClassificationResult};
use crate::performance::PerformanceSummary;
use crate::probe::ProbeResult;
use crate::security::{analyze_security, SecurityHeaders, SecurityRating, SecurityWarning};
use crate::simulation::LocationsSection;

/// Inputs to [`assemble`].
#[derive(Debug, Clone)]
pub struct AssemblyInput<'a> {
    pub probe: &'a ProbeResult,
    pub classification: ClassificationResult,
    pub security_warnings: Vec<SecurityWarning>,
    pub performance: PerformanceSummary,
    pub locations: Option<LocationsSection>,
    pub analyzed_at: DateTime<Utc>,
}

impl<'a> AssemblyInput<'a> {
    /// Runs the classifier and the analyzers over `probe`.
    pub fn from_probe(
        probe: &'a ProbeResult,
        locations: Option<LocationsSection>,
        analyzed_at: DateTime<Utc>,
    ) -> Self {
        let (classification, security_warnings) = if probe.is_reachable() {
            let host = probe.host().unwrap_or_default();
            (
                classify_for_host(&probe.headers, &host),
                analyze_security(&probe.final_url, &probe.headers),
            )
        } else {
            (ClassificationResult::unreachable(), Vec::new())
        };
        let performance = PerformanceSummary::from_probe(probe, classification.detected);

        Self {
            probe,
            classification,
            security_warnings,
            performance,
            locations,
            analyzed_at,
        }
    }
}

/// Builds the flat record. Pure: no I/O and no clock access.
pub fn assemble(input: AssemblyInput<'_>) -> AnalysisRecord {
    let probe = input.probe;
    let reachable = probe.is_reachable();

    // Nothing was observed for an unreachable target, so there are no
    // warnings, but it cannot be rated better than critical.
    let security_rating = if reachable {
        SecurityRating::from_warnings(&input.security_warnings)
    } else {
        SecurityRating::Critical
    };

    AnalysisRecord {
        url: probe.url.clone(),
        final_url: probe.final_url.clone(),
        analyzed_at: input.analyzed_at,
        reachable,
        status_code: probe.status_code,
        status_text: probe.status_text.clone(),
        failure: probe.failure,
        server: probe.server().map(str::to_string),
        x_powered_by: probe.x_powered_by().map(str::to_string),
        remote_address: probe.remote_address().map(str::to_string),
        protocol: probe.protocol,
        response_time_ms: probe.response_time_ms,
        content_type: probe.content_type().map(str::to_string),
        content_length: probe.content_length,
        detected_provider: input.classification.provider_name.clone(),
        cdn: input.classification,
        security_headers: SecurityHeaders::from_headers(&probe.headers),
        security_warnings: input.security_warnings,
        security_rating,
        performance: input.performance,
        locations: input.locations,
    }
}
