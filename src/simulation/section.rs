//! Per-location samples and their summary statistics.

use serde::{Deserialize, Serialize};

use super::locations::{MonitoringLocation, MONITORING_LOCATIONS};
use super::source::LatencySource;

/// Load-time bucket for a location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LatencyStatus {
    /// Under 1 s
    Excellent,
    /// Under 2 s
    Good,
    /// Under 4 s
    Average,
    Poor,
}

impl LatencyStatus {
    pub fn from_secs(secs: f64) -> Self {
        if secs < 1.0 {
            LatencyStatus::Excellent
        } else if secs < 2.0 {
            LatencyStatus::Good
        } else if secs < 4.0 {
            LatencyStatus::Average
        } else {
            LatencyStatus::Poor
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LatencyStatus::Excellent => "excellent",
            LatencyStatus::Good => "good",
            LatencyStatus::Average => "average",
            LatencyStatus::Poor => "poor",
        }
    }
}

impl std::fmt::Display for LatencyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocationSample {
    pub city: String,
    pub country: String,
    pub region: String,
    pub latitude: f64,
    pub longitude: f64,
    pub load_time_secs: f64,
    pub status: LatencyStatus,
}

impl LocationSample {
    pub fn new(location: &MonitoringLocation, load_time_secs: f64) -> Self {
        Self {
            city: location.city.to_string(),
            country: location.country.to_string(),
            region: location.region.to_string(),
            latitude: location.latitude,
            longitude: location.longitude,
            load_time_secs,
            status: LatencyStatus::from_secs(load_time_secs),
        }
    }
}

/// Simulated per-location load times.
///
/// `simulated` is always true; the figures do not come from real
/// measurements and reports must say so.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocationsSection {
    pub simulated: bool,
    pub samples: Vec<LocationSample>,
    pub average_secs: f64,
    pub fastest: Option<LocationSample>,
    pub slowest: Option<LocationSample>,
}

impl LocationsSection {
    /// Samples every monitoring location once.
    pub fn simulate(source: &mut dyn LatencySource) -> Self {
        let samples = MONITORING_LOCATIONS
            .iter()
            .map(|location| LocationSample::new(location, source.sample(location)))
            .collect();
        Self::from_samples(samples)
    }

    /// Computes the summary over `samples`, keeping their order.
    ///
    /// Ties for fastest/slowest go to the earliest sample.
    pub fn from_samples(samples: Vec<LocationSample>) -> Self {
        let average_secs = if samples.is_empty() {
            0.0
        } else {
            samples.iter().map(|s| s.load_time_secs).sum::<f64>() / samples.len() as f64
        };

        let mut fastest: Option<&LocationSample> = None;
        let mut slowest: Option<&LocationSample> = None;
        for sample in &samples {
            if fastest.is_none_or(|f| sample.load_time_secs < f.load_time_secs) {
                fastest = Some(sample);
            }
            if slowest.is_none_or(|s| sample.load_time_secs > s.load_time_secs) {
                slowest = Some(sample);
            }
        }
        let fastest = fastest.cloned();
        let slowest = slowest.cloned();

        Self {
            simulated: true,
            samples,
            average_secs,
            fastest,
            slowest,
        }
    }

    /// The `n` fastest samples, ascending by load time.
    pub fn top(&self, n: usize) -> Vec<&LocationSample> {
        let mut sorted: Vec<&LocationSample> = self.samples.iter().collect();
        sorted.sort_by(|a, b| a.load_time_secs.total_cmp(&b.load_time_secs));
        sorted.truncate(n);
        sorted
    }
}
