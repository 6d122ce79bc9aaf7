//! Simulated per-location latency.
//!
//! The tool makes a single request from one place, so regional load times
//! are simulated. Samples come from a [`LatencySource`]: random (optionally
//! seeded) for real runs, fixed for tests. Every section built here is
//! flagged `simulated`.

mod locations;
mod section;
mod source;

pub use locations::{MonitoringLocation, MONITORING_LOCATIONS};
pub use section::{LatencyStatus, LocationSample, LocationsSection};
pub use source::{
    FixedLatencySource, LatencySource, RandomLatencySource, MAX_SIMULATED_SECS,
    MIN_SIMULATED_SECS,
};
