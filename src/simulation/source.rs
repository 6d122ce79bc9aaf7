//! Latency sources.
//!
//! Only this module draws random numbers. Everything downstream receives
//! plain samples through [`LatencySource`].

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::locations::MonitoringLocation;

/// Lower bound of simulated load times, in seconds
pub const MIN_SIMULATED_SECS: f64 = 0.5;
/// Upper bound of simulated load times, in seconds
pub const MAX_SIMULATED_SECS: f64 = 4.5;

/// Produces a load time in seconds for a location.
pub trait LatencySource: Send {
    fn sample(&mut self, location: &MonitoringLocation) -> f64;
}

/// Uniform samples in `[0.5, 4.5]` seconds, rounded to 0.1.
pub struct RandomLatencySource {
    rng: StdRng,
}

impl RandomLatencySource {
    /// Seeded source; the same seed yields the same sequence.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Source seeded from the thread-local generator.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl LatencySource for RandomLatencySource {
    fn sample(&mut self, _location: &MonitoringLocation) -> f64 {
        let raw = self
            .rng
            .random_range(MIN_SIMULATED_SECS..=MAX_SIMULATED_SECS);
        ((raw * 10.0).round() / 10.0).clamp(MIN_SIMULATED_SECS, MAX_SIMULATED_SECS)
    }
}

/// Replays a fixed list of samples, cycling when exhausted.
pub struct FixedLatencySource {
    values: Vec<f64>,
    next: usize,
}

impl FixedLatencySource {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, next: 0 }
    }
}

impl LatencySource for FixedLatencySource {
    fn sample(&mut self, _location: &MonitoringLocation) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::MONITORING_LOCATIONS;

    fn draw(source: &mut impl LatencySource, n: usize) -> Vec<f64> {
        MONITORING_LOCATIONS
            .iter()
            .cycle()
            .take(n)
            .map(|loc| source.sample(loc))
            .collect()
    }

    #[test]
    fn test_random_samples_in_range_and_rounded() {
        let mut source = RandomLatencySource::seeded(7);
        for value in draw(&mut source, 500) {
            assert!((MIN_SIMULATED_SECS..=MAX_SIMULATED_SECS).contains(&value));
            let tenths = value * 10.0;
            assert!((tenths - tenths.round()).abs() < 1e-9, "{value}");
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let a = draw(&mut RandomLatencySource::seeded(42), 32);
        let b = draw(&mut RandomLatencySource::seeded(42), 32);
        assert_eq!(a, b);
    }

    #[test]
    fn test_unseeded_source_in_range() {
        let mut source = RandomLatencySource::new(None);
        for value in draw(&mut source, 50) {
            assert!((MIN_SIMULATED_SECS..=MAX_SIMULATED_SECS).contains(&value));
        }
    }

    #[test]
    fn test_fixed_source_cycles() {
        let mut source = FixedLatencySource::new(vec![1.0, 2.0]);
        assert_eq!(draw(&mut source, 5), vec![1.0, 2.0, 1.0, 2.0, 1.0]);
    }

    #[test]
    fn test_fixed_source_empty() {
        let mut source = FixedLatencySource::new(Vec::new());
        assert_eq!(draw(&mut source, 2), vec![0.0, 0.0]);
    }
}
