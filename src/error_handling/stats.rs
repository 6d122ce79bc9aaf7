//! Run statistics tracking.
//!
//! Counts transport failures, warnings and informational events across all
//! URLs analyzed in one run.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::atomic::{AtomicUsize, Ordering};

use strum::IntoEnumIterator;

use super::types::{ErrorType, InfoType, WarningType};

/// Atomic counter per variant of a `strum::EnumIter` enum.
///
/// Every variant is inserted up front, so lookups only miss if a variant was
/// added without going through [`Counters::new`].
struct Counters<T: Eq + Hash> {
    counts: HashMap<T, AtomicUsize>,
}

impl<T> Counters<T>
where
    T: IntoEnumIterator + Eq + Hash + Copy + std::fmt::Debug,
{
    fn new() -> Self {
        Self {
            counts: T::iter().map(|t| (t, AtomicUsize::new(0))).collect(),
        }
    }

    fn increment(&self, key: T) {
        match self.counts.get(&key) {
            Some(counter) => {
                counter.fetch_add(1, Ordering::Relaxed);
            }
            None => log::error!("No counter registered for {:?}", key),
        }
    }

    fn get(&self, key: T) -> usize {
        self.counts
            .get(&key)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    fn total(&self) -> usize {
        T::iter().map(|t| self.get(t)).sum()
    }
}

/// Thread-safe statistics tracker for an analysis run.
///
/// # Categories
///
/// - **Errors**: Transport failures and rejected URLs
/// - **Warnings**: Security findings worth counting across the run
/// - **Info**: Redirects and CDN detections
pub struct ProcessingStats {
    errors: Counters<ErrorType>,
    warnings: Counters<WarningType>,
    info: Counters<InfoType>,
}

impl Default for ProcessingStats {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessingStats {
    pub fn new() -> Self {
        ProcessingStats {
            errors: Counters::new(),
            warnings: Counters::new(),
            info: Counters::new(),
        }
    }

    /// Increment an error counter.
    pub fn increment_error(&self, error: ErrorType) {
        self.errors.increment(error);
    }

    /// Increment a warning counter.
    pub fn increment_warning(&self, warning: WarningType) {
        self.warnings.increment(warning);
    }

    /// Increment an info counter.
    pub fn increment_info(&self, info_type: InfoType) {
        self.info.increment(info_type);
    }

    pub fn get_error_count(&self, error: ErrorType) -> usize {
        self.errors.get(error)
    }

    pub fn get_warning_count(&self, warning: WarningType) -> usize {
        self.warnings.get(warning)
    }

    pub fn get_info_count(&self, info_type: InfoType) -> usize {
        self.info.get(info_type)
    }

    /// Get total error count across all error types.
    pub fn total_errors(&self) -> usize {
        self.errors.total()
    }

    /// Get total warning count across all warning types.
    pub fn total_warnings(&self) -> usize {
        self.warnings.total()
    }

    /// Get total info count across all info types.
    pub fn total_info(&self) -> usize {
        self.info.total()
    }
}
