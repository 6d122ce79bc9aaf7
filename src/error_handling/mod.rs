//! Error handling and processing statistics.
//!
//! This module provides:
//! - Error type definitions (initialization, URL validation, export)
//! - Transport failure categorization
//! - Run statistics tracking (errors, warnings, info metrics)
//!
//! Transport failures never abort an analysis: they are categorized,
//! counted, and turned into an "unreachable" probe result.

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::categorize_reqwest_error;
pub use stats::ProcessingStats;
pub use types::{ErrorType, ExportError, InfoType, InitializationError, UrlError, WarningType};
