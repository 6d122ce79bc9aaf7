//! Main application modules.
//!
//! URL validation and statistics printing used by the runner.

pub mod statistics;
pub mod url;

pub use statistics::{print_error_statistics, print_run_summary};
pub use url::validate_and_normalize_url;
