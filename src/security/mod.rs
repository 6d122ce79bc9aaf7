//! Security header analysis.
//!
//! Looks at the final URL and the response headers of a probe and reports:
//! - whether the site is served over HTTPS
//! - which of the tracked security headers are present
//! - an overall rating derived from the missing items

mod analysis;
mod types;

pub use analysis::analyze_security;
pub use types::{SecurityHeaders, SecurityRating, SecurityWarning};
