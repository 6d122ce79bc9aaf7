//! Shared resource setup: the logger and the HTTP client.
//!
//! Both return [`InitializationError`](crate::error_handling::InitializationError)
//! so `main` can report setup failures distinctly from analysis results.

mod client;
mod logger;

pub use client::init_client;
pub use logger::init_logger_with;
