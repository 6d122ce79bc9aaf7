//! Report assembly and presentation.
//!
//! [`assemble`] merges the probe, classifier and analyzer outputs into one
//! [`AnalysisRecord`]. The record is then rendered as pretty JSON or as a
//! paginated text report and written to stdout or into an output
//! directory.

mod assemble;
mod export;
mod text;
mod types;

pub use assemble::{assemble, AssemblyInput};
pub use export::{render, report_file_name, sanitize_url, write_report, write_to};
pub use text::{paginate, render_text, PAGE_BREAK};
pub use types::AnalysisRecord;
