//! End-of-run statistics printing.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{ErrorType, InfoType, ProcessingStats, WarningType};

/// Prints a one-line summary of the run.
pub fn print_run_summary(
    total_urls: usize,
    analyzed: usize,
    unreachable: usize,
    rejected: usize,
    failed_writes: usize,
    elapsed_seconds: f64,
) {
    info!(
        "✅ {}",
        run_summary_line(
            total_urls,
            analyzed,
            unreachable,
            rejected,
            failed_writes,
            elapsed_seconds
        )
    );
}

fn run_summary_line(
    total_urls: usize,
    analyzed: usize,
    unreachable: usize,
    rejected: usize,
    failed_writes: usize,
    elapsed_seconds: f64,
) -> String {
    let mut line = format!(
        "Processed {} URL{} ({} analyzed, {} unreachable, {} rejected",
        total_urls,
        if total_urls == 1 { "" } else { "s" },
        analyzed,
        unreachable,
        rejected,
    );
    if failed_writes > 0 {
        line.push_str(&format!(", {failed_writes} report writes failed"));
    }
    line.push_str(&format!(") in {elapsed_seconds:.1}s"));
    line
}

/// Prints error, warning, and info statistics to the log.
pub fn print_error_statistics(error_stats: &ProcessingStats) {
    for line in error_statistics_lines(error_stats) {
        info!("{line}");
    }
}

fn error_statistics_lines(error_stats: &ProcessingStats) -> Vec<String> {
    let mut lines = Vec::new();

    let total_errors = error_stats.total_errors();
    if total_errors > 0 {
        lines.push(format!("Error Counts ({} total):", total_errors));
        for error_type in ErrorType::iter() {
            let count = error_stats.get_error_count(error_type);
            if count > 0 {
                lines.push(format!("   {}: {}", error_type.as_str(), count));
            }
        }
    }

    let total_warnings = error_stats.total_warnings();
    if total_warnings > 0 {
        lines.push(format!("Warning Counts ({} total):", total_warnings));
        for warning_type in WarningType::iter() {
            let count = error_stats.get_warning_count(warning_type);
            if count > 0 {
                lines.push(format!("   {}: {}", warning_type.as_str(), count));
            }
        }
    }

    let total_info = error_stats.total_info();
    if total_info > 0 {
        lines.push(format!("Info Counts ({} total):", total_info));
        for info_type in InfoType::iter() {
            let count = error_stats.get_info_count(info_type);
            if count > 0 {
                lines.push(format!("   {}: {}", info_type.as_str(), count));
            }
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_statistics_empty() {
        let stats = ProcessingStats::new();
        assert!(error_statistics_lines(&stats).is_empty());
    }

    #[test]
    fn test_error_statistics_lines() {
        let stats = ProcessingStats::new();
        stats.increment_error(ErrorType::HttpRequestTimeoutError);
        stats.increment_error(ErrorType::HttpRequestTimeoutError);
        stats.increment_error(ErrorType::ReportWriteError);
        stats.increment_warning(WarningType::MissingSecurityHeaders);
        stats.increment_info(InfoType::CdnDetected);

        assert_eq!(
            error_statistics_lines(&stats),
            vec![
                "Error Counts (3 total):",
                "   HTTP request timeout error: 2",
                "   Report write error: 1",
                "Warning Counts (1 total):",
                "   Missing security headers: 1",
                "Info Counts (1 total):",
                "   CDN detected: 1",
            ]
        );
    }

    #[test]
    fn test_error_statistics_skips_empty_sections() {
        let stats = ProcessingStats::new();
        stats.increment_info(InfoType::HttpRedirect);
        assert_eq!(
            error_statistics_lines(&stats),
            vec!["Info Counts (1 total):", "   HTTP redirect: 1"]
        );
    }

    #[test]
    fn test_run_summary_line() {
        assert_eq!(
            run_summary_line(1, 1, 0, 0, 0, 0.04),
            "Processed 1 URL (1 analyzed, 0 unreachable, 0 rejected) in 0.0s"
        );
        assert_eq!(
            run_summary_line(3, 2, 1, 1, 2, 1.26),
            "Processed 3 URLs (2 analyzed, 1 unreachable, 1 rejected, 2 report writes failed) in 1.3s"
        );
    }
}
