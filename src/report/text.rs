//! Paginated plain-text report.

use crate::config::{REPORT_LINES_PER_PAGE, REPORT_LINE_WIDTH, REPORT_TOP_LOCATIONS};
use crate::security::SecurityHeaders;

use super::types::AnalysisRecord;

/// Separates pages in the rendered report.
pub const PAGE_BREAK: char = '\u{000C}';

const LABEL_WIDTH: usize = 16;

/// Renders `record` as a text report split into pages.
///
/// Each page holds at most [`REPORT_LINES_PER_PAGE`] lines including a
/// blank line and a `Page n of m` footer. Pages are separated by a form
/// feed.
pub fn render_text(record: &AnalysisRecord) -> String {
    paginate(&report_lines(record), REPORT_LINES_PER_PAGE)
}

/// Splits `lines` into pages of `lines_per_page` (footer included).
pub fn paginate(lines: &[String], lines_per_page: usize) -> String {
    let body = lines_per_page.saturating_sub(2).max(1);
    let pages: Vec<&[String]> = if lines.is_empty() {
        vec![lines]
    } else {
        lines.chunks(body).collect()
    };
    let total = pages.len();

    let mut out = String::new();
    for (index, page) in pages.iter().enumerate() {
        if index > 0 {
            out.push(PAGE_BREAK);
        }
        for line in page.iter() {
            out.push_str(line);
            out.push('\n');
        }
        out.push('\n');
        out.push_str(&format!("Page {} of {}\n", index + 1, total));
    }
    out
}

fn report_lines(record: &AnalysisRecord) -> Vec<String> {
    let mut lines = Vec::new();
    title_block(record, &mut lines);
    performance_section(record, &mut lines);
    security_section(record, &mut lines);
    cdn_section(record, &mut lines);
    recommendations_section(record, &mut lines);
    if let Some(locations) = &record.locations {
        heading("Locations (simulated)", &mut lines);
        lines.push("Figures below are simulated, not measured.".to_string());
        field("Average", &format!("{:.2} s", locations.average_secs), &mut lines);
        if let Some(fastest) = &locations.fastest {
            field(
                "Fastest",
                &format!("{}, {} ({:.1} s)", fastest.city, fastest.country, fastest.load_time_secs),
                &mut lines,
            );
        }
        if let Some(slowest) = &locations.slowest {
            field(
                "Slowest",
                &format!("{}, {} ({:.1} s)", slowest.city, slowest.country, slowest.load_time_secs),
                &mut lines,
            );
        }
        lines.push(String::new());
        for (rank, sample) in locations.top(REPORT_TOP_LOCATIONS).iter().enumerate() {
            let place = format!("{}, {}", sample.city, sample.country);
            lines.push(format!(
                "{:>3}. {:<34} {:>5.1} s  {}",
                rank + 1,
                place,
                sample.load_time_secs,
                sample.status
            ));
        }
    }
    lines
}

fn title_block(record: &AnalysisRecord, lines: &mut Vec<String>) {
    let title = "WEBSITE SECURITY AND PERFORMANCE REPORT";
    lines.push(title.to_string());
    lines.push("=".repeat(title.len()));
    field("URL", &record.url, lines);
    if record.final_url != record.url {
        field("Final URL", &record.final_url, lines);
    }
    field(
        "Analyzed at",
        &record.analyzed_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        lines,
    );
    if record.reachable {
        field(
            "Status",
            &format!("{} {}", record.status_code, record.status_text),
            lines,
        );
    } else {
        let reason = record
            .failure
            .map(|f| f.as_str().to_string())
            .unwrap_or_else(|| record.status_text.clone());
        field("Status", &format!("unreachable ({reason})"), lines);
    }
    field("Protocol", record.protocol.as_str(), lines);
    field("Server", or_dash(record.server.as_deref()), lines);
    field("Powered by", or_dash(record.x_powered_by.as_deref()), lines);
    field(
        "Remote address",
        or_dash(record.remote_address.as_deref()),
        lines,
    );
    field("Content type", or_dash(record.content_type.as_deref()), lines);
}

fn performance_section(record: &AnalysisRecord, lines: &mut Vec<String>) {
    let perf = &record.performance;
    heading("Performance", lines);
    field("Load time", &format!("{:.2} s", perf.load_time_secs), lines);
    field("Response time", &format!("{} ms", perf.response_time_ms), lines);
    field("Page size", &format_bytes(perf.page_size), lines);

    let mut encodings = Vec::new();
    if perf.compression.gzip {
        encodings.push("gzip");
    }
    if perf.compression.brotli {
        encodings.push("brotli");
    }
    if perf.compression.deflate {
        encodings.push("deflate");
    }
    let compression = if encodings.is_empty() {
        "none".to_string()
    } else {
        encodings.join(", ")
    };
    field("Compression", &compression, lines);
}

fn security_section(record: &AnalysisRecord, lines: &mut Vec<String>) {
    heading("Security", lines);
    field("Rating", record.security_rating.as_str(), lines);
    let flags = header_flags(&record.security_headers);
    field(
        "Headers",
        &format!(
            "{} of {} present",
            record.security_headers.present_count(),
            flags.len()
        ),
        lines,
    );
    for (name, present) in flags {
        field(name, if present { "present" } else { "missing" }, lines);
    }
    if record.security_warnings.is_empty() {
        if record.reachable {
            lines.push("No security warnings.".to_string());
        }
        return;
    }
    lines.push(String::new());
    lines.push("Warnings:".to_string());
    for warning in &record.security_warnings {
        wrap_into(
            &format!("[{}] {}", warning.code(), warning.description()),
            "  - ",
            "    ",
            lines,
        );
        wrap_into(warning.remediation(), "    Fix: ", "         ", lines);
    }
}

fn header_flags(flags: &SecurityHeaders) -> [(&'static str, bool); 5] {
    [
        ("HSTS", flags.hsts),
        ("CSP", flags.csp),
        ("X-Frame-Options", flags.xframe),
        ("X-XSS-Protection", flags.xss),
        ("X-Content-Type", flags.content_type_options),
    ]
}

fn cdn_section(record: &AnalysisRecord, lines: &mut Vec<String>) {
    heading("CDN", lines);
    let detected = match &record.cdn.provider_name {
        Some(name) if record.cdn.detected => format!("yes ({name})"),
        _ => "no".to_string(),
    };
    field("Detected", &detected, lines);
    if !record.cdn.matched_domains.is_empty() {
        field("Domains", &record.cdn.matched_domains.join(", "), lines);
    }
    field("Method", &record.cdn.analysis_method, lines);
}

fn recommendations_section(record: &AnalysisRecord, lines: &mut Vec<String>) {
    let recommendations = &record.performance.recommendations;
    if recommendations.is_empty() {
        return;
    }
    heading("Recommendations", lines);
    for rec in recommendations {
        let prefix = format!("  [{}] ", rec.category.title());
        let indent = " ".repeat(prefix.len());
        wrap_into(&rec.message, &prefix, &indent, lines);
    }
}

fn heading(title: &str, lines: &mut Vec<String>) {
    lines.push(String::new());
    let upper = title.to_uppercase();
    lines.push(upper.clone());
    lines.push("-".repeat(upper.chars().count()));
}

fn field(label: &str, value: &str, lines: &mut Vec<String>) {
    let prefix = format!("{:<width$}", format!("{label}:"), width = LABEL_WIDTH);
    let indent = " ".repeat(LABEL_WIDTH);
    wrap_into(value, &prefix, &indent, lines);
}

fn or_dash(value: Option<&str>) -> &str {
    value.unwrap_or("-")
}

/// Word-wraps `text` to the report width. Words longer than the width
/// (such as URLs) are split.
fn wrap_into(text: &str, first_prefix: &str, prefix: &str, lines: &mut Vec<String>) {
    let mut current = first_prefix.to_string();
    let mut empty = true;
    for word in text.split_whitespace() {
        let needed = if empty { 0 } else { 1 } + word.chars().count();
        if !empty && current.chars().count() + needed > REPORT_LINE_WIDTH {
            lines.push(std::mem::replace(&mut current, prefix.to_string()));
            empty = true;
        }
        if !empty {
            current.push(' ');
        }
        for ch in word.chars() {
            if current.chars().count() >= REPORT_LINE_WIDTH {
                lines.push(std::mem::replace(&mut current, prefix.to_string()));
            }
            current.push(ch);
        }
        empty = false;
    }
    lines.push(current);
}

fn format_bytes(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    let b = bytes as f64;
    if b < KB {
        format!("{bytes} B")
    } else if b < KB * KB {
        format!("{:.1} KB", b / KB)
    } else {
        format!("{:.1} MB", b / (KB * KB))
    }
}
