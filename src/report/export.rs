//! Rendering and writing reports.

use std::fs;
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use super::text::render_text;
use super::types::AnalysisRecord;
use crate::config::{
    ReportFormat, REPORT_FILE_PREFIX, REPORT_NAME_ATTEMPTS, REPORT_URL_SEGMENT_MAX,
};
use crate::error_handling::ExportError;

/// Writer wrapper that treats a closed pipe as success, so piping the
/// output into `head` does not turn into an error.
pub(crate) struct IgnoreBrokenPipe<W: Write> {
    inner: W,
}

impl<W: Write> IgnoreBrokenPipe<W> {
    pub(crate) fn new(inner: W) -> Self {
        Self { inner }
    }
}

impl<W: Write> Write for IgnoreBrokenPipe<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf).or_else(|e| {
            if e.kind() == ErrorKind::BrokenPipe {
                Ok(buf.len())
            } else {
                Err(e)
            }
        })
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush().or_else(|e| {
            if e.kind() == ErrorKind::BrokenPipe {
                Ok(())
            } else {
                Err(e)
            }
        })
    }
}

/// Replaces every character that is not an ASCII letter or digit with `-`.
pub fn sanitize_url(url: &str) -> String {
    url.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect()
}

/// `websec-analysis-<sanitized-url>-<YYYY-MM-DD>.<ext>`
///
/// The URL part is capped at [`REPORT_URL_SEGMENT_MAX`] characters; a cut
/// URL gets a hash of the full URL appended so that the name stays stable
/// and distinct.
pub fn report_file_name(url: &str, date: NaiveDate, format: ReportFormat) -> String {
    format!(
        "{}-{}-{}.{}",
        REPORT_FILE_PREFIX,
        url_segment(url),
        date.format("%Y-%m-%d"),
        format.extension()
    )
}

fn url_segment(url: &str) -> String {
    let sanitized = sanitize_url(url);
    if sanitized.len() <= REPORT_URL_SEGMENT_MAX {
        return sanitized;
    }
    // sanitize_url output is ASCII, so byte slicing is on a char boundary
    format!(
        "{}-{:016x}",
        &sanitized[..REPORT_URL_SEGMENT_MAX],
        fnv1a_64(url.as_bytes())
    )
}

fn fnv1a_64(bytes: &[u8]) -> u64 {
    const FNV_OFFSET: u64 = 0xcbf29ce484222325;
    const FNV_PRIME: u64 = 0x100000001b3;
    let mut hash = FNV_OFFSET;
    for byte in bytes {
        hash ^= *byte as u64;
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

/// Creates `name` inside `dir` without replacing an existing file. When the
/// name is taken, `<stem>-2.<ext>`, `<stem>-3.<ext>` and so on are tried.
fn create_unique(dir: &Path, name: &str) -> io::Result<(fs::File, PathBuf)> {
    let (stem, ext) = name.rsplit_once('.').unwrap_or((name, ""));
    for n in 1..=REPORT_NAME_ATTEMPTS {
        let candidate = match n {
            1 => name.to_string(),
            _ if ext.is_empty() => format!("{stem}-{n}"),
            _ => format!("{stem}-{n}.{ext}"),
        };
        let path = dir.join(candidate);
        match fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
        {
            Ok(file) => return Ok((file, path)),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
            Err(e) => return Err(e),
        }
    }
    Err(io::Error::new(
        ErrorKind::AlreadyExists,
        format!("no free report file name for {name}"),
    ))
}

/// Renders a record in the requested format.
pub fn render(record: &AnalysisRecord, format: ReportFormat) -> Result<String, ExportError> {
    match format {
        ReportFormat::Text => Ok(render_text(record)),
        ReportFormat::Json => {
            let mut json = serde_json::to_string_pretty(record)?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// Writes the rendered record to `writer`.
pub fn write_to<W: Write>(
    writer: &mut W,
    record: &AnalysisRecord,
    format: ReportFormat,
) -> Result<(), ExportError> {
    writer.write_all(render(record, format)?.as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Writes a report into `output_dir` (created if needed), or to stdout
/// when no directory is given. Existing files are never overwritten.
///
/// Returns the path of the written file, if any.
pub fn write_report(
    record: &AnalysisRecord,
    format: ReportFormat,
    output_dir: Option<&Path>,
) -> Result<Option<PathBuf>, ExportError> {
    match output_dir {
        Some(dir) => {
            fs::create_dir_all(dir)?;
            let name = report_file_name(&record.url, record.analyzed_at.date_naive(), format);
            let (mut file, path) = create_unique(dir, &name)?;
            write_to(&mut file, record, format)?;
            Ok(Some(path))
        }
        None => {
            let mut stdout = IgnoreBrokenPipe::new(io::stdout().lock());
            write_to(&mut stdout, record, format)?;
            Ok(None)
        }
    }
}
