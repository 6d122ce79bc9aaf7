//! Logger initialization.

use std::io::Write;

use colored::*;
use log::{Level, LevelFilter};

use crate::config::LogFormat;
use crate::error_handling::InitializationError;

/// Initializes the logger with the specified level and format.
///
/// `RUST_LOG` is read first and the CLI `level` then overrides it, so
/// `RUST_LOG=websec_analyzer=trace` still works for one-off debugging while
/// `--log-level` stays authoritative. HTTP stack crates are capped at Info.
///
/// Logs go to stderr; stdout is reserved for reports.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already set.
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::from_default_env();

    builder.filter_level(level);
    builder.filter_module("reqwest", LevelFilter::Info.min(level));
    builder.filter_module("hyper", LevelFilter::Info.min(level));
    builder.filter_module("hyper_util", LevelFilter::Info.min(level));
    builder.filter_module("websec_analyzer", level);
    builder.target(env_logger::Target::Stderr);

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| {
                writeln!(
                    buf,
                    "{}",
                    json_line(
                        chrono::Utc::now().timestamp_millis(),
                        record.level(),
                        record.target(),
                        &record.args().to_string(),
                    )
                )
            });
        }
        LogFormat::Plain => {
            builder.format(|buf, record| {
                let level = record.level();
                writeln!(
                    buf,
                    "{} {} [{}] {}",
                    level_marker(level),
                    record.target().cyan(),
                    colored_level(level),
                    record.args()
                )
            });
        }
    }

    builder.try_init().map_err(InitializationError::from)?;

    Ok(())
}

/// One JSON object per line; the message is escaped through `serde_json`.
fn json_line(ts_millis: i64, level: Level, target: &str, msg: &str) -> String {
    format!(
        "{{\"ts\":{},\"level\":\"{}\",\"target\":\"{}\",\"msg\":{}}}",
        ts_millis,
        level,
        target,
        serde_json::to_string(msg).unwrap_or_else(|_| "\"\"".into())
    )
}

fn colored_level(level: Level) -> ColoredString {
    let text = level.to_string();
    match level {
        Level::Error => text.red(),
        Level::Warn => text.yellow(),
        Level::Info => text.green(),
        Level::Debug => text.blue(),
        Level::Trace => text.purple(),
    }
}

fn level_marker(level: Level) -> &'static str {
    match level {
        Level::Error => "❌",
        Level::Warn => "⚠️",
        Level::Info => "✔️",
        Level::Debug => "🔍",
        Level::Trace => "🔬",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_line_is_valid_json() {
        let line = json_line(
            1_700_000_000_000,
            Level::Warn,
            "websec_analyzer::probe",
            "probe failed: \"timeout\"\nretrying",
        );
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["ts"], 1_700_000_000_000i64);
        assert_eq!(value["level"], "WARN");
        assert_eq!(value["target"], "websec_analyzer::probe");
        assert_eq!(value["msg"], "probe failed: \"timeout\"\nretrying");
    }

    #[test]
    fn test_every_level_has_marker() {
        for level in [
            Level::Error,
            Level::Warn,
            Level::Info,
            Level::Debug,
            Level::Trace,
        ] {
            assert!(!level_marker(level).is_empty());
            assert!(colored_level(level).to_string().contains(level.as_str()));
        }
    }

    #[test]
    fn test_init_logger_twice() {
        // Only the first logger in a process can be installed
        let first = init_logger_with(LevelFilter::Info, LogFormat::Plain);
        let second = init_logger_with(LevelFilter::Debug, LogFormat::Json);
        assert!(first.is_ok() || second.is_err());
        assert!(second.is_err());
    }
}
