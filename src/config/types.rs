//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// HTTP method used for the single probe request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ProbeMethod {
    /// HEAD request (headers only, default)
    Head,
    /// GET request (the body is discarded)
    Get,
}

/// Output format of the analysis report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Paginated plain-text report
    Text,
    /// Pretty-printed JSON record
    Json,
}

impl ReportFormat {
    /// File extension used when the report is written to disk.
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Text => "txt",
            ReportFormat::Json => "json",
        }
    }
}

/// Library configuration (no CLI dependencies).
///
/// This is the core configuration struct used by the library. It can be
/// constructed programmatically without going through the CLI.
///
/// # Examples
///
/// ```no_run
/// use websec_analyzer::Config;
///
/// let config = Config {
///     urls: vec!["example.com".to_string()],
///     simulate_locations: true,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// URLs given directly on the command line
    pub urls: Vec<String>,

    /// Optional file to read additional URLs from (`-` for stdin)
    pub file: Option<PathBuf>,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// HTTP method for the probe
    pub method: ProbeMethod,

    /// Per-request timeout in seconds
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Report output format
    pub format: ReportFormat,

    /// Directory to write reports into (stdout when absent)
    pub output_dir: Option<PathBuf>,

    /// Attach simulated per-location latency samples to each report
    pub simulate_locations: bool,

    /// Seed for the simulated latency generator (random when absent)
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            urls: Vec::new(),
            file: None,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            method: ProbeMethod::Head,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            format: ReportFormat::Text,
            output_dir: None,
            simulate_locations: false,
            seed: None,
        }
    }
}

/// Command-line options.
///
/// This struct is automatically generated by `clap` from the field attributes.
///
/// # Examples
///
/// ```bash
/// # Analyze a single site and print the text report
/// websec_analyzer example.com
///
/// # JSON reports for a list of sites, written to ./reports
/// websec_analyzer --file sites.txt --format json --output-dir ./reports
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "websec_analyzer",
    about = "Probes websites and reports CDN, security header and performance findings."
)]
pub struct Opt {
    /// URLs to analyze (bare hosts are treated as https://host)
    #[arg(value_name = "URL")]
    pub urls: Vec<String>,

    /// File to read URLs from, one per line (`-` reads stdin)
    #[arg(long, value_parser)]
    pub file: Option<PathBuf>,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// HTTP method for the probe: head|get
    #[arg(long, value_enum, default_value_t = ProbeMethod::Head)]
    pub method: ProbeMethod,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Report format: text|json
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    /// Write each report to this directory instead of stdout
    #[arg(long, value_parser)]
    pub output_dir: Option<PathBuf>,

    /// Attach simulated per-location latency samples (labelled as simulated)
    #[arg(long)]
    pub simulate_locations: bool,

    /// Seed for the simulated latency samples
    #[arg(long, requires = "simulate_locations")]
    pub seed: Option<u64>,
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        Self {
            urls: opt.urls,
            file: opt.file,
            log_level: opt.log_level,
            log_format: opt.log_format,
            method: opt.method,
            timeout_seconds: opt.timeout_seconds,
            user_agent: opt.user_agent,
            format: opt.format,
            output_dir: opt.output_dir,
            simulate_locations: opt.simulate_locations,
            seed: opt.seed,
        }
    }
}
