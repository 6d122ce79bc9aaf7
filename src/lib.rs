//! websec_analyzer library: single-request website analysis
//!
//! Each URL is probed once. The response headers are classified against a
//! CDN signature table, checked for security headers and summarized for
//! performance, then assembled into one [`AnalysisRecord`](report::AnalysisRecord)
//! that is rendered as text or JSON.
//!
//! # Example
//!
//! ```no_run
//! use websec_analyzer::{run_analysis, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     urls: vec!["example.com".to_string()],
//!     output_dir: Some(std::path::PathBuf::from("reports")),
//!     ..Default::default()
//! };
//!
//! let report = run_analysis(config).await?;
//! println!(
//!     "Analyzed {} of {} URLs ({} unreachable)",
//!     report.analyzed, report.total_urls, report.unreachable
//! );
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! [`run_analysis`] needs a Tokio runtime. The classifier, analyzers and
//! report renderers are synchronous and can be used on their own.

mod app;
pub mod cdn;
pub mod config;
pub mod error_handling;
pub mod initialization;
pub mod performance;
pub mod probe;
pub mod report;
pub mod security;
pub mod simulation;

// Re-export public API
pub use app::validate_and_normalize_url;
pub use config::{Config, LogFormat, LogLevel, Opt, ProbeMethod, ReportFormat};
pub use run::{analyze_url, run_analysis, run_with_prober, AnalysisReport};

// Internal run module (contains the main analysis loop)
mod run {
    use std::path::PathBuf;
    use std::time::Instant;

    use anyhow::{bail, Context, Result};
    use chrono::Utc;
    use log::{debug, info, warn};
    use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

    use crate::app::{print_error_statistics, print_run_summary, validate_and_normalize_url};
    use crate::config::Config;
    use crate::error_handling::{ErrorType, InfoType, ProcessingStats, WarningType};
    use crate::initialization::init_client;
    use crate::probe::{HttpProber, Prober, Protocol};
    use crate::report::{assemble, write_report, AnalysisRecord, AssemblyInput};
    use crate::security::SecurityWarning;
    use crate::simulation::{LatencySource, LocationsSection, RandomLatencySource};

    /// Results of an analysis run.
    #[derive(Debug, Clone)]
    pub struct AnalysisReport {
        /// Number of URL inputs read (args, file and stdin)
        pub total_urls: usize,
        /// URLs that passed validation and were probed
        pub analyzed: usize,
        /// Analyzed URLs whose probe failed at the transport level
        pub unreachable: usize,
        /// Inputs rejected by URL validation
        pub rejected: usize,
        /// Report files written (empty when reports went to stdout)
        pub written: Vec<PathBuf>,
        /// Reports that could not be written; their records are still kept
        pub failed_writes: usize,
        /// One record per analyzed URL, in input order
        pub records: Vec<AnalysisRecord>,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    impl AnalysisReport {
        /// True when inputs were given but none could be analyzed.
        pub fn all_rejected(&self) -> bool {
            self.total_urls > 0 && self.analyzed == 0
        }
    }

    /// Runs an analysis with the provided configuration.
    ///
    /// Builds the shared HTTP client and hands off to [`run_with_prober`].
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - No URLs were given
    /// - The URL file cannot be read
    /// - The HTTP client cannot be built
    ///
    /// A report that cannot be written is logged and counted, and the run
    /// moves on to the next URL.
    pub async fn run_analysis(config: Config) -> Result<AnalysisReport> {
        let client = init_client(&config).context("Failed to initialize HTTP client")?;
        let prober = HttpProber::new(client, config.method);
        run_with_prober(&config, &prober).await
    }

    /// Analyzes every input URL sequentially with `prober`.
    ///
    /// Invalid URLs are logged and counted; unreachable targets still yield
    /// a report.
    pub async fn run_with_prober<P: Prober + ?Sized>(
        config: &Config,
        prober: &P,
    ) -> Result<AnalysisReport> {
        let start = Instant::now();
        let inputs = collect_urls(config).await?;
        if inputs.is_empty() {
            bail!("No URLs to analyze: pass URLs as arguments or use --file");
        }
        info!("Analyzing {} URL{}", inputs.len(), if inputs.len() == 1 { "" } else { "s" });

        let stats = ProcessingStats::new();
        let mut latency = config
            .simulate_locations
            .then(|| RandomLatencySource::new(config.seed));

        let mut report = AnalysisReport {
            total_urls: inputs.len(),
            analyzed: 0,
            unreachable: 0,
            rejected: 0,
            written: Vec::new(),
            failed_writes: 0,
            records: Vec::new(),
            elapsed_seconds: 0.0,
        };

        for raw in &inputs {
            let url = match validate_and_normalize_url(raw) {
                Ok(url) => url,
                Err(e) => {
                    warn!("Skipping URL: {e}");
                    stats.increment_error(ErrorType::InvalidUrl);
                    report.rejected += 1;
                    continue;
                }
            };

            let record = analyze_url(
                prober,
                &url,
                latency.as_mut().map(|s| s as &mut dyn LatencySource),
            )
            .await;
            record_stats(&stats, &record);

            report.analyzed += 1;
            if !record.reachable {
                report.unreachable += 1;
            }
            info!(
                "{} -> {} {} | CDN: {} | security: {}",
                record.url,
                record.status_code,
                record.status_text,
                record.detected_provider.as_deref().unwrap_or("none"),
                record.security_rating
            );

            match write_report(&record, config.format, config.output_dir.as_deref()) {
                Ok(Some(path)) => {
                    info!("Report written to {}", path.display());
                    report.written.push(path);
                }
                Ok(None) => {}
                Err(e) => {
                    warn!("Failed to write report for {}: {e}", record.url);
                    stats.increment_error(ErrorType::ReportWriteError);
                    report.failed_writes += 1;
                }
            }
            report.records.push(record);
        }

        report.elapsed_seconds = start.elapsed().as_secs_f64();
        print_error_statistics(&stats);
        print_run_summary(
            report.total_urls,
            report.analyzed,
            report.unreachable,
            report.rejected,
            report.failed_writes,
            report.elapsed_seconds,
        );

        Ok(report)
    }

    /// Probes one validated URL and assembles its record.
    ///
    /// Location samples are drawn only for reachable targets.
    pub async fn analyze_url<P: Prober + ?Sized>(
        prober: &P,
        url: &str,
        latency: Option<&mut dyn LatencySource>,
    ) -> AnalysisRecord {
        let probe = prober.probe(url).await;
        let locations = match latency {
            Some(source) if probe.is_reachable() => Some(LocationsSection::simulate(source)),
            _ => None,
        };
        assemble(AssemblyInput::from_probe(&probe, locations, Utc::now()))
    }

    fn record_stats(stats: &ProcessingStats, record: &AnalysisRecord) {
        if !record.reachable {
            stats.increment_error(record.failure.unwrap_or(ErrorType::HttpRequestOtherError));
            return;
        }
        if record.final_url != record.url {
            stats.increment_info(InfoType::HttpRedirect);
            let upgraded = Protocol::from_url(&record.url) == Protocol::Http
                && record.protocol == Protocol::Https;
            if upgraded {
                stats.increment_info(InfoType::HttpsRedirect);
            }
        }
        if record.cdn.detected {
            stats.increment_info(InfoType::CdnDetected);
        }
        if record.security_warnings.contains(&SecurityWarning::NoHttps) {
            stats.increment_warning(WarningType::NoHttps);
        } else if !record.security_warnings.is_empty() {
            stats.increment_warning(WarningType::MissingSecurityHeaders);
        }
    }

    /// Gathers URL inputs: positional arguments first, then the file (or
    /// stdin for `-`). Blank lines and `#` comments are skipped.
    async fn collect_urls(config: &Config) -> Result<Vec<String>> {
        let mut urls: Vec<String> = config
            .urls
            .iter()
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty())
            .collect();

        match &config.file {
            Some(path) if path.as_os_str() == "-" => {
                info!("Reading URLs from stdin");
                let reader = BufReader::new(tokio::io::stdin());
                urls.extend(read_url_lines(reader).await.context("Failed to read stdin")?);
            }
            Some(path) => {
                let file = tokio::fs::File::open(path)
                    .await
                    .with_context(|| format!("Failed to open input file: {}", path.display()))?;
                let lines = read_url_lines(BufReader::new(file))
                    .await
                    .with_context(|| format!("Failed to read input file: {}", path.display()))?;
                debug!("Read {} URLs from {}", lines.len(), path.display());
                urls.extend(lines);
            }
            None => {}
        }

        Ok(urls)
    }

    async fn read_url_lines<R: AsyncBufRead + Unpin>(reader: R) -> std::io::Result<Vec<String>> {
        let mut lines = reader.lines();
        let mut urls = Vec::new();
        while let Some(line) = lines.next_line().await? {
            let trimmed = line.trim();
            if !trimmed.is_empty() && !trimmed.starts_with('#') {
                urls.push(trimmed.to_string());
            }
        }
        Ok(urls)
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::probe::{ProbeResult, ResponseHeaders};
        use crate::simulation::FixedLatencySource;
        use async_trait::async_trait;
        use std::io::Write as _;
        use std::sync::Mutex;

        /// Returns canned results and remembers what it was asked.
        struct CannedProber {
            headers: ResponseHeaders,
            reachable: bool,
            seen: Mutex<Vec<String>>,
        }

        impl CannedProber {
            fn new(pairs: &[(&str, &str)], reachable: bool) -> Self {
                Self {
                    headers: pairs.iter().map(|(k, v)| (*k, *v)).collect(),
                    reachable,
                    seen: Mutex::new(Vec::new()),
                }
            }
        }

        #[async_trait]
        impl Prober for CannedProber {
            async fn probe(&self, url: &str) -> ProbeResult {
                self.seen.lock().unwrap().push(url.to_string());
                if !self.reachable {
                    return ProbeResult::unreachable(url, ErrorType::HttpRequestConnectError);
                }
                ProbeResult {
                    url: url.to_string(),
                    final_url: url.to_string(),
                    status_code: 200,
                    status_text: "OK".to_string(),
                    headers: self.headers.clone(),
                    response_time_ms: 42,
                    protocol: Protocol::from_url(url),
                    content_length: 0,
                    failure: None,
                }
            }
        }

        fn config_with(urls: &[&str], dir: &tempfile::TempDir) -> Config {
            Config {
                urls: urls.iter().map(|u| u.to_string()).collect(),
                output_dir: Some(dir.path().to_path_buf()),
                ..Default::default()
            }
        }

        #[tokio::test]
        async fn test_run_counts_and_normalizes() {
            let dir = tempfile::tempdir().unwrap();
            let config = config_with(&["example.com", "ftp://example.com", "  "], &dir);
            let prober = CannedProber::new(&[("cf-ray", "1")], true);

            let report = run_with_prober(&config, &prober).await.unwrap();

            assert_eq!(report.total_urls, 2);
            assert_eq!(report.analyzed, 1);
            assert_eq!(report.rejected, 1);
            assert_eq!(report.unreachable, 0);
            assert!(!report.all_rejected());
            assert_eq!(*prober.seen.lock().unwrap(), vec!["https://example.com"]);
            assert_eq!(report.records[0].detected_provider.as_deref(), Some("CloudFlare"));
            assert_eq!(report.written.len(), 1);
            assert!(report.written[0].exists());
        }

        #[tokio::test]
        async fn test_run_all_rejected() {
            let dir = tempfile::tempdir().unwrap();
            let config = config_with(&["mailto:a@b.c", "not a url"], &dir);
            let prober = CannedProber::new(&[], true);

            let report = run_with_prober(&config, &prober).await.unwrap();
            assert!(report.all_rejected());
            assert!(prober.seen.lock().unwrap().is_empty());
            assert!(report.written.is_empty());
        }

        #[tokio::test]
        async fn test_run_without_inputs_fails() {
            let config = Config::default();
            let prober = CannedProber::new(&[], true);
            assert!(run_with_prober(&config, &prober).await.is_err());
        }

        #[tokio::test]
        async fn test_run_unreachable_still_reports() {
            let dir = tempfile::tempdir().unwrap();
            let mut config = config_with(&["down.example"], &dir);
            config.simulate_locations = true;
            config.seed = Some(1);
            let prober = CannedProber::new(&[], false);

            let report = run_with_prober(&config, &prober).await.unwrap();
            assert_eq!(report.analyzed, 1);
            assert_eq!(report.unreachable, 1);
            assert!(!report.all_rejected());
            let record = &report.records[0];
            assert!(!record.reachable);
            assert!(record.locations.is_none());
            assert_eq!(report.written.len(), 1);
        }

        #[tokio::test]
        async fn test_run_reads_file_and_skips_comments() {
            let dir = tempfile::tempdir().unwrap();
            let list = dir.path().join("urls.txt");
            let mut file = std::fs::File::create(&list).unwrap();
            writeln!(file, "# sites").unwrap();
            writeln!(file, "a.example").unwrap();
            writeln!(file).unwrap();
            writeln!(file, "http://b.example/path").unwrap();
            drop(file);

            let mut config = config_with(&["c.example"], &dir);
            config.file = Some(list);
            let prober = CannedProber::new(&[], true);

            let report = run_with_prober(&config, &prober).await.unwrap();
            assert_eq!(report.total_urls, 3);
            assert_eq!(
                *prober.seen.lock().unwrap(),
                vec![
                    "https://c.example",
                    "https://a.example",
                    "http://b.example/path"
                ]
            );
        }

        #[tokio::test]
        async fn test_run_missing_file_fails() {
            let dir = tempfile::tempdir().unwrap();
            let mut config = config_with(&[], &dir);
            config.file = Some(dir.path().join("missing.txt"));
            let prober = CannedProber::new(&[], true);
            let err = run_with_prober(&config, &prober).await.unwrap_err();
            assert!(format!("{err:#}").contains("Failed to open input file"));
        }

        #[tokio::test]
        async fn test_analyze_url_with_fixed_latency() {
            let prober = CannedProber::new(&[("x-amz-cf-pop", "FRA56")], true);
            let mut source = FixedLatencySource::new(vec![0.9, 3.1]);
            let record = analyze_url(&prober, "https://shop.example", Some(&mut source)).await;

            assert_eq!(record.detected_provider.as_deref(), Some("AWS CloudFront"));
            let locations = record.locations.expect("simulated locations");
            assert!(locations.simulated);
            assert_eq!(locations.samples[0].load_time_secs, 0.9);
            assert_eq!(locations.samples[1].load_time_secs, 3.1);
        }

        #[tokio::test]
        async fn test_run_long_url_is_reported() {
            let dir = tempfile::tempdir().unwrap();
            let long = format!("https://example.com/search?q={}", "a".repeat(300));
            let config = config_with(&[long.as_str(), "ok.example"], &dir);
            let prober = CannedProber::new(&[], true);

            let report = run_with_prober(&config, &prober).await.unwrap();
            assert_eq!(report.analyzed, 2);
            assert_eq!(report.failed_writes, 0);
            assert_eq!(report.written.len(), 2);
            assert!(report.written.iter().all(|p| p.exists()));
        }

        #[tokio::test]
        async fn test_run_continues_past_failed_write() {
            let dir = tempfile::tempdir().unwrap();
            let blocker = dir.path().join("reports");
            std::fs::write(&blocker, "not a directory").unwrap();
            let mut config = config_with(&["a.example", "b.example"], &dir);
            config.output_dir = Some(blocker);
            let prober = CannedProber::new(&[], true);

            let report = run_with_prober(&config, &prober).await.unwrap();
            assert_eq!(report.analyzed, 2);
            assert_eq!(report.failed_writes, 2);
            assert!(report.written.is_empty());
            assert_eq!(report.records.len(), 2);
            assert_eq!(
                *prober.seen.lock().unwrap(),
                vec!["https://a.example", "https://b.example"]
            );
        }

        #[tokio::test]
        async fn test_run_colliding_urls_keep_both_reports() {
            let dir = tempfile::tempdir().unwrap();
            let config = config_with(
                &["https://a.example/x-y", "https://a.example/x/y", "https://a.example/x-y"],
                &dir,
            );
            let prober = CannedProber::new(&[], true);

            let report = run_with_prober(&config, &prober).await.unwrap();
            assert_eq!(report.written.len(), 3);
            let on_disk = std::fs::read_dir(dir.path()).unwrap().count();
            assert_eq!(on_disk, 3);
        }

        #[test]
        fn test_record_stats_uppercase_scheme_redirect() {
            let stats = ProcessingStats::new();
            let probe = ProbeResult {
                url: "HTTP://example.com".to_string(),
                final_url: "https://example.com/".to_string(),
                status_code: 200,
                status_text: "OK".to_string(),
                headers: ResponseHeaders::new(),
                response_time_ms: 10,
                protocol: Protocol::Https,
                content_length: 0,
                failure: None,
            };
            let record = assemble(AssemblyInput::from_probe(&probe, None, Utc::now()));
            record_stats(&stats, &record);
            assert_eq!(stats.get_info_count(InfoType::HttpRedirect), 1);
            assert_eq!(stats.get_info_count(InfoType::HttpsRedirect), 1);
        }

        #[test]
        fn test_record_stats() {
            let stats = ProcessingStats::new();
            let probe = ProbeResult::unreachable("https://x.test", ErrorType::HttpRequestTimeoutError);
            let record = assemble(AssemblyInput::from_probe(&probe, None, Utc::now()));
            record_stats(&stats, &record);
            assert_eq!(stats.get_error_count(ErrorType::HttpRequestTimeoutError), 1);
            assert_eq!(stats.total_warnings(), 0);
        }
    }
}
