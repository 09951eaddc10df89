//! Core library for cataloging video file metadata.
//!
//! This crate walks a directory tree, probes each video file's playback
//! duration through an external ffmpeg process, resolves per-file
//! timestamps, and writes the collected metadata to a CSV report.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use vidcat_core::{catalog_videos, CoreConfig};
//! use std::path::PathBuf;
//!
//! let config = CoreConfig::new(
//!     PathBuf::from("/path/to/videos"),
//!     PathBuf::from("metadata.csv"),
//! );
//! let summary = catalog_videos(&config).unwrap();
//! println!(
//!     "{} file(s) cataloged, {} skipped, report at {}",
//!     summary.outcome.records.len(),
//!     summary.outcome.skipped.len(),
//!     summary.report_path.display(),
//! );
//! ```

pub mod config;
pub mod error;
pub mod probe;
pub mod report;
pub mod scanner;
pub mod timestamp;
pub mod utils;

// Re-exports for public API
pub use config::{CoreConfig, DEFAULT_ALLOWED_FORMATS, DEFAULT_PROBE_TIMEOUT_SECS};
pub use error::{CoreError, CoreResult};
pub use probe::{DurationProbe, FfmpegDurationProbe, MediaDuration};
pub use report::{write_report, REPORT_HEADER};
pub use scanner::{scan_directory, FileRecord, ScanOutcome, SkippedEntry};
pub use timestamp::{resolve_timestamp, TIMESTAMP_FORMAT};
pub use utils::{format_duration, format_size_mb, timestamped_path};

use std::path::PathBuf;
use std::time::Duration;

/// Result of a full catalog run.
#[derive(Debug, Clone)]
pub struct CatalogSummary {
    /// Accepted records and skipped files from the scan.
    pub outcome: ScanOutcome,
    /// Where the report actually landed (primary path or fallback).
    pub report_path: PathBuf,
}

/// Scans the configured directory and writes the CSV report.
///
/// This is the top-level orchestration: validate the configuration, scan
/// with an ffmpeg-backed probe, then write all accepted records. A report
/// is written even when no files were accepted, so an empty scan still
/// yields a header-only CSV.
pub fn catalog_videos(config: &CoreConfig) -> CoreResult<CatalogSummary> {
    config.validate()?;

    let probe = FfmpegDurationProbe::new(
        config.probe_tool.clone(),
        Duration::from_secs(config.probe_timeout_secs),
    );
    let outcome = scan_directory(&config.input_dir, &config.allowed_formats, &probe)?;
    let report_path = write_report(&outcome.records, &config.output_path)?;

    Ok(CatalogSummary {
        outcome,
        report_path,
    })
}
