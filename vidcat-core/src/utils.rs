//! Utility functions for formatting and path manipulation.
//!
//! This module provides general-purpose helpers used throughout the
//! vidcat-core library: duration formatting, size formatting, and
//! timestamp-suffixed path derivation.

use std::path::{Path, PathBuf};

/// Formats seconds as HH:MM:SS (e.g., 3725.0 -> "01:02:05"). Returns "??:??:??" for invalid inputs.
#[must_use]
pub fn format_duration(seconds: f64) -> String {
    if seconds < 0.0 || !seconds.is_finite() {
        return "??:??:??".to_string();
    }

    let total_seconds = seconds as u64;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let secs = total_seconds % 60;
    format!("{hours:02}:{minutes:02}:{secs:02}")
}

/// Formats a byte count as megabytes with two decimal digits (e.g., 2097152 -> "2.00").
#[must_use]
pub fn format_size_mb(bytes: u64) -> String {
    const MIB: f64 = 1024.0 * 1024.0;
    format!("{:.2}", bytes as f64 / MIB)
}

/// Derives a sibling path with a local timestamp inserted before the extension.
///
/// `metadata.csv` becomes `metadata_06-30-2024_12-30-45.csv`. Used both for
/// default report naming and for the write-fallback path when the primary
/// report location is not writable.
#[must_use]
pub fn timestamped_path(path: &Path) -> PathBuf {
    let stamp = chrono::Local::now().format("%m-%d-%Y_%H-%M-%S");
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match path.extension() {
        Some(ext) => format!("{}_{}.{}", stem, stamp, ext.to_string_lossy()),
        None => format!("{stem}_{stamp}"),
    };
    path.with_file_name(name)
}
