//! Timestamp resolution for cataloged files.
//!
//! Derives a human-readable creation timestamp from file metadata. The
//! resolution is capability-checked rather than platform-branched: creation
//! time is preferred wherever the file system exposes it, with last
//! modification time as the fallback. One format is used everywhere.

use chrono::{DateTime, Local};
use std::fs::Metadata;
use std::time::SystemTime;

/// Display format for resolved file timestamps.
pub const TIMESTAMP_FORMAT: &str = "%d-%m-%Y, %H:%M";

/// Resolves a display timestamp for a file from its metadata.
///
/// Prefers the creation time when the underlying file system reports one,
/// falling back to the last modification time. This function does not fail:
/// if the platform exposes neither timestamp, a placeholder is returned.
#[must_use]
pub fn resolve_timestamp(metadata: &Metadata) -> String {
    metadata
        .created()
        .or_else(|_| metadata.modified())
        .map(format_system_time)
        .unwrap_or_else(|_| "-".to_string())
}

/// Formats a [`SystemTime`] using [`TIMESTAMP_FORMAT`] in local time.
#[must_use]
pub fn format_system_time(time: SystemTime) -> String {
    DateTime::<Local>::from(time).format(TIMESTAMP_FORMAT).to_string()
}
