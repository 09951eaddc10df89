//! Directory scanning and per-file metadata assembly.
//!
//! Walks a directory tree, filters files by extension against the allowed
//! set, and assembles one [`FileRecord`] per accepted file. Per-file
//! failures are isolated: an unreadable entry is logged and dropped, a
//! failed duration probe is logged and zero-filled. Only a root path that
//! is not a directory aborts the scan.

use serde::Serialize;
use std::collections::HashSet;
use std::path::Path;
use walkdir::WalkDir;

use crate::error::{CoreError, CoreResult};
use crate::probe::{DurationProbe, MediaDuration};
use crate::timestamp::resolve_timestamp;
use crate::utils::{format_duration, format_size_mb};

/// Metadata row for one accepted file.
///
/// Fields are kept in their display form; the order matches the report
/// header columns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileRecord {
    /// 1-based position in discovery order.
    pub index: u64,
    pub path: String,
    pub name: String,
    pub created: String,
    pub duration: String,
    pub size_mb: String,
}

/// A file whose extension is not in the allowed set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedEntry {
    pub path: String,
    pub extension: String,
}

/// Everything a scan produced: accepted records plus skipped files.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanOutcome {
    pub records: Vec<FileRecord>,
    pub skipped: Vec<SkippedEntry>,
}

/// Recursively scans `root` and assembles metadata for accepted files.
///
/// Every regular file under `root` is visited exactly once, in file-name
/// order within each directory so repeated scans of an unchanged tree
/// produce identical output. Files whose extension (the substring after the
/// last `.`, compared case-insensitively) is not in `allowed_formats` are
/// routed to the skipped list. For accepted files the duration is taken
/// from `probe`; a probe failure is logged and recorded as a zero duration
/// so the file stays visible in the report.
///
/// # Errors
///
/// Returns [`CoreError::InvalidPath`] if `root` is not a directory. All
/// per-file failures are tolerated and logged instead.
pub fn scan_directory(
    root: &Path,
    allowed_formats: &[String],
    probe: &dyn DurationProbe,
) -> CoreResult<ScanOutcome> {
    if !root.is_dir() {
        return Err(CoreError::InvalidPath(format!(
            "{} is not a directory",
            root.display()
        )));
    }

    // "mp4" != "MP4": the comparison set is lower-cased once up front.
    let allowed: HashSet<String> = allowed_formats.iter().map(|f| f.to_lowercase()).collect();

    let mut records = Vec::new();
    let mut skipped = Vec::new();
    let mut index: u64 = 0;

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("Failed to read directory entry under {}: {}", root.display(), e);
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let metadata = match entry.metadata() {
            Ok(metadata) => metadata,
            Err(e) => {
                // Appears in neither list, matching the tolerant-stat policy.
                log::warn!("Failed to get information for {}: {}", entry.path().display(), e);
                continue;
            }
        };

        let name = entry.file_name().to_string_lossy().into_owned();
        let path = entry.path().display().to_string();
        // A dot-less name is its own "extension" and never matches a format.
        let extension = name
            .rsplit('.')
            .next()
            .unwrap_or(name.as_str())
            .to_string();

        if !allowed.contains(&extension.to_lowercase()) {
            skipped.push(SkippedEntry { path, extension });
            continue;
        }

        let duration = match probe.probe(entry.path()) {
            Ok(duration) => duration,
            Err(e) => {
                log::warn!("Duration probe failed for {}: {}", entry.path().display(), e);
                MediaDuration::ZERO
            }
        };

        index += 1;
        let record = FileRecord {
            index,
            path,
            name,
            created: resolve_timestamp(&metadata),
            duration: format_duration(duration.total_secs),
            size_mb: format_size_mb(metadata.len()),
        };
        log::info!(
            "[{}] {} ({} Mb, {})",
            record.index,
            record.path,
            record.size_mb,
            record.duration
        );
        records.push(record);
    }

    Ok(ScanOutcome { records, skipped })
}
