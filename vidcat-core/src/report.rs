//! CSV report writing.
//!
//! Serializes accumulated file records into a comma-separated report with a
//! fixed header row. If the target path is not writable due to permissions,
//! the writer retries exactly once against a timestamp-suffixed sibling
//! path before giving up.

use std::fs::File;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{CoreError, CoreResult};
use crate::scanner::FileRecord;
use crate::utils::timestamped_path;

/// Column headers of the report, in record field order.
pub const REPORT_HEADER: [&str; 6] = [
    "N",
    "Path",
    "Name",
    "Date",
    "Duration (hh:mm:ss)",
    "Size (Mb)",
];

/// Writes one row per record to `output_path`, returning the path actually
/// written (the original, or the fallback if the original was unwritable).
///
/// # Errors
///
/// Returns [`CoreError::ReportUnwritable`] when neither the primary path nor
/// its derived fallback can be created. Other I/O and CSV failures propagate
/// unchanged; there is no partial-write recovery.
pub fn write_report(records: &[FileRecord], output_path: &Path) -> CoreResult<PathBuf> {
    let (file, written_path) = open_report_file(output_path)?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);
    writer.write_record(REPORT_HEADER)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    Ok(written_path)
}

/// Opens the report file, falling back once on permission denial.
fn open_report_file(path: &Path) -> CoreResult<(File, PathBuf)> {
    match File::create(path) {
        Ok(file) => Ok((file, path.to_path_buf())),
        Err(e) if e.kind() == ErrorKind::PermissionDenied => {
            let fallback = timestamped_path(path);
            log::warn!(
                "{} is not writable ({}), retrying as {}",
                path.display(),
                e,
                fallback.display()
            );
            match File::create(&fallback) {
                Ok(file) => Ok((file, fallback)),
                Err(_) => Err(CoreError::ReportUnwritable {
                    primary: path.to_path_buf(),
                    fallback,
                }),
            }
        }
        Err(e) => Err(e.into()),
    }
}
