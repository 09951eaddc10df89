// vidcat-core/tests/scanner_tests.rs

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tempfile::tempdir;
use vidcat_core::error::{CoreError, CoreResult};
use vidcat_core::probe::{DurationProbe, MediaDuration};
use vidcat_core::scanner::scan_directory;

/// Probe returning a fixed duration for every file.
struct FixedProbe(f64);

impl DurationProbe for FixedProbe {
    fn probe(&self, _path: &Path) -> CoreResult<MediaDuration> {
        Ok(MediaDuration::from_parts(0, 0, self.0))
    }
}

/// Probe that fails for every file, as a mislabeled non-media file would.
struct FailingProbe;

impl DurationProbe for FailingProbe {
    fn probe(&self, path: &Path) -> CoreResult<MediaDuration> {
        Err(CoreError::DurationNotFound(path.display().to_string()))
    }
}

fn formats(exts: &[&str]) -> Vec<String> {
    exts.iter().map(|e| e.to_string()).collect()
}

#[test]
fn test_scan_partitions_files_by_extension() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let root = dir.path();

    File::create(root.join("alpha.mp4"))?;
    File::create(root.join("beta.MKV"))?; // case-insensitive match
    File::create(root.join("notes.txt"))?;
    fs::create_dir(root.join("nested"))?;
    File::create(root.join("nested").join("gamma.avi"))?;
    File::create(root.join("nested").join("cover.jpg"))?;

    let outcome = scan_directory(root, &formats(&["mp4", "mkv", "avi"]), &FixedProbe(60.0))?;

    let record_names: Vec<&str> = outcome.records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(outcome.records.len(), 3);
    assert!(record_names.contains(&"alpha.mp4"));
    assert!(record_names.contains(&"beta.MKV"));
    assert!(record_names.contains(&"gamma.avi"));

    let skipped_paths: Vec<&str> = outcome.skipped.iter().map(|s| s.path.as_str()).collect();
    assert_eq!(outcome.skipped.len(), 2);
    assert!(skipped_paths.iter().any(|p| p.ends_with("notes.txt")));
    assert!(skipped_paths.iter().any(|p| p.ends_with("cover.jpg")));

    // No file appears in both lists
    for record in &outcome.records {
        assert!(!skipped_paths.contains(&record.path.as_str()));
    }

    dir.close()?;
    Ok(())
}

#[test]
fn test_scan_indices_are_gap_free_from_one() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let root = dir.path();

    for name in ["a.mp4", "b.txt", "c.mp4", "d.jpg", "e.mp4"] {
        File::create(root.join(name))?;
    }

    let outcome = scan_directory(root, &formats(&["mp4"]), &FixedProbe(1.0))?;

    assert_eq!(outcome.records.len(), 3);
    for (position, record) in outcome.records.iter().enumerate() {
        assert_eq!(record.index, position as u64 + 1);
    }

    dir.close()?;
    Ok(())
}

#[test]
fn test_probe_failure_zero_fills_instead_of_dropping() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let root = dir.path();

    // A text file mislabeled with a video extension
    fs::write(root.join("fake.mp4"), b"not really a video")?;

    let outcome = scan_directory(root, &formats(&["mp4"]), &FailingProbe)?;

    assert_eq!(outcome.records.len(), 1);
    assert_eq!(outcome.records[0].duration, "00:00:00");
    assert!(outcome.skipped.is_empty());

    dir.close()?;
    Ok(())
}

#[test]
fn test_scan_reports_size_in_megabytes() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let root = dir.path();

    let file = File::create(root.join("sized.mp4"))?;
    file.set_len(2_097_152)?; // exactly 2 MiB

    let outcome = scan_directory(root, &formats(&["mp4"]), &FixedProbe(1.0))?;

    assert_eq!(outcome.records.len(), 1);
    assert_eq!(outcome.records[0].size_mb, "2.00");

    dir.close()?;
    Ok(())
}

#[test]
fn test_scan_is_idempotent_on_unchanged_tree() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let root = dir.path();

    File::create(root.join("one.mp4"))?;
    File::create(root.join("two.mkv"))?;
    File::create(root.join("three.txt"))?;
    fs::create_dir(root.join("sub"))?;
    File::create(root.join("sub").join("four.mp4"))?;

    let allowed = formats(&["mp4", "mkv"]);
    let first = scan_directory(root, &allowed, &FixedProbe(10.0))?;
    let second = scan_directory(root, &allowed, &FixedProbe(10.0))?;

    assert_eq!(first.records, second.records);
    assert_eq!(first.skipped, second.skipped);

    dir.close()?;
    Ok(())
}

#[test]
fn test_scan_skips_dotless_file_with_name_as_extension() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let root = dir.path();

    File::create(root.join("README"))?;

    let outcome = scan_directory(root, &formats(&["mp4"]), &FixedProbe(1.0))?;

    assert!(outcome.records.is_empty());
    assert_eq!(outcome.skipped.len(), 1);
    assert_eq!(outcome.skipped[0].extension, "README");

    dir.close()?;
    Ok(())
}

#[test]
fn test_scan_rejects_non_directory_root() {
    let root = PathBuf::from("surely_this_does_not_exist_42_integration");
    let result = scan_directory(&root, &formats(&["mp4"]), &FixedProbe(1.0));
    match result {
        Err(CoreError::InvalidPath(_)) => {}
        other => panic!("Unexpected result: {other:?}"),
    }
}
