//! Duration probing via an external media-inspection tool.
//!
//! The probe spawns `ffmpeg -i <file>` and scans the combined output text
//! for the duration announcement in the stream summary. The tool's exit
//! status is not a success signal: ffmpeg exits non-zero when invoked with
//! an input and no output, yet still prints the summary we need.

use once_cell::sync::Lazy;
use regex::Regex;
use std::io::Read;
use std::path::Path;
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use crate::error::{CoreError, CoreResult};

/// First `Duration: H:MM:SS.ss` occurrence in the probe output.
static DURATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Duration:\s*(\d+):(\d{2}):(\d{2}\.\d+)").expect("valid duration pattern")
});

/// Poll interval while waiting for the probe process to exit.
const WAIT_POLL: Duration = Duration::from_millis(50);

/// Playback duration reported by a probe, split into clock components.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MediaDuration {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: f64,
    pub total_secs: f64,
}

impl MediaDuration {
    /// The zero duration substituted when probing fails.
    pub const ZERO: MediaDuration = MediaDuration {
        hours: 0,
        minutes: 0,
        seconds: 0.0,
        total_secs: 0.0,
    };

    /// Builds a duration from clock components, computing the total.
    #[must_use]
    pub fn from_parts(hours: u32, minutes: u32, seconds: f64) -> Self {
        let total_secs = seconds + 60.0 * f64::from(minutes) + 3600.0 * f64::from(hours);
        Self {
            hours,
            minutes,
            seconds,
            total_secs,
        }
    }
}

/// Source of playback durations for scanned files.
///
/// The scanner only depends on this trait, so tests can substitute a
/// deterministic implementation instead of spawning the real tool.
pub trait DurationProbe {
    fn probe(&self, path: &Path) -> CoreResult<MediaDuration>;
}

/// Probe implementation that shells out to ffmpeg.
pub struct FfmpegDurationProbe {
    tool: String,
    timeout: Duration,
}

impl FfmpegDurationProbe {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    pub fn new(tool: impl Into<String>, timeout: Duration) -> Self {
        Self {
            tool: tool.into(),
            timeout,
        }
    }
}

impl Default for FfmpegDurationProbe {
    fn default() -> Self {
        Self::new("ffmpeg", Self::DEFAULT_TIMEOUT)
    }
}

impl DurationProbe for FfmpegDurationProbe {
    /// Runs `<tool> -i <path>` and parses the duration from its output.
    ///
    /// Both output streams are drained on reader threads while the child is
    /// awaited with a bounded poll loop; a child still running once the
    /// timeout expires is killed and reaped before the error is returned.
    fn probe(&self, path: &Path) -> CoreResult<MediaDuration> {
        log::debug!("Probing duration of {} with {}", path.display(), self.tool);

        let mut child = Command::new(&self.tool)
            .arg("-i")
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| CoreError::CommandStart {
                tool: self.tool.clone(),
                source: e,
            })?;

        let mut stdout = child.stdout.take().unwrap();
        let mut stderr = child.stderr.take().unwrap();
        let stdout_handle = thread::spawn(move || {
            let mut buf = Vec::new();
            let _ = stdout.read_to_end(&mut buf);
            buf
        });
        let stderr_handle = thread::spawn(move || {
            let mut buf = Vec::new();
            let _ = stderr.read_to_end(&mut buf);
            buf
        });

        let start = Instant::now();
        let status = loop {
            match child.try_wait() {
                Ok(Some(status)) => break status,
                Ok(None) => {
                    if start.elapsed() >= self.timeout {
                        let _ = child.kill();
                        let _ = child.wait();
                        let _ = stdout_handle.join();
                        let _ = stderr_handle.join();
                        return Err(CoreError::CommandTimeout {
                            tool: self.tool.clone(),
                            seconds: self.timeout.as_secs(),
                        });
                    }
                    thread::sleep(WAIT_POLL);
                }
                Err(e) => {
                    let _ = child.kill();
                    let _ = child.wait();
                    let _ = stdout_handle.join();
                    let _ = stderr_handle.join();
                    return Err(CoreError::Io(e));
                }
            }
        };
        log::debug!("{} exited with {} for {}", self.tool, status, path.display());

        // Combined stream: the summary normally lands on stderr, but the
        // contract is textual, not stream-specific.
        let mut combined = stdout_handle.join().unwrap_or_default();
        combined.extend(stderr_handle.join().unwrap_or_default());
        let text = String::from_utf8_lossy(&combined);

        parse_duration(&text)
            .ok_or_else(|| CoreError::DurationNotFound(path.display().to_string()))
    }
}

/// Parses the first duration announcement out of probe output text.
#[must_use]
pub fn parse_duration(output: &str) -> Option<MediaDuration> {
    let caps = DURATION_RE.captures(output)?;
    let hours: u32 = caps[1].parse().ok()?;
    let minutes: u32 = caps[2].parse().ok()?;
    let seconds: f64 = caps[3].parse().ok()?;
    Some(MediaDuration::from_parts(hours, minutes, seconds))
}
