//! Configuration for a catalog run.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{CoreError, CoreResult};

/// Extensions treated as video content when no override is given.
pub const DEFAULT_ALLOWED_FORMATS: [&str; 8] =
    ["mp4", "mkv", "flv", "wmv", "avi", "mpg", "mpeg", "mpeg4"];

/// Default bound on a single duration probe.
pub const DEFAULT_PROBE_TIMEOUT_SECS: u64 = 30;

/// Configuration for vidcat
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoreConfig {
    /// Directory scanned for video files
    pub input_dir: PathBuf,

    /// Path the CSV report is written to
    pub output_path: PathBuf,

    /// Extensions accepted as video content (case-insensitive)
    #[serde(default = "default_allowed_formats")]
    pub allowed_formats: Vec<String>,

    /// External tool invoked as `<tool> -i <file>` for duration probing
    #[serde(default = "default_probe_tool")]
    pub probe_tool: String,

    /// Seconds to wait for a probe before killing it
    #[serde(default = "default_probe_timeout_secs")]
    pub probe_timeout_secs: u64,
}

fn default_allowed_formats() -> Vec<String> {
    DEFAULT_ALLOWED_FORMATS.iter().map(|s| s.to_string()).collect()
}

fn default_probe_tool() -> String {
    "ffmpeg".to_string()
}

fn default_probe_timeout_secs() -> u64 {
    DEFAULT_PROBE_TIMEOUT_SECS
}

impl CoreConfig {
    /// Creates a configuration with default formats, tool, and timeout.
    pub fn new(input_dir: PathBuf, output_path: PathBuf) -> Self {
        Self {
            input_dir,
            output_path,
            allowed_formats: default_allowed_formats(),
            probe_tool: default_probe_tool(),
            probe_timeout_secs: default_probe_timeout_secs(),
        }
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> CoreResult<()> {
        if !self.input_dir.is_dir() {
            return Err(CoreError::Config(format!(
                "input directory not found: {}",
                self.input_dir.display()
            )));
        }

        if self.allowed_formats.is_empty() {
            return Err(CoreError::Config(
                "at least one allowed format is required".to_string(),
            ));
        }

        if self.probe_tool.is_empty() {
            return Err(CoreError::Config("probe tool must not be empty".to_string()));
        }

        if self.probe_timeout_secs == 0 {
            return Err(CoreError::Config(
                "probe timeout must be at least one second".to_string(),
            ));
        }

        Ok(())
    }
}
