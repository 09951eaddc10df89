use std::path::PathBuf;
use thiserror::Error;

/// Custom error types for vidcat
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to start {tool}: {source}")]
    CommandStart {
        tool: String,
        source: std::io::Error,
    },

    #[error("{tool} timed out after {seconds} seconds")]
    CommandTimeout { tool: String, seconds: u64 },

    #[error("no duration found in probe output for {0}")]
    DurationNotFound(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid path: {0}")]
    InvalidPath(String),

    #[error("report not writable at {} or fallback {}", .primary.display(), .fallback.display())]
    ReportUnwritable { primary: PathBuf, fallback: PathBuf },

    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Result type for vidcat operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;
