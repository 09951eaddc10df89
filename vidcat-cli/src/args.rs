use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Vidcat: Video file metadata catalog",
    long_about = "Recursively catalogs video files under a directory and writes \
                 their metadata (path, date, duration, size) to a CSV report. \
                 Durations are probed with ffmpeg."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable detailed logging output")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scans a directory tree and writes a CSV metadata report
    Scan(ScanArgs),
}

#[derive(Parser, Debug)]
pub struct ScanArgs {
    /// Directory containing the video files to catalog
    #[arg(required = true, value_name = "INPUT_DIR")]
    pub input_dir: PathBuf,

    /// Output CSV path (defaults to metadata_<timestamp>.csv in the working directory)
    #[arg(value_name = "OUTPUT_CSV")]
    pub output: Option<PathBuf>,

    /// Comma-separated video extensions to accept (e.g. mp4,mkv,avi)
    #[arg(long, value_delimiter = ',', value_name = "EXTS")]
    pub formats: Option<Vec<String>>,

    /// Seconds to wait for a duration probe before killing it
    #[arg(long, value_name = "SECS")]
    pub probe_timeout: Option<u64>,

    /// Probe binary to invoke instead of ffmpeg on PATH
    #[arg(long, value_name = "PATH")]
    pub ffmpeg: Option<String>,
}
