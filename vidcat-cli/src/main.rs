// vidcat-cli/src/main.rs
//
// Command-line interface for the vidcat metadata catalog. Responsibilities:
// - Parsing arguments (`scan` subcommand)
// - Setting up env_logger-backed logging
// - Assembling the core configuration from arguments and defaults
// - Invoking vidcat_core::catalog_videos and summarizing the outcome
// - Managing the process exit code

use clap::Parser;
use std::path::Path;
use std::process;

use vidcat_core::{CoreConfig, CoreError, CoreResult};

mod args;
use args::{Cli, Commands, ScanArgs};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Scan(scan_args) => run_scan(scan_args),
    };

    if let Err(e) = result {
        log::error!("{e}");
        process::exit(1);
    }
}

/// Initializes logging at info level (debug with --verbose); RUST_LOG overrides.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn run_scan(args: ScanArgs) -> CoreResult<()> {
    let input_dir = args.input_dir.canonicalize().map_err(|e| {
        CoreError::InvalidPath(format!(
            "invalid input path '{}': {}",
            args.input_dir.display(),
            e
        ))
    })?;
    let output = args
        .output
        .unwrap_or_else(|| vidcat_core::timestamped_path(Path::new("metadata.csv")));

    let mut config = CoreConfig::new(input_dir, output);
    if let Some(formats) = args.formats {
        config.allowed_formats = formats;
    }
    if let Some(timeout) = args.probe_timeout {
        config.probe_timeout_secs = timeout;
    }
    if let Some(tool) = args.ffmpeg {
        config.probe_tool = tool;
    }

    log::info!("Vidcat scan started: {}", chrono::Local::now().format("%d-%m-%Y, %H:%M"));
    log::info!("Input path: {}", config.input_dir.display());

    let summary = vidcat_core::catalog_videos(&config)?;

    log::info!(
        "Cataloged {} file(s), skipped {}.",
        summary.outcome.records.len(),
        summary.outcome.skipped.len()
    );
    for entry in &summary.outcome.skipped {
        log::debug!("Skipped {} ({})", entry.path, entry.extension);
    }
    log::info!("Report written to {}", summary.report_path.display());

    Ok(())
}
