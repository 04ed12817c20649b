//! CLI entry point for the honors data.
//!
//! # Responsibility
//! - Print the honor list as JSON for the web build, or write it to a file.
//! - Keep output deterministic for quick local sanity checks.

use clap::Parser;
use honors_core::{all_honors, core_version, default_log_level, init_logging, write_json};
use log::info;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::process::ExitCode;

/// Export the competition honors list as JSON.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Write JSON to this file instead of stdout
    #[arg(long)]
    out: Option<PathBuf>,

    /// Absolute directory for rolling log files
    #[arg(long)]
    log_dir: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("honors_cli: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    if let Some(log_dir) = &cli.log_dir {
        init_logging(default_log_level(), log_dir).map_err(|err| err.to_string())?;
    }

    let records = all_honors();
    eprintln!("honors_core version={}", core_version());
    eprintln!("honors count={}", records.len());

    match &cli.out {
        Some(path) => {
            let file = File::create(path)
                .map_err(|err| format!("failed to create `{}`: {err}", path.display()))?;
            write_json(BufWriter::new(file), records, true).map_err(|err| err.to_string())?;
            info!(
                "event=honors_export module=cli status=ok count={} path={}",
                records.len(),
                path.display()
            );
        }
        None => {
            write_json(std::io::stdout().lock(), records, true).map_err(|err| err.to_string())?;
        }
    }
    Ok(())
}
