// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

//! CLI frontend: reads the archive, runs the pipeline, writes to a directory

use clap::Parser;
use mbox_extract::{Exporter, FileWriter, group_into_threads, parse_mbox, read_archive};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "mbox-extract", version, about = "Extract email threads from an MBOX archive")]
struct Cli {
    /// Path to the MBOX archive
    mbox: PathBuf,

    /// Destination directory for exported files
    #[arg(short, long, default_value = ".")]
    output: PathBuf,

    /// Also write one file per individual message
    #[arg(long)]
    messages: bool,

    /// Print the final status as JSON
    #[arg(long)]
    json: bool,
}

/// Writes files into a fixed destination directory.
struct DirWriter {
    dir: PathBuf,
}

impl FileWriter for DirWriter {
    fn write(&mut self, filename: &str, content: &str) -> std::io::Result<()> {
        fs::write(self.dir.join(filename), content)
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let content = match read_archive(&cli.mbox) {
        Ok(content) => content,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let threads = group_into_threads(parse_mbox(&content));

    let mut writer = DirWriter { dir: cli.output };
    let status = Exporter::new(&mut writer, cli.messages).export(&threads);

    if cli.json {
        match serde_json::to_string_pretty(&status) {
            Ok(json) => println!("{json}"),
            Err(e) => eprintln!("could not encode status: {e}"),
        }
    } else {
        println!(
            "{} threads, {} messages, {} files written",
            status.threads, status.messages, status.files_written
        );
        for failure in &status.failures {
            eprintln!("write failed: {} ({})", failure.filename, failure.reason);
        }
    }

    if status.is_clean() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
