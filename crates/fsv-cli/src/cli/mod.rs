//! CLI for the fsv file-server validation harness.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use fsv_core::config;
use std::path::PathBuf;

use commands::{run_checksum, run_download, run_list, run_special, run_suite};

/// Top-level CLI for the fsv validation harness.
#[derive(Debug, Parser)]
#[command(name = "fsv")]
#[command(about = "fsv: validation harness for file-serving HTTP endpoints", long_about = None)]
pub struct Cli {
    /// Base URL of the server under test (overrides the config file).
    #[arg(long, global = true, value_name = "URL")]
    pub server_url: Option<String>,

    /// Directory downloaded test files are written into (overrides the config file).
    #[arg(long, global = true, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Run the full validation suite: connect, list, download every file,
    /// probe special-character names, print a summary.
    Run,

    /// Fetch and print the server's file listing.
    List,

    /// Download and verify a single file by its listed name.
    Download {
        /// Filename exactly as it appears in the listing.
        filename: String,
    },

    /// Probe special-character filenames only.
    Special,

    /// Compute SHA-256 of a local file (e.g. a saved download).
    Checksum {
        /// Path to the file.
        path: PathBuf,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let mut cfg = config::load_or_init()?;
        if let Some(url) = cli.server_url {
            cfg.server_url = url;
        }
        if let Some(dir) = cli.output_dir {
            cfg.output_dir = dir;
        }
        tracing::debug!("config: {:?}", cfg);

        match cli.command {
            CliCommand::Run => run_suite(&cfg)?,
            CliCommand::List => run_list(&cfg)?,
            CliCommand::Download { filename } => run_download(&cfg, &filename)?,
            CliCommand::Special => run_special(&cfg)?,
            CliCommand::Checksum { path } => run_checksum(&path)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
