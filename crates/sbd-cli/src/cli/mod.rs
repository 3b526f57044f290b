//! CLI for the SBD project snapshot tool.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use sbd_core::config;
use sbd_core::logging;
use sbd_core::snapshot::SnapshotRequest;
use std::path::PathBuf;
use std::time::Duration;

use commands::{run_checksum, run_completions, run_dir, run_zip};

/// Top-level CLI for the SBD project snapshot tool.
#[derive(Debug, Parser)]
#[command(name = "sbd")]
#[command(
    about = "SBD: snapshot remote editor projects as zip archives or directory trees",
    long_about = None
)]
pub struct Cli {
    /// Log debug detail to stderr instead of the state-dir log file.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Download a project and package it as a zip archive.
    Zip {
        /// Edit URL or bare project identifier.
        project: String,

        /// Output path for the archive (default: ./<identifier>.zip).
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the SHA-256 of the archive after writing it.
        #[arg(long)]
        checksum: bool,

        /// Transfer deadline in seconds (default from config).
        #[arg(long, value_name = "SECS")]
        timeout_secs: Option<u64>,

        /// Per-file size ceiling in bytes (default from config).
        #[arg(long, value_name = "BYTES")]
        max_file_bytes: Option<u64>,

        /// Total size ceiling in bytes (default from config).
        #[arg(long, value_name = "BYTES")]
        max_total_bytes: Option<u64>,
    },

    /// Download a project and write its files under a directory.
    Dir {
        /// Edit URL or bare project identifier.
        project: String,

        /// Output directory (default: ./<identifier>).
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Transfer deadline in seconds (default from config).
        #[arg(long, value_name = "SECS")]
        timeout_secs: Option<u64>,

        /// Per-file size ceiling in bytes (default from config).
        #[arg(long, value_name = "BYTES")]
        max_file_bytes: Option<u64>,

        /// Total size ceiling in bytes (default from config).
        #[arg(long, value_name = "BYTES")]
        max_total_bytes: Option<u64>,
    },

    /// Compute SHA-256 of a file (e.g. a previously written archive).
    Checksum {
        /// Path to the file.
        path: PathBuf,
    },

    /// Generate shell completions on stdout.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

fn request(
    project: String,
    timeout_secs: Option<u64>,
    max_file_bytes: Option<u64>,
    max_total_bytes: Option<u64>,
) -> SnapshotRequest {
    let mut request = SnapshotRequest::new(project);
    request.timeout = timeout_secs.map(Duration::from_secs);
    request.max_file_size = max_file_bytes;
    request.max_total_size = max_total_bytes;
    request
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        if cli.verbose || logging::init_logging(false).is_err() {
            logging::init_logging_stderr(cli.verbose);
        }

        match cli.command {
            CliCommand::Zip {
                project,
                output,
                checksum,
                timeout_secs,
                max_file_bytes,
                max_total_bytes,
            } => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                let request = request(project, timeout_secs, max_file_bytes, max_total_bytes);
                run_zip(&cfg, &request, output, checksum)?;
            }
            CliCommand::Dir {
                project,
                output,
                timeout_secs,
                max_file_bytes,
                max_total_bytes,
            } => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                let request = request(project, timeout_secs, max_file_bytes, max_total_bytes);
                run_dir(&cfg, &request, output)?;
            }
            CliCommand::Checksum { path } => run_checksum(&path)?,
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}
