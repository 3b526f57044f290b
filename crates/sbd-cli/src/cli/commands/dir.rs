//! `sbd dir <project>` – download a project into a directory tree.

use anyhow::Result;
use sbd_core::config::SbdConfig;
use sbd_core::snapshot::{self, SnapshotRequest};
use std::path::PathBuf;

/// Fetch the project and write its files under the output directory
/// (default: the project identifier in the current directory).
pub fn run_dir(cfg: &SbdConfig, request: &SnapshotRequest, output: Option<PathBuf>) -> Result<()> {
    let ident = snapshot::resolve_identifier(&request.project)?;
    let root = output.unwrap_or_else(|| PathBuf::from(&ident));
    let written = snapshot::snapshot_to_dir(request, cfg, &root, None)?;
    println!("Wrote project files under {}", written.display());
    Ok(())
}
