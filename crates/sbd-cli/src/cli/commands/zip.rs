//! `sbd zip <project>` – download a project and write it as a zip archive.

use anyhow::Result;
use sbd_core::checksum;
use sbd_core::config::SbdConfig;
use sbd_core::snapshot::{self, SnapshotRequest};
use std::path::PathBuf;

/// Fetch, package, and save the archive; print the output path.
pub fn run_zip(
    cfg: &SbdConfig,
    request: &SnapshotRequest,
    output: Option<PathBuf>,
    print_checksum: bool,
) -> Result<()> {
    let artifact = snapshot::snapshot_to_archive(request, cfg, None)?;
    let path = output.unwrap_or_else(|| PathBuf::from(artifact.filename()));
    artifact.write_to(&path)?;
    println!("Wrote {} ({} bytes)", path.display(), artifact.len());
    if print_checksum {
        let digest = checksum::sha256_bytes(artifact.as_bytes());
        println!("{}  {}", digest, path.display());
    }
    Ok(())
}
