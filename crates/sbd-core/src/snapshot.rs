//! Pipeline driver and host-facing API.
//!
//! Both terminal modes share one fetch → sanitize → guard loop feeding a
//! pluggable `Sink`; the only difference is which sink consumes the entries
//! and what the finished value is.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::budget::TransferBudget;
use crate::config::SbdConfig;
use crate::control::AbortHandle;
use crate::error::SnapshotError;
use crate::fetch::{self, RemoteFile};
use crate::sanitize;
use crate::sink::{ArchiveArtifact, ArchiveSink, DirSink, Sink};
use crate::url_model;

/// One snapshot invocation: the project to fetch plus optional per-call
/// overrides of the configured limits. Created fresh per call; never reused.
#[derive(Debug, Clone)]
pub struct SnapshotRequest {
    /// Edit URL or bare project identifier.
    pub project: String,
    /// Transfer deadline override.
    pub timeout: Option<Duration>,
    /// Per-file byte ceiling override.
    pub max_file_size: Option<u64>,
    /// Cumulative byte ceiling override.
    pub max_total_size: Option<u64>,
}

impl SnapshotRequest {
    pub fn new(project: impl Into<String>) -> Self {
        Self {
            project: project.into(),
            timeout: None,
            max_file_size: None,
            max_total_size: None,
        }
    }

    fn timeout(&self, cfg: &SbdConfig) -> Duration {
        self.timeout
            .unwrap_or(Duration::from_secs(cfg.timeout_secs))
    }

    fn budget(&self, cfg: &SbdConfig) -> TransferBudget {
        TransferBudget::new(
            self.max_file_size.unwrap_or(cfg.max_file_size_bytes),
            self.max_total_size.unwrap_or(cfg.max_total_size_bytes),
        )
    }
}

/// Resolves the request's project field. Values carrying the `/edit/` marker
/// are parsed as edit URLs; anything else is taken as a bare identifier.
/// Either way the fetcher's charset gate still applies before any request.
pub fn resolve_identifier(project: &str) -> Result<String, SnapshotError> {
    if project.contains(url_model::EDIT_MARKER) {
        url_model::extract_project_id(project)
    } else {
        Ok(project.to_string())
    }
}

/// Fetches the project and packages the accepted entries as an in-memory
/// zip artifact named `<identifier>.zip`.
pub fn snapshot_to_archive(
    request: &SnapshotRequest,
    cfg: &SbdConfig,
    abort: Option<&AbortHandle>,
) -> Result<ArchiveArtifact, SnapshotError> {
    let ident = resolve_identifier(&request.project)?;
    let files = fetch::fetch_project(&ident, &cfg.api_base, request.timeout(cfg), abort)?;
    let mut budget = request.budget(cfg);
    let mut sink = ArchiveSink::new(&ident);
    let accepted = drive(&files, &mut budget, &mut sink, abort)?;
    tracing::info!(
        "packaged {} files ({} bytes) from {}",
        accepted,
        budget.accepted(),
        ident
    );
    sink.finish()
}

/// Fetches the project and writes the accepted entries under `dest_root`,
/// creating it if absent. Returns the root. Earlier writes are not rolled
/// back if a later entry fails.
pub fn snapshot_to_dir(
    request: &SnapshotRequest,
    cfg: &SbdConfig,
    dest_root: &Path,
    abort: Option<&AbortHandle>,
) -> Result<PathBuf, SnapshotError> {
    let ident = resolve_identifier(&request.project)?;
    let files = fetch::fetch_project(&ident, &cfg.api_base, request.timeout(cfg), abort)?;
    let mut budget = request.budget(cfg);
    let mut sink = DirSink::create(dest_root)?;
    let accepted = drive(&files, &mut budget, &mut sink, abort)?;
    tracing::info!(
        "wrote {} files ({} bytes) from {} under {}",
        accepted,
        budget.accepted(),
        ident,
        dest_root.display()
    );
    Ok(sink.finish())
}

/// The sequential sanitize → size-check → sink loop shared by both modes.
/// Returns the number of accepted entries.
fn drive(
    files: &BTreeMap<String, RemoteFile>,
    budget: &mut TransferBudget,
    sink: &mut dyn Sink,
    abort: Option<&AbortHandle>,
) -> Result<usize, SnapshotError> {
    let mut accepted = 0usize;
    for (raw_path, file) in files {
        if abort.is_some_and(AbortHandle::is_aborted) {
            return Err(SnapshotError::Aborted);
        }
        let Some(entry) = sanitize::sanitize_entry(raw_path, file) else {
            continue;
        };
        budget.admit(&entry.path, entry.byte_size)?;
        sink.accept(&entry)?;
        accepted += 1;
    }
    Ok(accepted)
}
