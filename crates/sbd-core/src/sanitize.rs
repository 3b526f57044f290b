//! Path sanitization for untrusted remote file trees.
//!
//! Paths arrive straight from the API response and may carry `..` segments,
//! leading slashes, or excluded-directory prefixes. Unsafe entries are
//! skipped, never fatal: an untrusted tree containing escape attempts is an
//! expected condition, not an operational failure.

use crate::fetch::{FileKind, RemoteFile};

/// Raw-path substrings that exclude an entry outright, checked before
/// normalization.
pub const EXCLUDED_PATH_MARKERS: [&str; 2] = ["node_modules/", ".git/"];

/// A file entry that survived sanitization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizedEntry {
    /// Root-relative path: never empty, never absolute, no `..` segments.
    pub path: String,
    /// File contents, UTF-8 text as delivered by the API.
    pub contents: String,
    /// Exact encoded size of `contents` in bytes (not chars).
    pub byte_size: u64,
}

/// True if the raw path hits the exclusion policy (`node_modules/`, `.git/`).
pub fn is_excluded(raw: &str) -> bool {
    EXCLUDED_PATH_MARKERS.iter().any(|m| raw.contains(m))
}

/// Normalizes a raw path to a root-relative form, or `None` to reject.
///
/// Splits on `/`, drops empty and `.` segments; `..` pops the last accepted
/// segment when one exists and is dropped silently otherwise — an escape
/// above the root is neutralized, not propagated. Idempotent on already
/// normalized input.
pub fn normalize_path(raw: &str) -> Option<String> {
    let mut segments: Vec<&str> = Vec::new();
    for segment in raw.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            s => segments.push(s),
        }
    }
    if segments.is_empty() {
        return None;
    }
    Some(segments.join("/"))
}

/// Applies the full sanitization contract to one raw entry.
///
/// Returns `None` (skip) for directory entries, excluded prefixes, and paths
/// that normalize to nothing. The trailing invariant check on the normalized
/// result is unreachable by construction; a violation would be a bug here,
/// not an expected runtime branch.
pub fn sanitize_entry(raw_path: &str, file: &RemoteFile) -> Option<SanitizedEntry> {
    if file.kind != FileKind::File {
        tracing::debug!("skipping non-file entry: {}", raw_path);
        return None;
    }
    if is_excluded(raw_path) {
        tracing::debug!("skipping excluded path: {}", raw_path);
        return None;
    }
    let path = match normalize_path(raw_path) {
        Some(p) => p,
        None => {
            tracing::debug!("skipping path that normalizes to nothing: {}", raw_path);
            return None;
        }
    };

    // Unreachable given the walk above; a hit here is a bug in this module.
    if path.starts_with('/') || path.split('/').any(|s| s == "..") {
        tracing::warn!("normalized path violated invariants, skipping: {}", path);
        return None;
    }

    let byte_size = file.contents.len() as u64;
    Some(SanitizedEntry {
        path,
        contents: file.contents.clone(),
        byte_size,
    })
}
