//! Serde schema for the project API response.
//!
//! The remote shape is
//! `{ project: { appFiles: { [path]: { name, type, contents, fullPath } } } }`.
//! Read minimally and defensively: unknown fields are ignored, a missing
//! `contents` is an empty file, and only the absence or emptiness of the file
//! collection itself is malformed. A `BTreeMap` keys the tree so iteration —
//! and therefore archive construction — is deterministic.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::SnapshotError;

#[derive(Debug, Deserialize)]
struct ProjectResponse {
    project: Option<Project>,
}

#[derive(Debug, Deserialize)]
struct Project {
    #[serde(default, rename = "appFiles")]
    app_files: Option<BTreeMap<String, RemoteFile>>,
}

/// One entry of the remote file tree, untrusted as received.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteFile {
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "type")]
    pub kind: FileKind,
    #[serde(default)]
    pub contents: String,
    #[serde(default, rename = "fullPath")]
    pub full_path: Option<String>,
}

/// Entry kind as reported by the API. Anything unrecognized is carried as
/// `Other` and skipped downstream rather than failing the decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum FileKind {
    File,
    Directory,
    Other,
}

impl Default for FileKind {
    fn default() -> Self {
        FileKind::Other
    }
}

impl From<String> for FileKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "file" => FileKind::File,
            "directory" => FileKind::Directory,
            _ => FileKind::Other,
        }
    }
}

/// Decodes the response body, failing when the file collection is missing
/// or empty.
pub(crate) fn parse_project_body(
    body: &[u8],
) -> Result<BTreeMap<String, RemoteFile>, SnapshotError> {
    let response: ProjectResponse = serde_json::from_slice(body)
        .map_err(|e| SnapshotError::MalformedResponse(format!("undecodable body: {e}")))?;
    let files = response
        .project
        .and_then(|p| p.app_files)
        .ok_or_else(|| {
            SnapshotError::MalformedResponse("missing project file collection".to_string())
        })?;
    if files.is_empty() {
        return Err(SnapshotError::MalformedResponse(
            "project file collection is empty".to_string(),
        ));
    }
    Ok(files)
}
