//! Filesystem sink: writes entries under an output root.
//!
//! The root and all intermediate directories are created as needed; existing
//! files are overwritten without warning. There is no rollback — on failure
//! partway through, earlier writes remain on disk (callers wanting atomicity
//! stage into a temp directory and rename on success).

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::SnapshotError;
use crate::sanitize::SanitizedEntry;

use super::Sink;

/// Directory-tree writer for one project snapshot.
pub struct DirSink {
    root: PathBuf,
    files: usize,
}

impl DirSink {
    /// Creates the output root (recursively) and the sink over it.
    pub fn create(root: &Path) -> Result<Self, SnapshotError> {
        fs::create_dir_all(root)?;
        Ok(Self {
            root: root.to_path_buf(),
            files: 0,
        })
    }

    /// Returns the output root once all entries are written.
    pub fn finish(self) -> PathBuf {
        tracing::debug!("wrote {} files under {}", self.files, self.root.display());
        self.root
    }
}

impl Sink for DirSink {
    fn accept(&mut self, entry: &SanitizedEntry) -> Result<(), SnapshotError> {
        let dest = self.root.join(&entry.path);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent).map_err(|source| SnapshotError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(&dest, entry.contents.as_bytes()).map_err(|source| SnapshotError::Write {
            path: dest.clone(),
            source,
        })?;
        self.files += 1;
        Ok(())
    }
}
