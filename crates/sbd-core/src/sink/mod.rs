//! Terminal consumers of sanitized entries.
//!
//! One pipeline, two sinks: an in-memory zip builder and a filesystem
//! writer. Both consume the same ordered entry sequence; neither sees raw,
//! unsanitized paths.

mod archive;
mod dir;

pub use archive::{ArchiveArtifact, ArchiveResponse, ArchiveSink};
pub use dir::DirSink;

use crate::error::SnapshotError;
use crate::sanitize::SanitizedEntry;

/// Consumer of accepted entries, fed strictly in iteration order.
pub trait Sink {
    fn accept(&mut self, entry: &SanitizedEntry) -> Result<(), SnapshotError>;
}
