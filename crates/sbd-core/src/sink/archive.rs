//! In-memory zip archive sink.
//!
//! Builds the archive over a `Cursor<Vec<u8>>`, so no destination path is
//! needed up front. Entry names are the normalized relative paths; contents
//! are stored verbatim as UTF-8.

use std::io::{Cursor, Write};
use std::path::Path;

use zip::write::FileOptions;
use zip::ZipWriter;

use crate::error::SnapshotError;
use crate::sanitize::SanitizedEntry;
use crate::url_model;

use super::Sink;

/// Archive builder for one project snapshot.
pub struct ArchiveSink {
    writer: ZipWriter<Cursor<Vec<u8>>>,
    filename: String,
    entries: usize,
}

impl ArchiveSink {
    /// Creates a sink whose artifact will be named `<ident>.zip`.
    pub fn new(ident: &str) -> Self {
        Self {
            writer: ZipWriter::new(Cursor::new(Vec::new())),
            filename: url_model::archive_filename(ident),
            entries: 0,
        }
    }

    /// Finalizes the central directory and hands over the artifact.
    /// Failures before this point never leak a partial archive.
    pub fn finish(self) -> Result<ArchiveArtifact, SnapshotError> {
        let ArchiveSink {
            writer,
            filename,
            entries,
        } = self;
        let cursor = writer.finish()?;
        tracing::debug!("archive {} sealed with {} entries", filename, entries);
        Ok(ArchiveArtifact {
            filename,
            bytes: cursor.into_inner(),
        })
    }
}

impl Sink for ArchiveSink {
    fn accept(&mut self, entry: &SanitizedEntry) -> Result<(), SnapshotError> {
        let options: FileOptions<'_, ()> = FileOptions::default();
        self.writer.start_file(entry.path.as_str(), options)?;
        self.writer.write_all(entry.contents.as_bytes())?;
        self.entries += 1;
        Ok(())
    }
}

/// A finished in-memory archive plus its attachment name.
#[derive(Debug, Clone)]
pub struct ArchiveArtifact {
    filename: String,
    bytes: Vec<u8>,
}

impl ArchiveArtifact {
    /// Attachment filename, `<identifier>.zip`.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Saves the archive at `path`, overwriting any existing file.
    pub fn write_to(&self, path: &Path) -> Result<(), SnapshotError> {
        std::fs::write(path, &self.bytes).map_err(|source| SnapshotError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Response-shaped materialization for serving the archive over HTTP.
    pub fn into_response(self) -> ArchiveResponse {
        ArchiveResponse {
            status: 200,
            content_type: "application/zip",
            content_disposition: url_model::attachment_header_value(&self.filename),
            body: self.bytes,
        }
    }
}

/// Minimal HTTP-response shape; a host web framework maps this onto its own
/// response type.
#[derive(Debug, Clone)]
pub struct ArchiveResponse {
    pub status: u16,
    pub content_type: &'static str,
    pub content_disposition: String,
    pub body: Vec<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    fn entry(path: &str, contents: &str) -> SanitizedEntry {
        SanitizedEntry {
            path: path.to_string(),
            contents: contents.to_string(),
            byte_size: contents.len() as u64,
        }
    }

    #[test]
    fn round_trip_preserves_names_and_bytes() {
        let mut sink = ArchiveSink::new("my-app");
        sink.accept(&entry("package.json", "{\n}\n")).unwrap();
        sink.accept(&entry("src/caf\u{e9}.txt", "caf\u{e9}")).unwrap();
        let artifact = sink.finish().unwrap();
        assert_eq!(artifact.filename(), "my-app.zip");

        let mut archive = zip::ZipArchive::new(Cursor::new(artifact.into_bytes())).unwrap();
        let names: Vec<String> = archive.file_names().map(str::to_string).collect();
        assert_eq!(names.len(), 2);
        assert!(names.contains(&"package.json".to_string()));
        assert!(names.contains(&"src/caf\u{e9}.txt".to_string()));

        let mut contents = String::new();
        archive
            .by_name("src/caf\u{e9}.txt")
            .unwrap()
            .read_to_string(&mut contents)
            .unwrap();
        assert_eq!(contents, "caf\u{e9}");
    }

    #[test]
    fn empty_archive_is_still_valid_zip() {
        let artifact = ArchiveSink::new("empty").finish().unwrap();
        assert!(!artifact.is_empty());
        let archive = zip::ZipArchive::new(Cursor::new(artifact.into_bytes())).unwrap();
        assert_eq!(archive.len(), 0);
    }

    #[test]
    fn response_materialization_headers() {
        let mut sink = ArchiveSink::new("my-app");
        sink.accept(&entry("a.txt", "a")).unwrap();
        let response = sink.finish().unwrap().into_response();
        assert_eq!(response.status, 200);
        assert_eq!(response.content_type, "application/zip");
        assert_eq!(
            response.content_disposition,
            "attachment; filename=\"my-app.zip\""
        );
        assert!(!response.body.is_empty());
    }

    #[test]
    fn write_to_saves_the_same_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = ArchiveSink::new("my-app");
        sink.accept(&entry("a.txt", "a")).unwrap();
        let artifact = sink.finish().unwrap();

        let path = dir.path().join("my-app.zip");
        artifact.write_to(&path).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), artifact.as_bytes());
    }
}
