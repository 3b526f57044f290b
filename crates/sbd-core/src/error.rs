//! Error taxonomy for the snapshot pipeline.
//!
//! Every variant is terminal for the current invocation; nothing here is
//! retried internally. Path-sanitization rejections are deliberately NOT
//! errors (unsafe entries in an untrusted tree are skipped, see `sanitize`).

use std::path::PathBuf;
use thiserror::Error;

/// Failure of a single snapshot invocation. Transport errors are classified
/// on conversion so callers can tell a deadline expiry from a network fault.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// A source edit URL carried no `/edit/<id>` segment, or a configured
    /// API base did not parse as a URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Identifier failed the `[A-Za-z0-9_-]+` gate. Checked before any
    /// network call; this is the sole injection defense for the endpoint.
    #[error("invalid project identifier {0:?} (expected letters, digits, '-' or '_')")]
    InvalidIdentifier(String),

    /// The transfer deadline expired (connect or total).
    #[error("request timed out: {0}")]
    RequestTimeout(curl::Error),

    /// The caller tripped the abort handle mid-transfer.
    #[error("snapshot aborted by caller")]
    Aborted,

    /// Non-timeout transport failure (DNS, refused connection, TLS, ...).
    #[error("transfer failed: {0}")]
    Transport(curl::Error),

    /// The API answered with a non-2xx status.
    #[error("remote API returned HTTP {status}")]
    Remote { status: u32 },

    /// Response body was not the expected project shape, or the file
    /// collection was absent or empty.
    #[error("malformed API response: {0}")]
    MalformedResponse(String),

    /// A single file is over the per-file ceiling. Hard abort, not a skip.
    #[error("file {path} is {size} bytes, over the per-file limit of {limit}")]
    FileTooLarge { path: String, size: u64, limit: u64 },

    /// The running total passed the cumulative ceiling. Hard abort.
    #[error("project exceeds the total size limit: {total} of {limit} bytes")]
    TotalSizeExceeded { total: u64, limit: u64 },

    /// Filesystem sink failure (create or write under the output root).
    #[error("failed to write {}: {}", .path.display(), .source)]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Archive sink failure from the zip codec.
    #[error("zip encoding failed: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Other I/O failure (e.g. creating the output root).
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Classify curl failures once, centrally: deadline expiry and
/// callback-driven aborts get their own variants, the rest is transport.
impl From<curl::Error> for SnapshotError {
    fn from(e: curl::Error) -> Self {
        if e.is_operation_timedout() {
            SnapshotError::RequestTimeout(e)
        } else if e.is_aborted_by_callback() {
            SnapshotError::Aborted
        } else {
            SnapshotError::Transport(e)
        }
    }
}
