//! Project fetch over HTTP.
//!
//! Uses the curl crate (libcurl) to issue one bounded-time GET against the
//! project API and deserialize the response into the file-tree map. The
//! deadline is armed on the handle at call start; an optional abort handle is
//! polled from the progress callback. Runs in the current thread; call from
//! `spawn_blocking` if used from async code.

mod parse;

pub use parse::{FileKind, RemoteFile};

use std::collections::BTreeMap;
use std::time::Duration;

use crate::control::AbortHandle;
use crate::error::SnapshotError;
use crate::url_model;

/// Connect-phase ceiling; the overall transfer deadline comes from the caller
/// and also bounds the connect when shorter.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(15);

const USER_AGENT: &str = concat!("sbd/", env!("CARGO_PKG_VERSION"));

/// Fetches the raw file tree of `ident` from the project API.
///
/// Validates the identifier against the charset gate before anything touches
/// the network, then GETs `{api_base}/api/projects/{ident}?include_files=true`
/// and parses the body. Exactly one attempt; retry policy, if any, belongs to
/// the caller.
pub fn fetch_project(
    ident: &str,
    api_base: &str,
    timeout: Duration,
    abort: Option<&AbortHandle>,
) -> Result<BTreeMap<String, RemoteFile>, SnapshotError> {
    url_model::validate_identifier(ident)?;
    let endpoint = endpoint_url(api_base, ident)?;
    tracing::debug!("fetching project {} from {}", ident, endpoint);

    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(endpoint.as_str())?;
    easy.get(true)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.useragent(USER_AGENT)?;
    easy.connect_timeout(CONNECT_TIMEOUT.min(timeout))?;
    easy.timeout(timeout)?;
    if abort.is_some() {
        easy.progress(true)?;
    }

    {
        let mut transfer = easy.transfer();
        if let Some(handle) = abort {
            let handle = handle.clone();
            transfer.progress_function(move |_, _, _, _| !handle.is_aborted())?;
        }
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let status = easy.response_code()?;
    if !(200..300).contains(&status) {
        return Err(SnapshotError::Remote { status });
    }

    let files = parse::parse_project_body(&body)?;
    tracing::debug!("project {} has {} raw entries", ident, files.len());
    Ok(files)
}

/// Builds the templated endpoint URL. The identifier has already passed the
/// charset gate, so plain interpolation into the path is safe.
fn endpoint_url(api_base: &str, ident: &str) -> Result<url::Url, SnapshotError> {
    let mut endpoint = url::Url::parse(api_base)
        .map_err(|e| SnapshotError::InvalidUrl(format!("{api_base}: {e}")))?;
    endpoint.set_path(&format!("/api/projects/{ident}"));
    endpoint.set_query(Some("include_files=true"));
    Ok(endpoint)
}
