//! Project identifier extraction from edit URLs.

use crate::error::SnapshotError;

use super::EDIT_MARKER;

/// Extracts the project identifier from an edit URL.
///
/// The identifier is the segment immediately following `/edit/`, cut at the
/// first `/`, `?`, or `#`. Returned verbatim; the charset gate runs later at
/// the fetch boundary, where the value is interpolated into a request.
///
/// # Examples
///
/// - `extract_project_id("https://stackblitz.com/edit/vitejs-vite-abc123")` → `"vitejs-vite-abc123"`
/// - `extract_project_id("https://stackblitz.com/edit/my-app?file=index.js")` → `"my-app"`
pub fn extract_project_id(url: &str) -> Result<String, SnapshotError> {
    let rest = url
        .split_once(EDIT_MARKER)
        .map(|(_, rest)| rest)
        .ok_or_else(|| SnapshotError::InvalidUrl(url.to_string()))?;

    let ident: String = rest
        .chars()
        .take_while(|c| !matches!(c, '/' | '?' | '#'))
        .collect();

    if ident.is_empty() {
        return Err(SnapshotError::InvalidUrl(url.to_string()));
    }
    Ok(ident)
}
