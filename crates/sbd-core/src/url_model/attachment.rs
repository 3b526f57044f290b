//! Attachment naming for the archive materialization.

/// Archive filename for a project: `<identifier>.zip`.
pub fn archive_filename(ident: &str) -> String {
    format!("{ident}.zip")
}

/// `Content-Disposition` value for the response-shaped materialization.
/// The filename is quoted; identifiers pass the charset gate before this is
/// ever built, so no further escaping is needed.
pub fn attachment_header_value(filename: &str) -> String {
    format!("attachment; filename=\"{filename}\"")
}
