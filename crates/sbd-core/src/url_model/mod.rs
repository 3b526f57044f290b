//! Source URL modeling and archive naming.
//!
//! Extracts the project identifier from a shareable edit URL, gates it
//! against the identifier character class, and derives the attachment
//! filename/header for the archive materialization.

mod attachment;
mod edit_url;
mod ident;

pub use attachment::{archive_filename, attachment_header_value};
pub use edit_url::extract_project_id;
pub use ident::{is_valid_identifier, validate_identifier};

/// Marker preceding the project identifier in an edit URL
/// (`https://stackblitz.com/edit/<id>`).
pub const EDIT_MARKER: &str = "/edit/";
