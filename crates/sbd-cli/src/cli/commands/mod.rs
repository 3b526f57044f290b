//! CLI command handlers. Each command is in its own file.

mod checksum;
mod completions;
mod dir;
mod zip;

pub use checksum::run_checksum;
pub use completions::run_completions;
pub use dir::run_dir;
pub use zip::run_zip;
