//! Core engine for `sbd`: fetch a remote project's file tree, sanitize and
//! filter its entries, and package them as a zip archive or a directory tree.

pub mod config;
pub mod logging;

pub mod budget;
pub mod checksum;
pub mod control;
pub mod error;
pub mod fetch;
pub mod sanitize;
pub mod sink;
pub mod snapshot;
pub mod url_model;
