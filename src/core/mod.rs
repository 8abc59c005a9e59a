//! Core utilities shared across the pipeline
//!
//! - `http`: upstream client construction
//! - `files`: report file naming and writing

pub mod files;
pub mod http;

pub use files::{destination_path, report_file_name, sanitize_filename, write_bytes};
pub use http::build_client;
