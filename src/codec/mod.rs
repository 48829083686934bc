//! Format codecs for confsync.
//!
//! This module handles:
//! - Picking JSON, YAML or TOML from a file extension
//! - Encoding a record in the chosen format
//! - Overlaying a decoded document onto an existing record

pub mod format;
pub mod merge;

pub use format::Format;
pub use merge::{deep_merge, overlay_document};
