//! Write-back of a record to its config files.
//!
//! This module handles:
//! - Atomic single-file writes (stage in the temp dir, then rename)
//! - Concurrent fan-out to several files with aggregated failures

pub mod writer;

pub use writer::{write_to_file, write_to_files};
