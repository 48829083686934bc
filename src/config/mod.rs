//! Config record handling for confsync.
//!
//! This module handles:
//! - The handle tying a caller's record to its backing files
//! - Sequential decode-merge of those files
//! - Post-load options and the initialization pipeline

pub mod handle;
pub mod init;
pub mod loader;
pub mod options;

pub use handle::Config;
pub use init::{new, new_with_hint};
pub use loader::{load_into, load_path};
pub use options::{AfterLoad, with_syncing_to_files, with_validation, with_writing_to_file};
