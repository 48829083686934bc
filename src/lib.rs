//! confsync - load layered config files into a typed record and write them back.
//!
//! This library provides:
//! - Config file discovery from an explicit file, a directory, or default locations
//! - Ordered decode-merge of JSON, YAML and TOML files into one record
//! - Post-load options for validation and atomic write-back
//! - Concurrent sync of the record to every file it was loaded from
//!
//! # Merge exceptions
//!
//! Each file is merged through the record's own serde impls, so a field
//! those impls do not carry is not left untouched by a load:
//! - `#[serde(skip)]` fields are reset to their `Default`.
//! - A field with `skip_serializing_if` and no `default` stops the record
//!   from round-tripping; loading then fails with [`Error::Snapshot`].
//!
//! # Example
//!
//! ```no_run
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Settings {
//!     name: String,
//!     port: u16,
//! }
//!
//! // Preset defaults; files only override what they mention.
//! let mut settings = Settings {
//!     name: "app".to_string(),
//!     port: 8080,
//! };
//!
//! confsync::new(
//!     &mut settings,
//!     [
//!         confsync::with_validation(|s: &mut Settings| {
//!             anyhow::ensure!(s.port != 0, "port must be non-zero");
//!             Ok(())
//!         }),
//!         confsync::with_syncing_to_files(),
//!     ],
//! )
//! .unwrap();
//! ```

pub mod codec;
pub mod config;
pub mod discovery;
pub mod error;
pub mod sync;

pub use config::{
	AfterLoad, Config, new, new_with_hint, with_syncing_to_files, with_validation,
	with_writing_to_file,
};
pub use discovery::{
	DIR_ENV, DiscoveryEnv, DiscoveryHint, FILE_PATH_ENV, set_config_dir, set_config_path,
};
pub use error::{Error, Result, SyncError};
