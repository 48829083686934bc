//! Config file discovery for confsync.
//!
//! This module handles:
//! - Reading the discovery hint from the environment
//! - Turning a hint into the ordered list of backing files

pub mod hint;
pub mod resolver;

pub use hint::{DIR_ENV, DiscoveryEnv, DiscoveryHint, FILE_PATH_ENV, set_config_dir, set_config_path};
pub use resolver::{
	DEFAULT_SEARCH_ORDER, DIR_SEARCH_ORDER, existing_paths, file_exists, resolve_paths,
};
