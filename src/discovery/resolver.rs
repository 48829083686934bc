use crate::discovery::hint::DiscoveryHint;
use crate::error::{Error, Result};
use crate::sync::write_to_file;
use serde::Serialize;
use std::collections::HashSet;
use std::fs::File;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Basenames searched when no hint is given, in load order.
pub const DEFAULT_SEARCH_ORDER: [&str; 4] =
	["config.toml", "config.json", "config.yml", "config.yaml"];

/// Basenames searched inside a hinted directory, in load order.
pub const DIR_SEARCH_ORDER: [&str; 4] =
	["config.json", "config.toml", "config.yml", "config.yaml"];

/// Turn a discovery hint into the ordered list of backing files.
///
/// - `ExplicitFile(p)` always yields `[p]`. A missing `p` is created and
///   seeded with `record` so it holds valid syntax for its extension.
/// - `Directory(d)` yields the files in `d` that exist, in [`DIR_SEARCH_ORDER`].
/// - `None` searches the executable's directory, then the working
///   directory, in [`DEFAULT_SEARCH_ORDER`]. When both are the same
///   directory each file is listed once, at its first position.
///
/// Later entries override earlier ones when loaded.
pub fn resolve_paths<T: Serialize + ?Sized>(hint: &DiscoveryHint, record: &T) -> Result<Vec<PathBuf>> {
	let paths = match hint {
		DiscoveryHint::ExplicitFile(path) => {
			ensure_file(path, record)?;
			vec![path.clone()]
		}
		DiscoveryHint::Directory(dir) => {
			existing_paths(DIR_SEARCH_ORDER.into_iter().map(|name| dir.join(name)))?
		}
		DiscoveryHint::None => {
			let exe_dir = executable_dir();
			dedup_same_file(existing_paths(default_candidates(exe_dir.as_deref()))?)?
		}
	};

	debug!(?hint, ?paths, "Resolved config paths");
	Ok(paths)
}

/// Create `path` with `record` as its content unless a file is already there.
fn ensure_file<T: Serialize + ?Sized>(path: &Path, record: &T) -> Result<()> {
	if file_exists(path)? {
		return Ok(());
	}

	File::create(path).map_err(|source| Error::Create {
		path: path.to_path_buf(),
		source,
	})?;
	debug!(path = %path.display(), "Created missing config file");

	write_to_file(record, path)
}

/// Candidates for the default search: next to the executable first, then
/// bare basenames relative to the working directory.
fn default_candidates(exe_dir: Option<&Path>) -> Vec<PathBuf> {
	let beside_exe = exe_dir
		.into_iter()
		.flat_map(|dir| DEFAULT_SEARCH_ORDER.into_iter().map(move |name| dir.join(name)));
	let in_cwd = DEFAULT_SEARCH_ORDER.into_iter().map(PathBuf::from);

	beside_exe.chain(in_cwd).collect()
}

/// Drop paths that name a file already listed, keeping the first.
fn dedup_same_file(paths: Vec<PathBuf>) -> Result<Vec<PathBuf>> {
	let mut seen = HashSet::new();
	let mut unique = Vec::with_capacity(paths.len());
	for path in paths {
		let identity = match std::fs::canonicalize(&path) {
			Ok(identity) => identity,
			Err(err) if err.kind() == ErrorKind::NotFound => path.clone(),
			Err(source) => return Err(Error::Probe { path, source }),
		};
		if seen.insert(identity) {
			unique.push(path);
		}
	}
	Ok(unique)
}

fn executable_dir() -> Option<PathBuf> {
	match std::env::current_exe() {
		Ok(exe) => exe.parent().map(Path::to_path_buf),
		Err(err) => {
			debug!(error = %err, "Cannot locate executable, searching working directory only");
			None
		}
	}
}

/// Keep only the candidates that are existing regular files, in order.
pub fn existing_paths(candidates: impl IntoIterator<Item = PathBuf>) -> Result<Vec<PathBuf>> {
	let mut paths = Vec::new();
	for candidate in candidates {
		if file_exists(&candidate)? {
			paths.push(candidate);
		}
	}
	Ok(paths)
}

/// Check whether `path` is an existing file (not a directory).
///
/// A missing path is `Ok(false)`; any other I/O failure is an error.
pub fn file_exists(path: &Path) -> Result<bool> {
	match std::fs::metadata(path) {
		Ok(metadata) => Ok(!metadata.is_dir()),
		Err(err) if matches!(err.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory) => {
			Ok(false)
		}
		Err(source) => Err(Error::Probe {
			path: path.to_path_buf(),
			source,
		}),
	}
}
