use crate::codec::Format;
use crate::error::{Error, Result, SyncError};
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;
use tracing::{debug, error};

/// Write `record` to `path` through a staged temp file.
///
/// The record is encoded into a file in the system temp directory that
/// shares the target's extension, then renamed onto `path`. The staged file
/// is removed on every exit path.
///
/// A failed rename (for instance across devices) is logged and swallowed:
/// the target keeps its previous content and `Ok(())` is returned.
pub fn write_to_file<T: Serialize + ?Sized>(record: &T, path: &Path) -> Result<()> {
	let format = Format::from_path(path)?;

	let mut staged = tempfile::Builder::new()
		.prefix("config")
		.suffix(&format!(".{}", format.as_str()))
		.tempfile_in(std::env::temp_dir())
		.map_err(|source| Error::TempFile {
			path: path.to_path_buf(),
			source,
		})?;

	let content = format.encode(record).map_err(|source| Error::Encode {
		format,
		path: path.to_path_buf(),
		source,
	})?;

	staged
		.write_all(content.as_bytes())
		.and_then(|()| staged.flush())
		.map_err(|source| Error::Write {
			path: path.to_path_buf(),
			source,
		})?;

	if let Err(err) = staged.persist(path) {
		// The returned handle still owns the staged file and removes it on drop.
		error!(
			temp = %err.file.path().display(),
			target = %path.display(),
			error = %err.error,
			"Failed to move staged config into place"
		);
		return Ok(());
	}

	debug!(path = %path.display(), %format, "Wrote config file");
	Ok(())
}

/// Write `record` to every path concurrently, one thread per path.
///
/// All writes run to completion before this returns. Every failure is
/// collected into a single [`SyncError`]; one failing target never stops
/// its siblings.
pub fn write_to_files<T: Serialize + Sync + ?Sized>(record: &T, paths: &[PathBuf]) -> Result<()> {
	if paths.is_empty() {
		return Ok(());
	}

	// Sized to the number of writers so no send ever blocks.
	let (tx, rx) = mpsc::sync_channel(paths.len());

	thread::scope(|scope| {
		for path in paths {
			let tx = tx.clone();
			scope.spawn(move || {
				if let Err(err) = write_to_file(record, path) {
					// Cannot fail: rx outlives the scope and has a slot per writer.
					tx.send(err).ok();
				}
			});
		}
	});
	drop(tx);

	let failures: Vec<Error> = rx.into_iter().collect();
	if failures.is_empty() {
		debug!(count = paths.len(), "Synced config to all files");
		Ok(())
	} else {
		Err(SyncError::new(failures).into())
	}
}
