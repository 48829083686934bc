use crate::codec::merge::{OverlayError, overlay_document};
use crate::codec::Format;
use crate::error::{Error, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Decode every path into `record`, in order.
///
/// Later files override fields set by earlier ones. Stops at the first
/// error; files after it are not read.
pub fn load_into<T>(record: &mut T, paths: &[PathBuf]) -> Result<()>
where
	T: Serialize + DeserializeOwned,
{
	for path in paths {
		load_path(record, path)?;
	}
	Ok(())
}

/// Overlay a single config file onto `record`.
///
/// Missing and zero-byte files are skipped. The decoder is picked by
/// extension after the empty check, so an empty file of any kind is fine.
pub fn load_path<T>(record: &mut T, path: &Path) -> Result<()>
where
	T: Serialize + DeserializeOwned,
{
	let bytes = match std::fs::read(path) {
		Ok(bytes) => bytes,
		Err(err) if err.kind() == ErrorKind::NotFound => {
			debug!(path = %path.display(), "Config file vanished, skipping");
			return Ok(());
		}
		Err(source) => {
			return Err(Error::Read {
				path: path.to_path_buf(),
				source,
			});
		}
	};

	if bytes.is_empty() {
		debug!(path = %path.display(), "Config file is empty, skipping");
		return Ok(());
	}

	let format = Format::from_path(path)?;
	let decode_error = |source| Error::Decode {
		format,
		path: path.to_path_buf(),
		source,
	};

	let content = String::from_utf8(bytes).map_err(|err| decode_error(err.into()))?;
	let document = format.decode(&content).map_err(decode_error)?;
	overlay_document(record, document).map_err(|err| match err {
		OverlayError::Snapshot(source) | OverlayError::RoundTrip(source) => Error::Snapshot {
			record: std::any::type_name::<T>(),
			path: path.to_path_buf(),
			source,
		},
		OverlayError::Apply(source) => decode_error(source.into()),
	})?;

	debug!(path = %path.display(), %format, "Loaded config file");
	Ok(())
}
