use crate::config::handle::Config;
use crate::error::{Error, Result};
use serde::Serialize;
use std::path::PathBuf;

type ApplyFn<T> = Box<dyn FnOnce(&mut Config<'_, T>) -> Result<()>>;

/// An operation run on a loaded config, in the order the caller lists them.
///
/// The first option that fails stops the rest.
pub struct AfterLoad<T> {
	apply: ApplyFn<T>,
}

impl<T> AfterLoad<T> {
	/// Build an option from any operation on the loaded handle.
	pub fn new(f: impl FnOnce(&mut Config<'_, T>) -> Result<()> + 'static) -> Self {
		Self { apply: Box::new(f) }
	}

	pub fn apply(self, config: &mut Config<'_, T>) -> Result<()> {
		(self.apply)(config)
	}
}

impl<T> std::fmt::Debug for AfterLoad<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("AfterLoad").finish_non_exhaustive()
	}
}

/// Run `validate` against the loaded record.
///
/// Its error is returned to the caller as-is through [`Error::Validation`].
pub fn with_validation<T: 'static>(
	validate: impl FnOnce(&mut T) -> anyhow::Result<()> + 'static,
) -> AfterLoad<T> {
	AfterLoad::new(move |config: &mut Config<'_, T>| {
		validate(config.record_mut()).map_err(Error::Validation)
	})
}

/// Atomically write the loaded record to `path`.
pub fn with_writing_to_file<T: Serialize + 'static>(path: impl Into<PathBuf>) -> AfterLoad<T> {
	let path = path.into();
	AfterLoad::new(move |config: &mut Config<'_, T>| config.write_to_file(&path))
}

/// Write the loaded record back to every file it was loaded from.
pub fn with_syncing_to_files<T: Serialize + Sync + 'static>() -> AfterLoad<T> {
	AfterLoad::new(|config: &mut Config<'_, T>| config.write_to_files())
}
