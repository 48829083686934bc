use crate::config::loader::load_into;
use crate::discovery::{DiscoveryHint, resolve_paths};
use crate::error::Result;
use crate::sync;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// A caller's config record together with the files that back it.
///
/// The record stays owned by the caller; the handle borrows it for the
/// duration of one initialization. The path list is fixed at resolution
/// time and is what [`Config::write_to_files`] writes to.
#[derive(Debug)]
pub struct Config<'a, T> {
	record: &'a mut T,
	paths: Vec<PathBuf>,
}

impl<'a, T> Config<'a, T> {
	/// Wrap `record` with an explicit list of backing files.
	pub fn with_paths(record: &'a mut T, paths: Vec<PathBuf>) -> Self {
		Self { record, paths }
	}

	/// Resolve the backing files for `hint`.
	///
	/// May create and seed a missing explicit file, see [`resolve_paths`].
	pub fn resolve(record: &'a mut T, hint: &DiscoveryHint) -> Result<Self>
	where
		T: Serialize,
	{
		let paths = resolve_paths(hint, &*record)?;
		Ok(Self { record, paths })
	}

	/// Decode every backing file into the record, in resolution order.
	pub fn load(&mut self) -> Result<()>
	where
		T: Serialize + DeserializeOwned,
	{
		load_into(&mut *self.record, &self.paths)
	}

	pub fn record(&self) -> &T {
		&*self.record
	}

	pub fn record_mut(&mut self) -> &mut T {
		&mut *self.record
	}

	/// Backing files, in the order they were loaded.
	pub fn paths(&self) -> &[PathBuf] {
		&self.paths
	}

	/// Atomically write the record to `path`.
	pub fn write_to_file(&self, path: &Path) -> Result<()>
	where
		T: Serialize,
	{
		sync::write_to_file(&*self.record, path)
	}

	/// Write the record to every backing file concurrently.
	pub fn write_to_files(&self) -> Result<()>
	where
		T: Serialize + Sync,
	{
		sync::write_to_files(&*self.record, &self.paths)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde::Deserialize;
	use std::fs;

	#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
	struct Sample {
		a: String,
	}

	#[test]
	fn test_resolve_then_load() {
		let temp_dir = tempfile::tempdir().unwrap();
		fs::write(temp_dir.path().join("config.yml"), "a: from-yml\n").unwrap();

		let mut sample = Sample::default();
		let mut config =
			Config::resolve(&mut sample, &DiscoveryHint::Directory(temp_dir.path().to_path_buf()))
				.unwrap();
		assert_eq!(config.paths(), [temp_dir.path().join("config.yml")]);

		config.load().unwrap();
		assert_eq!(config.record().a, "from-yml");
	}

	#[test]
	fn test_write_to_files_uses_resolved_paths() {
		let temp_dir = tempfile::tempdir().unwrap();
		let json = temp_dir.path().join("config.json");
		let toml = temp_dir.path().join("config.toml");
		fs::write(&json, r#"{"a": "old"}"#).unwrap();
		fs::write(&toml, "a = \"old\"\n").unwrap();

		let mut sample = Sample::default();
		let mut config =
			Config::resolve(&mut sample, &DiscoveryHint::Directory(temp_dir.path().to_path_buf()))
				.unwrap();
		config.record_mut().a = "new".to_string();

		// Created after resolution, so never synced
		let late = temp_dir.path().join("config.yaml");
		fs::write(&late, "a: late\n").unwrap();

		config.write_to_files().unwrap();

		assert_eq!(fs::read_to_string(&json).unwrap(), "{\n  \"a\": \"new\"\n}\n");
		assert_eq!(fs::read_to_string(&toml).unwrap(), "a = \"new\"\n");
		assert_eq!(fs::read_to_string(&late).unwrap(), "a: late\n");
	}

	#[test]
	fn test_with_paths_write_to_file() {
		let temp_dir = tempfile::tempdir().unwrap();
		let target = temp_dir.path().join("out.yaml");

		let mut sample = Sample {
			a: "written".to_string(),
		};
		let config = Config::with_paths(&mut sample, Vec::new());
		config.write_to_file(&target).unwrap();

		assert_eq!(fs::read_to_string(&target).unwrap(), "a: written\n");
	}
}
