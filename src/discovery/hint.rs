use std::ffi::OsStr;
use std::path::PathBuf;

/// Environment variable naming a single config file.
pub const FILE_PATH_ENV: &str = "CONFIG_FILE_PATH";

/// Environment variable naming a directory to search for config files.
pub const DIR_ENV: &str = "CONFIG_DIR_PATH";

/// Where to look for config files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DiscoveryHint {
	/// Use exactly this file, creating it if it does not exist.
	ExplicitFile(PathBuf),
	/// Search this directory for the default basenames.
	Directory(PathBuf),
	/// Search next to the executable, then the working directory.
	#[default]
	None,
}

/// Names of the environment variables that select a [`DiscoveryHint`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryEnv {
	pub file_path_var: String,
	pub dir_var: String,
}

impl Default for DiscoveryEnv {
	fn default() -> Self {
		Self {
			file_path_var: FILE_PATH_ENV.to_string(),
			dir_var: DIR_ENV.to_string(),
		}
	}
}

impl DiscoveryEnv {
	/// Read both variables once and build the hint.
	///
	/// An explicit file wins over a directory. Unset and empty variables are
	/// treated the same.
	pub fn hint(&self) -> DiscoveryHint {
		if let Some(path) = non_empty_var(&self.file_path_var) {
			DiscoveryHint::ExplicitFile(path)
		} else if let Some(dir) = non_empty_var(&self.dir_var) {
			DiscoveryHint::Directory(dir)
		} else {
			DiscoveryHint::None
		}
	}
}

fn non_empty_var(name: &str) -> Option<PathBuf> {
	std::env::var_os(name)
		.filter(|value| !value.is_empty())
		.map(PathBuf::from)
}

/// Point discovery at a directory by setting [`DIR_ENV`].
///
/// # Safety
///
/// Same contract as [`std::env::set_var`]: no other thread may read or write
/// the environment concurrently.
pub unsafe fn set_config_dir(dir: impl AsRef<OsStr>) {
	unsafe { std::env::set_var(DIR_ENV, dir) }
}

/// Point discovery at a single file by setting [`FILE_PATH_ENV`].
///
/// # Safety
///
/// Same contract as [`std::env::set_var`]: no other thread may read or write
/// the environment concurrently.
pub unsafe fn set_config_path(path: impl AsRef<OsStr>) {
	unsafe { std::env::set_var(FILE_PATH_ENV, path) }
}

#[cfg(test)]
mod tests {
	use super::*;

	fn test_env(suffix: &str) -> DiscoveryEnv {
		DiscoveryEnv {
			file_path_var: format!("TEST_CONFSYNC_FILE_{suffix}"),
			dir_var: format!("TEST_CONFSYNC_DIR_{suffix}"),
		}
	}

	#[test]
	fn test_default_env_names() {
		let env = DiscoveryEnv::default();
		assert_eq!(env.file_path_var, "CONFIG_FILE_PATH");
		assert_eq!(env.dir_var, "CONFIG_DIR_PATH");
	}

	#[test]
	fn test_hint_precedence() {
		let env = test_env("PRECEDENCE");

		// SAFETY: These variable names are unique to this test
		unsafe {
			std::env::remove_var(&env.file_path_var);
			std::env::remove_var(&env.dir_var);
			assert_eq!(env.hint(), DiscoveryHint::None);

			std::env::set_var(&env.dir_var, "/etc/app");
			assert_eq!(env.hint(), DiscoveryHint::Directory(PathBuf::from("/etc/app")));

			std::env::set_var(&env.file_path_var, "/etc/app/app.toml");
			assert_eq!(
				env.hint(),
				DiscoveryHint::ExplicitFile(PathBuf::from("/etc/app/app.toml"))
			);

			std::env::remove_var(&env.file_path_var);
			std::env::remove_var(&env.dir_var);
		}
	}

	#[test]
	fn test_empty_values_are_ignored() {
		let env = test_env("EMPTY");

		// SAFETY: These variable names are unique to this test
		unsafe {
			std::env::set_var(&env.file_path_var, "");
			std::env::set_var(&env.dir_var, "/srv/conf");
			assert_eq!(env.hint(), DiscoveryHint::Directory(PathBuf::from("/srv/conf")));

			std::env::set_var(&env.dir_var, "");
			assert_eq!(env.hint(), DiscoveryHint::None);

			std::env::remove_var(&env.file_path_var);
			std::env::remove_var(&env.dir_var);
		}
	}
}
