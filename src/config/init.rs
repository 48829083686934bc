use crate::config::handle::Config;
use crate::config::options::AfterLoad;
use crate::discovery::{DiscoveryEnv, DiscoveryHint};
use crate::error::Result;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Load config files into `record`, then run `options` in order.
///
/// The discovery hint comes from [`CONFIG_FILE_PATH`](crate::discovery::FILE_PATH_ENV)
/// or [`CONFIG_DIR_PATH`](crate::discovery::DIR_ENV), read once. Fields that
/// no file mentions keep the value `record` had on entry, so defaults can be
/// preset before calling.
pub fn new<T>(record: &mut T, options: impl IntoIterator<Item = AfterLoad<T>>) -> Result<()>
where
	T: Serialize + DeserializeOwned,
{
	let hint = DiscoveryEnv::default().hint();
	new_with_hint(record, &hint, options)
}

/// Same as [`new`] with an explicit discovery hint instead of the environment.
///
/// Steps: resolve paths, load them, apply each option. Any failure returns
/// immediately; options after a failing one never run.
pub fn new_with_hint<T>(
	record: &mut T,
	hint: &DiscoveryHint,
	options: impl IntoIterator<Item = AfterLoad<T>>,
) -> Result<()>
where
	T: Serialize + DeserializeOwned,
{
	let mut config = Config::resolve(record, hint)?;
	config.load()?;

	for option in options {
		option.apply(&mut config)?;
	}

	debug!(paths = config.paths().len(), "Config initialized");
	Ok(())
}
