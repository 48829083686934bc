use crate::codec::Format;
use std::fmt;
use std::path::PathBuf;

/// Boxed source error produced by one of the codec backends.
pub type CodecError = Box<dyn std::error::Error + Send + Sync>;

/// Library-level structured errors for confsync.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Failed to inspect config path: {path}")]
	Probe {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to create config file: {path}")]
	Create {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to read config file: {path}")]
	Read {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("unsupported file extension: {ext}")]
	UnsupportedExtension { ext: String },

	#[error("error while decoding {format} file: {path}")]
	Decode {
		format: Format,
		path: PathBuf,
		#[source]
		source: CodecError,
	},

	#[error("Config record {record} does not survive its own serialization, cannot merge {path}")]
	Snapshot {
		record: &'static str,
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},

	#[error("error while encoding {format} config for {path}")]
	Encode {
		format: Format,
		path: PathBuf,
		#[source]
		source: CodecError,
	},

	#[error("Failed to create temporary file for {path}")]
	TempFile {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to write temporary file for {path}")]
	Write {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	/// Whatever the caller's validator returned.
	#[error(transparent)]
	Validation(anyhow::Error),

	#[error(transparent)]
	Sync(#[from] SyncError),
}

/// Every failure collected while writing the record to several files.
///
/// Displays like a joined error list: one failure per line.
#[derive(Debug)]
pub struct SyncError {
	failures: Vec<Error>,
}

impl SyncError {
	pub(crate) fn new(failures: Vec<Error>) -> Self {
		Self { failures }
	}

	pub fn failures(&self) -> &[Error] {
		&self.failures
	}

	pub fn into_failures(self) -> Vec<Error> {
		self.failures
	}

	pub fn len(&self) -> usize {
		self.failures.len()
	}

	pub fn is_empty(&self) -> bool {
		self.failures.is_empty()
	}
}

impl fmt::Display for SyncError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (i, failure) in self.failures.iter().enumerate() {
			if i > 0 {
				writeln!(f)?;
			}
			write!(f, "{failure}")?;
		}
		Ok(())
	}
}

impl std::error::Error for SyncError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		self.failures
			.first()
			.map(|failure| failure as &(dyn std::error::Error + 'static))
	}
}

/// Result type alias using confsync's Error.
pub type Result<T> = std::result::Result<T, Error>;
