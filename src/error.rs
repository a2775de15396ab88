/* src/error.rs */

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

/// Errors returned by [`Loader`](crate::Loader) and [`Storage`](crate::Storage) calls.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
	/// The identifier is outside this store's jurisdiction, or (on load) the
	/// file does not exist. Callers chaining stores should try the next one.
	#[error("pass")]
	Pass,

	/// IO error from the filesystem, surfaced as-is.
	#[error("io error: {0}")]
	Io(#[from] io::Error),

	/// The root directory was missing when it was first checked.
	///
	/// The same `source` is returned for every later write on this store.
	#[error("root unavailable: {}: {source}", .root.display())]
	RootUnavailable {
		root: PathBuf,
		source: Arc<io::Error>,
	},
}

impl StoreError {
	/// Returns true for the jurisdiction-miss sentinel.
	pub fn is_pass(&self) -> bool {
		matches!(self, Self::Pass)
	}
}

/// Errors raised while building a store from patterns or configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	/// A blacklist regex failed to compile.
	#[error("invalid pattern: {0}")]
	Pattern(#[from] fancy_regex::Error),

	/// A blacklist glob failed to compile.
	#[cfg(feature = "glob")]
	#[error("glob pattern error: {0}")]
	Glob(#[from] globset::Error),

	/// Parsing error from a config format.
	#[error("parse error: {0}")]
	Parse(String),

	/// The file extension does not map to a known format.
	#[error("unsupported config format: {0}")]
	UnsupportedFormat(String),

	/// The config uses an option whose cargo feature is not enabled.
	#[error("feature `{0}` is not enabled")]
	FeatureDisabled(&'static str),

	/// IO error while reading a config file.
	#[error("io error: {0}")]
	Io(#[from] io::Error),

	/// Validation error from validator crate.
	#[cfg(feature = "config")]
	#[error("validation failed: {0}")]
	Validation(#[from] validator::ValidationErrors),
}
