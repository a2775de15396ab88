/* src/config/mod.rs */

//!
//! Building a [`FileStore`] from a json, toml or yaml document.
//!
//! ```toml
//! root = "/srv/media"
//! base_uri = "/images"
//! blacklist = ["/\\.", "\\.exe$"]
//! ```

mod format;

pub use format::ConfigFormat;

use std::path::Path;

use serde::Deserialize;
use validator::Validate;

use crate::blacklist::Blacklist;
use crate::error::ConfigError;
use crate::store::{DEFAULT_BASE_URI, FileStore};

fn default_base_uri() -> String {
	DEFAULT_BASE_URI.to_string()
}

/// Serializable store configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
pub struct StoreConfig {
	/// Directory all files live under.
	#[validate(length(min = 1))]
	pub root: String,

	/// Logical prefix identifiers must carry. Defaults to `/`.
	#[serde(default = "default_base_uri")]
	pub base_uri: String,

	/// Regex patterns replacing the default dot-segment rule. An empty list
	/// disables the blacklist; a missing one keeps the default.
	#[serde(default)]
	pub blacklist: Option<Vec<String>>,

	/// Glob patterns appended after the regex blacklist.
	#[serde(default)]
	pub glob_blacklist: Option<Vec<String>>,
}

impl StoreConfig {
	/// A config with the given root and every other field at its default.
	pub fn new(root: impl Into<String>) -> Self {
		Self {
			root: root.into(),
			base_uri: default_base_uri(),
			blacklist: None,
			glob_blacklist: None,
		}
	}

	/// Parses and validates a config document.
	pub fn parse(input: &[u8], format: ConfigFormat) -> Result<Self, ConfigError> {
		let config: Self = format.parse(input)?;
		config.validate()?;
		Ok(config)
	}

	/// Reads a config file, selecting the parser by extension.
	pub async fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
		let path = path.as_ref();
		let ext = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
		let format = ConfigFormat::from_extension(ext)
			.ok_or_else(|| ConfigError::UnsupportedFormat(path.display().to_string()))?;

		let bytes = tokio::fs::read(path).await?;
		Self::parse(&bytes, format)
	}

	/// Compiles the patterns into a blacklist.
	pub fn blacklist(&self) -> Result<Blacklist, ConfigError> {
		#[cfg_attr(not(feature = "glob"), allow(unused_mut))]
		let mut list = match &self.blacklist {
			Some(patterns) => Blacklist::from_patterns(patterns)?,
			None => Blacklist::default(),
		};

		if let Some(globs) = &self.glob_blacklist {
			#[cfg(feature = "glob")]
			{
				if !globs.is_empty() {
					list.push(crate::blacklist::GlobMatcher::new(globs)?);
				}
			}
			#[cfg(not(feature = "glob"))]
			{
				if !globs.is_empty() {
					return Err(ConfigError::FeatureDisabled("glob"));
				}
			}
		}

		Ok(list)
	}
}

impl FileStore {
	/// Builds a store from a validated config.
	pub fn from_config(config: &StoreConfig) -> Result<Self, ConfigError> {
		config.validate()?;
		Ok(Self::builder(&config.root)
			.base_uri(config.base_uri.as_str())
			.blacklist(config.blacklist()?)
			.build())
	}
}
