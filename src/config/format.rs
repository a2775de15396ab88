/* src/config/format.rs */

use serde::de::DeserializeOwned;

use crate::error::ConfigError;

/// Supported config file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
	Json,
	Toml,
	Yaml,
}

impl ConfigFormat {
	/// List of supported extensions.
	pub fn extensions(&self) -> &'static [&'static str] {
		match self {
			Self::Json => &["json"],
			Self::Toml => &["toml"],
			Self::Yaml => &["yaml", "yml"],
		}
	}

	/// Picks the format whose extension list contains `ext`.
	pub fn from_extension(ext: &str) -> Option<Self> {
		[Self::Json, Self::Toml, Self::Yaml]
			.into_iter()
			.find(|f| f.extensions().contains(&ext))
	}

	/// Parse the raw bytes into the target type.
	pub fn parse<T: DeserializeOwned>(&self, input: &[u8]) -> Result<T, ConfigError> {
		match self {
			Self::Json => {
				serde_json::from_slice(input).map_err(|e| ConfigError::Parse(e.to_string()))
			}
			Self::Toml => {
				let s = std::str::from_utf8(input).map_err(|e| ConfigError::Parse(e.to_string()))?;
				toml::from_str(s).map_err(|e| ConfigError::Parse(e.to_string()))
			}
			Self::Yaml => {
				serde_yaml::from_slice(input).map_err(|e| ConfigError::Parse(e.to_string()))
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_from_extension() {
		assert_eq!(ConfigFormat::from_extension("json"), Some(ConfigFormat::Json));
		assert_eq!(ConfigFormat::from_extension("yml"), Some(ConfigFormat::Yaml));
		assert_eq!(ConfigFormat::from_extension("toml"), Some(ConfigFormat::Toml));
		assert_eq!(ConfigFormat::from_extension("ini"), None);
	}

	#[test]
	fn test_parse_error() {
		let res: Result<serde_json::Value, _> = ConfigFormat::Json.parse(b"{");
		assert!(matches!(res, Err(ConfigError::Parse(_))));
	}
}
