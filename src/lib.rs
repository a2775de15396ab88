/* src/lib.rs */

//!
//! A filesystem-backed byte store for media services.
//!
//! Identifiers (request paths) are cleaned, checked against a blacklist and a
//! base URI, then mapped onto a root directory. A resolved path can never
//! leave that root.
//!
//! - **store**: [`FileStore`], the path resolver plus load/store on disk.
//! - **memory**: [`MemoryStore`], an in-process store with the same contract.
//! - **chain**: [`Chain`], tries loaders in order and falls through on [`StoreError::Pass`].
//! - **config**: [`StoreConfig`], serde-driven construction from json/toml/yaml.
//!
//! ## Feature Flags
//!
//! - `full`: Enables all features.
//! - `logging`: Emits `log` records for pass decisions, writes and root check failures.
//! - `config`: Enables the `config` module (json, toml, yaml, validation).
//! - `glob`: Enables [`blacklist::GlobMatcher`].
//!
//! ## Basic Usage
//!
//! See `demos/basic.rs` for a complete example.

pub mod blacklist;
pub mod chain;
#[cfg(feature = "config")]
pub mod config;
pub mod error;
mod guard;
pub mod memory;
pub mod path;
pub mod store;

pub use blacklist::{Blacklist, Matcher, RegexMatcher};
pub use chain::Chain;
#[cfg(feature = "config")]
pub use config::{ConfigFormat, StoreConfig};
pub use error::{ConfigError, StoreError};
pub use memory::MemoryStore;
pub use store::{FileStore, FileStoreBuilder};

use async_trait::async_trait;
use std::time::Instant;

/// Per-call context handed to loaders and storages.
///
/// The file store accepts it for interface compatibility only. Neither the
/// deadline nor the request URI affects resolution or I/O, and a write that
/// has started is never aborted.
#[derive(Debug, Clone, Default)]
pub struct Context {
	request_uri: Option<String>,
	deadline: Option<Instant>,
}

impl Context {
	/// Creates an empty context.
	pub fn new() -> Self {
		Self::default()
	}

	/// Attaches the URI of the request that triggered the call.
	pub fn with_request_uri(mut self, uri: impl Into<String>) -> Self {
		self.request_uri = Some(uri.into());
		self
	}

	/// Attaches a deadline.
	pub fn with_deadline(mut self, deadline: Instant) -> Self {
		self.deadline = Some(deadline);
		self
	}

	pub fn request_uri(&self) -> Option<&str> {
		self.request_uri.as_deref()
	}

	pub fn deadline(&self) -> Option<Instant> {
		self.deadline
	}
}

/// Abstract byte source addressed by identifier.
#[async_trait]
pub trait Loader: Send + Sync {
	/// Reads the full payload for `key`.
	///
	/// Returns [`StoreError::Pass`] when the key is not handled here, which
	/// includes a missing file.
	async fn load(&self, ctx: &Context, key: &str) -> Result<Vec<u8>, StoreError>;
}

/// A [`Loader`] that can also persist payloads.
#[async_trait]
pub trait Storage: Loader {
	/// Writes `buf` as the full payload for `key`, replacing any previous one.
	async fn store(&self, ctx: &Context, key: &str, buf: &[u8]) -> Result<(), StoreError>;
}
