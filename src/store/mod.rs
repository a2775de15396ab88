/* src/store/mod.rs */

//!
//! Filesystem store rooted at a single directory.

mod read;
mod write;

use std::path::{Path, PathBuf};

use crate::blacklist::{Blacklist, Matcher};
use crate::guard::RootCheck;
use crate::path;

/// Default base URI.
pub const DEFAULT_BASE_URI: &str = "/";

/// A store that maps identifiers onto files under `root`.
///
/// Configuration is fixed at construction. The only mutable state is the
/// root existence check, which runs on the first write and is cached.
#[derive(Debug)]
pub struct FileStore {
	root: PathBuf,
	base_uri: String,
	blacklist: Blacklist,
	root_check: RootCheck,
}

/// Builder for [`FileStore`]. Setters apply in call order.
pub struct FileStoreBuilder {
	root: PathBuf,
	base_uri: String,
	blacklist: Blacklist,
}

impl FileStoreBuilder {
	pub fn new(root: impl Into<PathBuf>) -> Self {
		Self {
			root: root.into(),
			base_uri: DEFAULT_BASE_URI.to_string(),
			blacklist: Blacklist::default(),
		}
	}

	/// Sets the logical prefix identifiers must carry.
	pub fn base_uri(mut self, base_uri: impl Into<String>) -> Self {
		self.base_uri = base_uri.into();
		self
	}

	/// Replaces the blacklist, including the default dot-segment rule.
	pub fn blacklist(mut self, blacklist: Blacklist) -> Self {
		self.blacklist = blacklist;
		self
	}

	/// Appends one matcher to the current blacklist.
	pub fn matcher(mut self, matcher: impl Matcher + 'static) -> Self {
		self.blacklist.push(matcher);
		self
	}

	pub fn build(self) -> FileStore {
		FileStore {
			root: self.root,
			base_uri: path::normalize_base_uri(&self.base_uri),
			blacklist: self.blacklist,
			root_check: RootCheck::new(),
		}
	}
}

impl FileStore {
	/// Creates a store with the default base URI and blacklist.
	pub fn new(root: impl Into<PathBuf>) -> Self {
		Self::builder(root).build()
	}

	pub fn builder(root: impl Into<PathBuf>) -> FileStoreBuilder {
		FileStoreBuilder::new(root)
	}

	pub fn root(&self) -> &Path {
		&self.root
	}

	/// The normalized base URI, always `/` or `/<prefix>/`.
	pub fn base_uri(&self) -> &str {
		&self.base_uri
	}

	pub fn blacklist(&self) -> &Blacklist {
		&self.blacklist
	}

	/// Resolves `key` to a path under the root.
	///
	/// Returns `None` when the key is blacklisted or lies outside the base
	/// URI. The blacklist sees the full cleaned identifier, before the base
	/// URI is stripped.
	pub fn path(&self, key: &str) -> Option<PathBuf> {
		let image = path::clean(key);
		if self.blacklist.is_match(&image) {
			return None;
		}
		let rest = image.strip_prefix(self.base_uri.as_str())?;
		Some(path::join_clean(&self.root, rest))
	}
}
