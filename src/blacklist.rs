/* src/blacklist.rs */

//!
//! Rejection patterns applied to cleaned identifiers.

use std::fmt;
use std::sync::Arc;

use fancy_regex::Regex;

use crate::error::ConfigError;

/// Pattern rejecting any segment that starts with a dot.
pub const DOT_SEGMENT_PATTERN: &str = r"/\.";

/// Something that can reject a cleaned identifier.
pub trait Matcher: Send + Sync {
	/// Returns true when `identifier` must be rejected.
	fn is_match(&self, identifier: &str) -> bool;
}

impl<F> Matcher for F
where
	F: Fn(&str) -> bool + Send + Sync,
{
	fn is_match(&self, identifier: &str) -> bool {
		self(identifier)
	}
}

/// Regex matcher backed by `fancy-regex`.
///
/// The pattern is searched anywhere in the identifier. An engine error
/// (such as hitting the backtrack limit) counts as a match.
#[derive(Debug, Clone)]
pub struct RegexMatcher {
	regex: Regex,
}

impl RegexMatcher {
	pub fn new(pattern: &str) -> Result<Self, ConfigError> {
		Ok(Self {
			regex: Regex::new(pattern)?,
		})
	}

	pub fn as_str(&self) -> &str {
		self.regex.as_str()
	}
}

impl Matcher for RegexMatcher {
	fn is_match(&self, identifier: &str) -> bool {
		self.regex.is_match(identifier).unwrap_or(true)
	}
}

/// Glob matcher backed by `globset`, tested against the whole identifier.
#[cfg(feature = "glob")]
#[derive(Debug, Clone)]
pub struct GlobMatcher {
	set: globset::GlobSet,
}

#[cfg(feature = "glob")]
impl GlobMatcher {
	pub fn new<I, S>(patterns: I) -> Result<Self, ConfigError>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let mut builder = globset::GlobSetBuilder::new();
		for p in patterns {
			builder.add(globset::Glob::new(p.as_ref())?);
		}
		Ok(Self {
			set: builder.build()?,
		})
	}
}

#[cfg(feature = "glob")]
impl Matcher for GlobMatcher {
	fn is_match(&self, identifier: &str) -> bool {
		self.set.is_match(identifier)
	}
}

/// Ordered set of matchers. An identifier is rejected if any of them matches.
#[derive(Clone)]
pub struct Blacklist {
	matchers: Vec<Arc<dyn Matcher>>,
}

impl Blacklist {
	/// A blacklist that rejects nothing.
	pub fn empty() -> Self {
		Self {
			matchers: Vec::new(),
		}
	}

	/// Compiles each pattern into a [`RegexMatcher`], keeping their order.
	pub fn from_patterns<I, S>(patterns: I) -> Result<Self, ConfigError>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let mut list = Self::empty();
		for p in patterns {
			list.push(RegexMatcher::new(p.as_ref())?);
		}
		Ok(list)
	}

	/// Appends a matcher.
	pub fn push(&mut self, matcher: impl Matcher + 'static) {
		self.matchers.push(Arc::new(matcher));
	}

	/// Appends a matcher, builder style.
	pub fn with(mut self, matcher: impl Matcher + 'static) -> Self {
		self.push(matcher);
		self
	}

	pub fn is_match(&self, identifier: &str) -> bool {
		self.matchers.iter().any(|m| m.is_match(identifier))
	}

	pub fn len(&self) -> usize {
		self.matchers.len()
	}

	pub fn is_empty(&self) -> bool {
		self.matchers.is_empty()
	}
}

impl Default for Blacklist {
	/// Rejects hidden files and dot segments anywhere in the identifier.
	fn default() -> Self {
		match RegexMatcher::new(DOT_SEGMENT_PATTERN) {
			Ok(m) => Self::empty().with(m),
			Err(_) => Self::empty().with(|id: &str| id.contains("/.")),
		}
	}
}

impl fmt::Debug for Blacklist {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Blacklist")
			.field("matchers", &self.matchers.len())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default_rejects_dot_segments() {
		let list = Blacklist::default();
		assert_eq!(list.len(), 1);
		assert!(list.is_match("/.env"));
		assert!(list.is_match("/a/.git/config"));
		assert!(list.is_match("/."));
		assert!(!list.is_match("/a/b.jpg"));
		assert!(!list.is_match("/a.b/c"));
	}

	#[test]
	fn test_default_matches_dot_pattern() {
		let default = Blacklist::default();
		let compiled = Blacklist::from_patterns([DOT_SEGMENT_PATTERN]).unwrap();
		for id in ["/.", "/..", "/a/.b", "/a/b", "/a.b/c", "/", "/../x"] {
			assert_eq!(default.is_match(id), compiled.is_match(id), "{id}");
		}
	}

	#[test]
	fn test_empty_rejects_nothing() {
		let list = Blacklist::empty();
		assert!(list.is_empty());
		assert!(!list.is_match("/.env"));
	}

	#[test]
	fn test_from_patterns_any_matches() {
		let list = Blacklist::from_patterns(["\\.exe$", "^/private/"]).unwrap();
		assert_eq!(list.len(), 2);
		assert!(list.is_match("/a/b.exe"));
		assert!(list.is_match("/private/x.jpg"));
		assert!(!list.is_match("/public/x.jpg"));
		// Default dot rule is replaced, not merged.
		assert!(!list.is_match("/.env"));
	}

	#[test]
	fn test_invalid_pattern() {
		let err = Blacklist::from_patterns(["("]).unwrap_err();
		assert!(matches!(err, ConfigError::Pattern(_)));
	}

	#[test]
	fn test_closure_matcher() {
		let list = Blacklist::empty().with(|id: &str| id.ends_with(".tmp"));
		assert!(list.is_match("/upload/x.tmp"));
		assert!(!list.is_match("/upload/x.png"));
	}

	#[cfg(feature = "glob")]
	#[test]
	fn test_glob_matcher() {
		let glob = GlobMatcher::new(["/cache/**", "*.bak"]).unwrap();
		assert!(glob.is_match("/cache/a/b.jpg"));
		assert!(glob.is_match("/x/y.bak"));
		assert!(!glob.is_match("/img/y.jpg"));
	}
}
