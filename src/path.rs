/* src/path.rs */

//!
//! Lexical path cleaning for identifiers and resolved filesystem paths.
//!
//! Nothing here touches the filesystem. [`clean`] keeps unresolved leading
//! `..` segments of a relative identifier so blacklists can see them;
//! [`join_clean`] drops any `..` that would climb out of the root.

use std::path::{Component, Path, PathBuf};

/// Cleans an identifier into a slash-prefixed string.
///
/// A literal `:/` is escaped to `%3A/` first so a scheme-shaped prefix such
/// as `http://host` stays a single segment instead of collapsing into the
/// path. Repeated separators, `.` segments and trailing slashes are removed.
///
/// A rooted identifier drops `..` at the top (`/../x` is `/x`). A relative
/// one keeps them (`../x` is `/../x`), and cleans to `/.` when nothing is
/// left, as the empty identifier does.
pub fn clean(identifier: &str) -> String {
	let escaped = identifier.replace(":/", "%3A/");
	let rooted = escaped.starts_with('/');

	let mut segments: Vec<String> = Vec::new();
	for component in Path::new(&escaped).components() {
		match component {
			Component::Normal(s) => segments.push(s.to_string_lossy().into_owned()),
			Component::ParentDir => match segments.last() {
				Some(last) if last != ".." => {
					segments.pop();
				}
				_ if rooted => {}
				_ => segments.push("..".to_string()),
			},
			Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
		}
	}

	if segments.is_empty() && !rooted {
		return "/.".to_string();
	}
	format!("/{}", segments.join("/"))
}

/// Normalizes a base URI to `/<trimmed>/`, or `/` when nothing remains.
pub fn normalize_base_uri(base: &str) -> String {
	let trimmed = base.trim_matches('/');
	if trimmed.is_empty() {
		"/".to_string()
	} else {
		format!("/{trimmed}/")
	}
}

/// Joins `rest` onto `root` and lexically normalizes the result.
///
/// `root` is normalized on its own first; a relative root keeps its leading
/// `..` segments. A `..` in `rest` only removes components that `rest`
/// itself added, so the result never leaves `root`. An empty result becomes
/// `.`.
pub fn join_clean(root: &Path, rest: &str) -> PathBuf {
	let mut out = PathBuf::new();
	let mut depth = 0usize;
	for component in root.components() {
		match component {
			Component::Prefix(_) | Component::RootDir => out.push(component),
			Component::CurDir => {}
			Component::ParentDir => {
				if depth > 0 {
					out.pop();
					depth -= 1;
				} else if !out.has_root() {
					out.push("..");
				}
			}
			Component::Normal(s) => {
				out.push(s);
				depth += 1;
			}
		}
	}

	let mut rest_depth = 0usize;
	for component in Path::new(rest.trim_start_matches('/')).components() {
		match component {
			Component::Normal(s) => {
				out.push(s);
				rest_depth += 1;
			}
			Component::ParentDir => {
				if rest_depth > 0 {
					out.pop();
					rest_depth -= 1;
				}
			}
			Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
		}
	}

	if out.as_os_str().is_empty() {
		out.push(".");
	}
	out
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_clean_basic() {
		assert_eq!(clean("/a/b.jpg"), "/a/b.jpg");
		assert_eq!(clean("a/b.jpg"), "/a/b.jpg");
		assert_eq!(clean("//a///b/"), "/a/b");
		assert_eq!(clean("/a/./b"), "/a/b");
		assert_eq!(clean("/"), "/");
	}

	#[test]
	fn test_clean_parent_segments() {
		assert_eq!(clean("/a/../b"), "/b");
		assert_eq!(clean("/a/b/../../../c"), "/c");
		assert_eq!(clean("/.."), "/");
	}

	#[test]
	fn test_clean_keeps_leading_parent_of_relative() {
		assert_eq!(clean("../../etc/passwd"), "/../../etc/passwd");
		assert_eq!(clean("a/../../b"), "/../b");
		assert_eq!(clean(".."), "/..");
		assert_eq!(clean("a/.."), "/.");
		assert_eq!(clean("./"), "/.");
	}

	#[test]
	fn test_clean_escapes_scheme() {
		assert_eq!(clean("http://host/a.jpg"), "/http%3A/host/a.jpg");
		assert_eq!(clean("http://evil/../../etc/passwd"), "/etc/passwd");
		assert_eq!(clean("http://evil/../../../etc/passwd"), "/../etc/passwd");
	}

	#[test]
	fn test_clean_empty() {
		assert_eq!(clean(""), "/.");
	}

	#[test]
	fn test_clean_idempotent() {
		for id in ["/a/b", "x/../y//z", "http://h/p", "", "/.hidden/../v"] {
			let once = clean(id);
			assert_eq!(clean(id), once);
		}
	}

	#[test]
	fn test_normalize_base_uri() {
		assert_eq!(normalize_base_uri("/"), "/");
		assert_eq!(normalize_base_uri(""), "/");
		assert_eq!(normalize_base_uri("///"), "/");
		assert_eq!(normalize_base_uri("x"), "/x/");
		assert_eq!(normalize_base_uri("/x/"), "/x/");
		assert_eq!(normalize_base_uri("/x/y//"), "/x/y/");
	}

	#[test]
	fn test_join_clean() {
		assert_eq!(join_clean(Path::new("/data"), "a/b.jpg"), PathBuf::from("/data/a/b.jpg"));
		assert_eq!(join_clean(Path::new("/data/"), "/a"), PathBuf::from("/data/a"));
		assert_eq!(join_clean(Path::new("./data/"), "a"), PathBuf::from("data/a"));
		assert_eq!(join_clean(Path::new("/data"), ""), PathBuf::from("/data"));
		assert_eq!(join_clean(Path::new("."), ""), PathBuf::from("."));
		assert_eq!(join_clean(Path::new("../data"), "a"), PathBuf::from("../data/a"));
		assert_eq!(join_clean(Path::new("/data/x/.."), "a"), PathBuf::from("/data/a"));
	}

	#[test]
	fn test_join_clean_rest_cannot_climb_root() {
		assert_eq!(join_clean(Path::new("/data"), "../../etc"), PathBuf::from("/data/etc"));
		assert_eq!(join_clean(Path::new("/data/x"), "a/../../b"), PathBuf::from("/data/x/b"));
		assert_eq!(join_clean(Path::new("data"), ".."), PathBuf::from("data"));
		assert_eq!(join_clean(Path::new("../data"), "../x"), PathBuf::from("../data/x"));
	}
}
