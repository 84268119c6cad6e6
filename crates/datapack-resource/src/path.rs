//! # Path Rules
//!
//! A resource `path` is a single string or a non-empty array of strings.
//! Each entry is classified as either a URL or a relative path:
//!
//! - An entry that parses as an absolute URL is a URL, and its scheme must be
//!   `http` or `https`.
//! - Anything else is a relative path. It must not be absolute (`/...`), and
//!   its lexically cleaned form must not start with `..`. Note that this also
//!   rejects names such as `..hidden.csv`.
//!
//! All entries of one list must share the classification of the first entry.
//!
//! The same rules validate a string `schema` reference. Since that is always
//! a single entry, the mixing rule can never fire for schemas.

use serde_json::Value;
use url::Url;

use datapack_core::{json_type_name, PathViolation};

/// Classification of a path entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathKind {
    /// Fully qualified `http`/`https` URL.
    Url,
    /// Path relative to the descriptor's location.
    Relative,
}

impl PathKind {
    /// Lowercase label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Url => "url",
            Self::Relative => "relative",
        }
    }
}

impl std::fmt::Display for PathKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An ordered, non-empty list of path entries sharing one [`PathKind`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourcePaths {
    kind: PathKind,
    entries: Vec<String>,
}

impl ResourcePaths {
    /// Classification shared by every entry.
    pub fn kind(&self) -> PathKind {
        self.kind
    }

    /// Entries in descriptor order.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Iterate entries in descriptor order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Number of entries (always at least one).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no entries. Never true for a parsed list.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Unwrap into the entry list.
    pub fn into_entries(self) -> Vec<String> {
        self.entries
    }
}

/// Validate a raw `path` (or string `schema`) value.
///
/// # Errors
///
/// Returns the first [`PathViolation`] encountered, in entry order.
pub fn parse_paths(value: &Value) -> Result<ResourcePaths, PathViolation> {
    let entries: Vec<String> = match value {
        Value::String(s) => vec![s.clone()],
        Value::Array(items) => {
            if items.is_empty() {
                return Err(PathViolation::EmptyList);
            }
            items
                .iter()
                .map(|item| match item {
                    Value::String(s) => Ok(s.clone()),
                    other => Err(PathViolation::WrongShape {
                        found: json_type_name(other),
                    }),
                })
                .collect::<Result<_, _>>()?
        }
        other => {
            return Err(PathViolation::WrongShape {
                found: json_type_name(other),
            })
        }
    };

    let mut kind = None;
    for entry in &entries {
        let current = classify(entry)?;
        match kind {
            None => kind = Some(current),
            Some(first) if first != current => {
                return Err(PathViolation::MixedKinds {
                    path: entry.clone(),
                });
            }
            Some(_) => {}
        }
    }

    match kind {
        Some(kind) => Ok(ResourcePaths { kind, entries }),
        None => Err(PathViolation::EmptyList),
    }
}

/// Classify and validate a single entry.
///
/// # Errors
///
/// Returns [`PathViolation::UnsupportedScheme`] or
/// [`PathViolation::AbsoluteOrParent`].
pub fn classify(entry: &str) -> Result<PathKind, PathViolation> {
    match Url::parse(entry) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(PathKind::Url),
            scheme => Err(PathViolation::UnsupportedScheme {
                path: entry.to_string(),
                scheme: scheme.to_string(),
            }),
        },
        Err(_) => {
            if entry.starts_with('/') || clean(entry).starts_with("..") {
                Err(PathViolation::AbsoluteOrParent {
                    path: entry.to_string(),
                })
            } else {
                Ok(PathKind::Relative)
            }
        }
    }
}

/// Lexically clean a relative `/`-separated path: drop empty and `.`
/// segments and fold `name/..` pairs. Leading `..` segments are kept. An
/// empty result is `.`.
fn clean(path: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if segments.last().is_some_and(|last| *last != "..") {
                    segments.pop();
                } else {
                    segments.push("..");
                }
            }
            other => segments.push(other),
        }
    }
    if segments.is_empty() {
        ".".to_string()
    } else {
        segments.join("/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn single_relative_path() {
        let paths = parse_paths(&json!("population.csv")).unwrap();
        assert_eq!(paths.kind(), PathKind::Relative);
        assert_eq!(paths.entries(), ["population.csv"]);
    }

    #[test]
    fn url_lists_are_accepted() {
        let paths = parse_paths(&json!(["http://a", "https://b/c.csv"])).unwrap();
        assert_eq!(paths.kind(), PathKind::Url);
        assert_eq!(paths.len(), 2);
    }

    #[test]
    fn relative_lists_are_accepted() {
        let paths = parse_paths(&json!(["a/b", "c/d"])).unwrap();
        assert_eq!(paths.kind(), PathKind::Relative);
        assert_eq!(paths.iter().collect::<Vec<_>>(), vec!["a/b", "c/d"]);
    }

    #[test]
    fn mixing_is_rejected() {
        assert_eq!(
            parse_paths(&json!(["http://a/b", "rel/path"])).unwrap_err(),
            PathViolation::MixedKinds {
                path: "rel/path".to_string()
            }
        );
        assert!(matches!(
            parse_paths(&json!(["rel/path", "https://a/b"])),
            Err(PathViolation::MixedKinds { .. })
        ));
    }

    #[test]
    fn absolute_and_parent_paths_are_rejected() {
        for bad in ["/abs/path", "../up", "a/../../b", "./..", "..hidden.csv", "a/../..b"] {
            assert!(
                matches!(
                    parse_paths(&json!([bad])),
                    Err(PathViolation::AbsoluteOrParent { .. })
                ),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn inner_parent_segments_that_stay_inside_are_accepted() {
        assert!(parse_paths(&json!("a/../b.csv")).is_ok());
        assert!(parse_paths(&json!("./data/x.csv")).is_ok());
        assert!(parse_paths(&json!("a/b/../../c.csv")).is_ok());
    }

    #[test]
    fn non_http_schemes_are_rejected() {
        assert_eq!(
            parse_paths(&json!("ftp://host/file.csv")).unwrap_err(),
            PathViolation::UnsupportedScheme {
                path: "ftp://host/file.csv".to_string(),
                scheme: "ftp".to_string(),
            }
        );
        assert!(matches!(
            classify("file:///etc/passwd"),
            Err(PathViolation::UnsupportedScheme { .. })
        ));
    }

    #[test]
    fn wrong_shapes_are_rejected() {
        assert_eq!(
            parse_paths(&json!(7)).unwrap_err(),
            PathViolation::WrongShape { found: "number" }
        );
        assert_eq!(
            parse_paths(&json!(["a.csv", 3])).unwrap_err(),
            PathViolation::WrongShape { found: "number" }
        );
        assert_eq!(
            parse_paths(&json!({"path": "a"})).unwrap_err(),
            PathViolation::WrongShape { found: "object" }
        );
        assert_eq!(parse_paths(&json!([])).unwrap_err(), PathViolation::EmptyList);
    }

    #[test]
    fn empty_entries_are_relative() {
        assert_eq!(classify(""), Ok(PathKind::Relative));
        let paths = parse_paths(&json!(["", "a.csv"])).unwrap();
        assert_eq!(paths.kind(), PathKind::Relative);
    }

    #[test]
    fn cleaning_folds_inner_segments() {
        assert_eq!(clean(""), ".");
        assert_eq!(clean("./a//b/"), "a/b");
        assert_eq!(clean("a/../b"), "b");
        assert_eq!(clean("a/../../b"), "../b");
        assert_eq!(clean("../../x"), "../../x");
        assert_eq!(clean("..hidden.csv"), "..hidden.csv");
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn plain_relative_segments_are_relative(
                segments in prop::collection::vec("[a-z0-9_]{1,8}", 1..5),
            ) {
                let path = segments.join("/");
                prop_assert_eq!(classify(&path), Ok(PathKind::Relative));
            }

            #[test]
            fn leading_slash_is_always_rejected(rest in "[a-z0-9_/]{0,16}") {
                let path = format!("/{rest}");
                let rejected = matches!(
                    classify(&path),
                    Err(PathViolation::AbsoluteOrParent { .. })
                );
                prop_assert!(rejected);
            }

            #[test]
            fn http_hosts_are_urls(host in "[a-z]{1,10}\\.(com|org|net)", file in "[a-z]{1,8}") {
                let url = format!("https://{host}/{file}.csv");
                prop_assert_eq!(classify(&url), Ok(PathKind::Url));
            }
        }
    }
}
