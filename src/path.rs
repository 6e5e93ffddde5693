//! Conversions between slash-delimited paths, segment lists and dot-paths.
//!
//! Document stores address data as `collection/doc/subcollection/doc`;
//! the state tree addresses the same location as `collection.doc.subcollection.doc`.
//! Empty segments (leading, trailing or doubled separators) are always dropped.

/// Split a slash-delimited path into its non-empty segments.
///
/// # Examples
///
/// ```
/// use pathfold::path::to_segments;
///
/// assert_eq!(to_segments("/users//alice/"), vec!["users", "alice"]);
/// assert!(to_segments("").is_empty());
/// ```
pub fn to_segments(path: &str) -> Vec<&str> {
    split_on(path, '/')
}

/// Normalize a slash-delimited path, dropping empty segments.
///
/// # Examples
///
/// ```
/// use pathfold::path::to_slash_path;
///
/// assert_eq!(to_slash_path("/users//alice/"), "users/alice");
/// ```
pub fn to_slash_path(path: &str) -> String {
    to_segments(path).join("/")
}

/// Convert a slash-delimited path into a dot-path.
///
/// # Examples
///
/// ```
/// use pathfold::path::to_dot_path;
///
/// assert_eq!(to_dot_path("users/alice/posts"), "users.alice.posts");
/// ```
pub fn to_dot_path(path: &str) -> String {
    to_segments(path).join(".")
}

/// Split a dot-path into its non-empty segments.
pub fn dot_segments(path: &str) -> Vec<&str> {
    split_on(path, '.')
}

fn split_on(path: &str, separator: char) -> Vec<&str> {
    path.split(separator).filter(|s| !s.is_empty()).collect()
}
