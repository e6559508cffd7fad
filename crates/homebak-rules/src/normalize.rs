//! Pattern normalization.
//!
//! Turns a configured pattern into a home-relative path. Prefixes are
//! removed by exact comparison, never by trimming a set of characters.

use std::borrow::Cow;

/// Normalize a raw pattern against the home directory.
///
/// Returns `None` when the pattern is absolute but outside `home`, or when
/// nothing remains after normalization.
pub fn normalize(raw: &str, home: &str) -> Option<String> {
    let home: Cow<'_, str> = if home.ends_with('/') {
        Cow::Borrowed(home)
    } else {
        Cow::Owned(format!("{}/", home))
    };

    let mut path = raw.strip_prefix("~/").unwrap_or(raw);

    if path.starts_with('/') {
        path = path.strip_prefix(&*home)?;
    }

    let path = path.strip_suffix('/').unwrap_or(path);

    if path.is_empty() {
        None
    } else {
        Some(path.to_string())
    }
}
