//! Topic pattern matching over `/`-separated paths.
//!
//! - `+` matches exactly one level
//! - `#` matches any number of remaining levels, including none; it must
//!   be the last segment of a pattern

/// Check whether a concrete `topic` matches `pattern`.
pub fn matches(pattern: &str, topic: &str) -> bool {
    let mut pattern = pattern.split('/');
    let mut topic = topic.split('/');
    loop {
        match (pattern.next(), topic.next()) {
            (Some("#"), _) => return true,
            (Some("+"), Some(_)) => continue,
            (Some(p), Some(t)) if p == t => continue,
            (None, None) => return true,
            _ => return false,
        }
    }
}

/// The parent of a path: `catalog/rows/3/delete` → `catalog/rows/3`.
///
/// Returns `None` for a single-level path.
pub fn parent(path: &str) -> Option<&str> {
    path.rsplit_once('/').map(|(parent, _)| parent)
}
