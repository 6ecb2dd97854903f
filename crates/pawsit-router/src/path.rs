//! URL path validation and normalization.
//!
//! All functions here are pure and allocation-free for paths that are already
//! canonical, so the registry's lookup fast path never copies.

use std::borrow::Cow;

/// Checks whether a path is already in canonical form.
///
/// # Rules
///
/// - Must start with `/`
/// - Must not contain empty segments (`//`)
/// - Must not end with `/`, except the root itself
///
/// # Examples
///
/// ```
/// use pawsit_router::path::is_canonical_path;
///
/// assert!(is_canonical_path("/"));
/// assert!(is_canonical_path("/find_caretaker"));
///
/// assert!(!is_canonical_path(""));
/// assert!(!is_canonical_path("home"));
/// assert!(!is_canonical_path("/home/"));
/// assert!(!is_canonical_path("/home//pets"));
/// ```
pub fn is_canonical_path(path: &str) -> bool {
    if !path.starts_with('/') {
        return false;
    }
    if path == "/" {
        return true;
    }
    !path.ends_with('/') && !path.contains("//")
}

/// Normalizes a URL path to canonical form.
///
/// Returns `Cow::Borrowed` when the input is already canonical (zero
/// allocations) and `Cow::Owned` otherwise. Trailing slashes and empty
/// segments are dropped; empty input normalizes to the root.
///
/// # Examples
///
/// ```
/// use pawsit_router::path::normalize_path;
/// use std::borrow::Cow;
///
/// let path = normalize_path("/booking_info");
/// assert!(matches!(path, Cow::Borrowed("/booking_info")));
///
/// assert_eq!(normalize_path("/booking_info/"), "/booking_info");
/// assert_eq!(normalize_path("//home"), "/home");
/// assert_eq!(normalize_path(""), "/");
/// ```
pub fn normalize_path(path: &str) -> Cow<'_, str> {
    // Fast path: already canonical, return borrowed.
    if is_canonical_path(path) {
        return Cow::Borrowed(path);
    }

    let joined = path
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("/");

    if joined.is_empty() {
        Cow::Borrowed("/")
    } else {
        Cow::Owned(format!("/{joined}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_canonical_path() {
        assert!(is_canonical_path("/"));
        assert!(is_canonical_path("/home"));
        assert!(is_canonical_path("/all_bookings_info"));

        assert!(!is_canonical_path(""));
        assert!(!is_canonical_path("home"));
        assert!(!is_canonical_path("/home/"));
        assert!(!is_canonical_path("/home//pets"));
    }

    #[test]
    fn test_normalize_valid_is_zero_copy() {
        assert!(matches!(normalize_path("/home"), Cow::Borrowed("/home")));
        assert!(matches!(normalize_path("/"), Cow::Borrowed("/")));
    }

    #[test]
    fn test_normalize_trailing_slash() {
        assert_eq!(normalize_path("/home/"), "/home");
        assert_eq!(normalize_path("/pet_info///"), "/pet_info");
    }

    #[test]
    fn test_normalize_duplicate_slashes() {
        assert_eq!(normalize_path("//signin"), "/signin");
        assert_eq!(normalize_path("/owner//info"), "/owner/info");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("///"), "/");
    }

    #[test]
    fn test_normalize_missing_leading_slash() {
        assert_eq!(normalize_path("home"), "/home");
    }
}
