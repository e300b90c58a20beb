//! Path utilities for validation, normalization and location splitting
//!
//! All functions are **pure**: given same input, always produce same output with no side effects.

use std::borrow::Cow;

/// Validates if a path is in canonical form
///
/// # Rules
///
/// - Must start with `/`
/// - Must not contain `//` or `\`
/// - Must not end with `/` (except root `/`)
/// - Must not be empty
///
/// # Examples
///
/// ```
/// use storefront_router::path::is_valid_path;
///
/// assert!(is_valid_path("/"));
/// assert!(is_valid_path("/cart"));
/// assert!(is_valid_path("/products/42/edit"));
///
/// assert!(!is_valid_path(""));
/// assert!(!is_valid_path("cart"));
/// assert!(!is_valid_path("/cart/"));
/// assert!(!is_valid_path("/products//add"));
/// assert!(!is_valid_path("/products\\add"));
/// ```
pub fn is_valid_path(path: &str) -> bool {
    if path.is_empty() || !path.starts_with('/') {
        return false;
    }

    if path.contains("//") || path.contains('\\') {
        return false;
    }

    path == "/" || !path.ends_with('/')
}

/// Normalize a path to canonical form
///
/// Returns `Cow::Borrowed` when input is already valid (zero allocations),
/// `Cow::Owned` when normalization was needed.
///
/// - Trailing slashes: `/cart/` → `/cart`
/// - Double slashes: `/products//add` → `/products/add`
/// - Backslashes: `\products\add` → `/products/add`
///
/// # Examples
///
/// ```
/// use storefront_router::path::normalize_path;
/// use std::borrow::Cow;
///
/// assert!(matches!(normalize_path("/cart"), Cow::Borrowed("/cart")));
/// assert_eq!(normalize_path("/cart/"), "/cart");
/// assert_eq!(normalize_path("\\product\\42"), "/product/42");
/// assert_eq!(normalize_path(""), "/");
/// ```
pub fn normalize_path(path: &str) -> Cow<'_, str> {
    if is_valid_path(path) {
        return Cow::Borrowed(path);
    }

    let normalized = path
        .replace('\\', "/")
        .split('/')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/");

    if normalized.is_empty() {
        Cow::Borrowed("/")
    } else {
        Cow::Owned(format!("/{}", normalized))
    }
}

/// A requested location split into its path, query and fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location<'a> {
    pub path: &'a str,
    pub query: Option<&'a str>,
    pub fragment: Option<&'a str>,
}

/// Splits `?query` and `#fragment` off a location
///
/// The fragment is split first, so a `?` inside the fragment stays there.
///
/// # Examples
///
/// ```
/// use storefront_router::path::split_location;
///
/// let loc = split_location("/cart?coupon=SPRING#summary");
/// assert_eq!(loc.path, "/cart");
/// assert_eq!(loc.query, Some("coupon=SPRING"));
/// assert_eq!(loc.fragment, Some("summary"));
/// ```
pub fn split_location(location: &str) -> Location<'_> {
    let (rest, fragment) = match location.split_once('#') {
        Some((rest, fragment)) => (rest, Some(fragment)),
        None => (location, None),
    };
    let (path, query) = match rest.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (rest, None),
    };
    Location {
        path,
        query,
        fragment,
    }
}

/// Strips a mount prefix such as `/shop` from a path
///
/// Returns `None` when the path lives outside the prefix. A root prefix
/// (`/` or empty) leaves the path untouched.
///
/// # Examples
///
/// ```
/// use storefront_router::path::strip_base_path;
///
/// assert_eq!(strip_base_path("/shop/cart", "/shop"), Some("/cart"));
/// assert_eq!(strip_base_path("/shop", "/shop"), Some("/"));
/// assert_eq!(strip_base_path("/shopping", "/shop"), None);
/// assert_eq!(strip_base_path("/cart", "/"), Some("/cart"));
/// ```
pub fn strip_base_path<'a>(path: &'a str, base: &str) -> Option<&'a str> {
    strip_base_path_with_options(path, base, false)
}

/// Strips a mount prefix, optionally ignoring ASCII case
///
/// # Examples
///
/// ```
/// use storefront_router::path::strip_base_path_with_options;
///
/// assert_eq!(strip_base_path_with_options("/SHOP/cart", "/shop", true), Some("/cart"));
/// assert_eq!(strip_base_path_with_options("/SHOP/cart", "/shop", false), None);
/// ```
pub fn strip_base_path_with_options<'a>(
    path: &'a str,
    base: &str,
    case_insensitive: bool,
) -> Option<&'a str> {
    let base = base.trim_end_matches('/');
    if base.is_empty() {
        return Some(path);
    }

    let prefix = path.get(..base.len())?;
    let prefix_matches = if case_insensitive {
        prefix.eq_ignore_ascii_case(base)
    } else {
        prefix == base
    };
    if !prefix_matches {
        return None;
    }

    match &path[base.len()..] {
        "" => Some("/"),
        rest if rest.starts_with('/') => Some(rest),
        _ => None,
    }
}

/// Non-empty components of a path, in order
pub fn components(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}
