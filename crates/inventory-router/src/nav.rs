//! Navigation state: which header link is active for the current path.

use serde::Serialize;

/// Check whether `target_path` is the active navigation entry for
/// `current_path`.
///
/// A target is active when the current path equals it or continues below it
/// (`/products` is active for `/products/42/edit`). The root `/` only matches
/// itself, otherwise it would be active everywhere. Paths are compared as
/// given: no trailing-slash, query or case normalization.
pub fn is_active(current_path: &str, target_path: &str) -> bool {
    if target_path == "/" {
        return current_path == "/";
    }
    current_path == target_path
        || current_path
            .strip_prefix(target_path)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// An entry in the header navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    pub label: &'static str,
    pub href: &'static str,
}

impl NavEntry {
    /// CSS class for this entry given the current path.
    pub fn class(&self, current_path: &str) -> &'static str {
        if is_active(current_path, self.href) {
            "nav-link active"
        } else {
            "nav-link"
        }
    }
}

/// The header navigation entries, in display order.
pub const NAV_ENTRIES: &[NavEntry] = &[
    NavEntry {
        label: "Dashboard",
        href: "/",
    },
    NavEntry {
        label: "Products",
        href: "/products",
    },
    NavEntry {
        label: "Categories",
        href: "/categories",
    },
];

/// The navigation entry that is active for `current_path`, if any.
pub fn active_entry(current_path: &str) -> Option<&'static NavEntry> {
    NAV_ENTRIES
        .iter()
        .find(|entry| is_active(current_path, entry.href))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_requires_exact_match() {
        assert!(is_active("/", "/"));
        for path in ["/products", "/categories/1", "//", "/unauthorized", ""] {
            assert!(!is_active(path, "/"), "root should not be active for {path:?}");
        }
    }

    #[test]
    fn test_exact_and_nested_match() {
        assert!(is_active("/products", "/products"));
        assert!(is_active("/products/42", "/products"));
        assert!(is_active("/products/42/edit", "/products"));
        assert!(is_active("/products/", "/products"));
    }

    #[test]
    fn test_prefix_without_separator_is_not_active() {
        assert!(!is_active("/productsx", "/products"));
        assert!(!is_active("/product", "/products"));
        assert!(!is_active("/categories", "/products"));
    }

    #[test]
    fn test_no_normalization() {
        assert!(!is_active("/Products", "/products"));
        assert!(!is_active("/products?page=2", "/products"));
        assert!(!is_active("/products", "/products/"));
    }

    #[test]
    fn test_nav_classes() {
        let classes: Vec<&str> = NAV_ENTRIES
            .iter()
            .map(|e| e.class("/categories/3/edit"))
            .collect();
        assert_eq!(classes, vec!["nav-link", "nav-link", "nav-link active"]);
    }

    #[test]
    fn test_active_entry() {
        assert_eq!(active_entry("/").map(|e| e.label), Some("Dashboard"));
        assert_eq!(active_entry("/products/new").map(|e| e.label), Some("Products"));
        assert_eq!(active_entry("/nonexistent"), None);
    }
}
