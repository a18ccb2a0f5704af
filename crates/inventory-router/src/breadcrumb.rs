//! Breadcrumb trails for the detail and form pages.

use serde::Serialize;

use crate::route::AppRoute;

/// One step of a breadcrumb trail. The last step has no link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Breadcrumb {
    pub label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl Breadcrumb {
    pub fn link(label: &'static str, href: impl Into<String>) -> Self {
        Self {
            label,
            href: Some(href.into()),
        }
    }

    pub fn current(label: &'static str) -> Self {
        Self { label, href: None }
    }
}

impl AppRoute {
    /// Breadcrumb trail shown in the page header.
    ///
    /// List pages, the dashboard and the error pages have no trail.
    pub fn breadcrumbs(&self) -> Vec<Breadcrumb> {
        match self {
            AppRoute::ProductDetail { .. } => vec![
                Breadcrumb::link("Products", "/products"),
                Breadcrumb::current("Product Details"),
            ],
            AppRoute::ProductNew => vec![
                Breadcrumb::link("Products", "/products"),
                Breadcrumb::current("New Product"),
            ],
            AppRoute::ProductEdit { id } => vec![
                Breadcrumb::link("Products", "/products"),
                Breadcrumb::link("Product Details", format!("/products/{}", id)),
                Breadcrumb::current("Edit"),
            ],
            AppRoute::CategoryDetail { .. } => vec![
                Breadcrumb::link("Categories", "/categories"),
                Breadcrumb::current("Category Details"),
            ],
            AppRoute::CategoryNew => vec![
                Breadcrumb::link("Categories", "/categories"),
                Breadcrumb::current("New Category"),
            ],
            AppRoute::CategoryEdit { id } => vec![
                Breadcrumb::link("Categories", "/categories"),
                Breadcrumb::link("Category Details", format!("/categories/{}", id)),
                Breadcrumb::current("Edit"),
            ],
            _ => Vec::new(),
        }
    }
}

/// Links offered on the not-found page.
pub const NOT_FOUND_LINKS: &[(&str, &str)] = &[
    ("\u{1f3e0} Go to Dashboard", "/"),
    ("\u{1f4e6} View Products", "/products"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_edit_trail_links_back_to_detail() {
        let crumbs = AppRoute::resolve("/products/42/edit").breadcrumbs();
        assert_eq!(
            crumbs,
            vec![
                Breadcrumb::link("Products", "/products"),
                Breadcrumb::link("Product Details", "/products/42"),
                Breadcrumb::current("Edit"),
            ]
        );
    }

    #[test]
    fn test_new_forms_have_two_steps() {
        let crumbs = AppRoute::resolve("/categories/new").breadcrumbs();
        assert_eq!(crumbs.len(), 2);
        assert_eq!(crumbs[1], Breadcrumb::current("New Category"));
    }

    #[test]
    fn test_detail_trail() {
        let crumbs = AppRoute::resolve("/categories/3").breadcrumbs();
        assert_eq!(crumbs[0].href.as_deref(), Some("/categories"));
        assert_eq!(crumbs[1].label, "Category Details");
        assert!(crumbs[1].href.is_none());
    }

    #[test]
    fn test_top_level_pages_have_no_trail() {
        for path in ["/", "/products", "/categories", "/unauthorized", "/nope"] {
            assert!(AppRoute::resolve(path).breadcrumbs().is_empty());
        }
    }

    #[test]
    fn test_not_found_links() {
        let hrefs: Vec<&str> = NOT_FOUND_LINKS.iter().map(|(_, href)| *href).collect();
        assert_eq!(hrefs, vec!["/", "/products"]);
    }
}
