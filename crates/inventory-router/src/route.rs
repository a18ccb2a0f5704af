//! The route table and path matching.

use std::fmt;

use inventory_core::{CategoryId, ProductId};
use serde::Serialize;

use crate::guard::AccessRequirement;

/// A resolved page of the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Dashboard,
    Products,
    ProductNew,
    ProductDetail { id: ProductId },
    ProductEdit { id: ProductId },
    Categories,
    CategoryNew,
    CategoryDetail { id: CategoryId },
    CategoryEdit { id: CategoryId },
    Unauthorized,
    /// Anything that matched no pattern, with the path that was asked for.
    NotFound { path: String },
}

/// Whether a form page creates a record or edits an existing one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "mode", content = "id", rename_all = "snake_case")]
pub enum FormMode {
    Create,
    Edit(String),
}

impl FormMode {
    /// Edit mode when an id is present, create mode otherwise.
    pub fn from_id(id: Option<String>) -> Self {
        match id {
            Some(id) if !id.is_empty() => FormMode::Edit(id),
            _ => FormMode::Create,
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self, FormMode::Edit(_))
    }

    pub fn id(&self) -> Option<&str> {
        match self {
            FormMode::Create => None,
            FormMode::Edit(id) => Some(id),
        }
    }
}

impl AppRoute {
    /// Match a URL pathname against the route table.
    ///
    /// One trailing slash is ignored, so `/products/` is the products list.
    /// Otherwise segments are compared exactly: `/Products` and
    /// `/products//edit` match nothing. The literal `new` wins over `:id`
    /// when it is the last segment; any other non-empty segment is taken as
    /// the id.
    pub fn resolve(path: &str) -> Self {
        let not_found = || AppRoute::NotFound {
            path: path.to_string(),
        };

        let trimmed = match path.strip_suffix('/') {
            Some(rest) if !rest.is_empty() => rest,
            _ => path,
        };
        let Some(rest) = trimmed.strip_prefix('/') else {
            return not_found();
        };
        if rest.is_empty() {
            return AppRoute::Dashboard;
        }

        let segments: Vec<&str> = rest.split('/').collect();
        match segments.as_slice() {
            ["products"] => AppRoute::Products,
            ["products", "new"] => AppRoute::ProductNew,
            ["products", id] if !id.is_empty() => AppRoute::ProductDetail {
                id: ProductId::new(*id),
            },
            ["products", id, "edit"] if !id.is_empty() => AppRoute::ProductEdit {
                id: ProductId::new(*id),
            },
            ["categories"] => AppRoute::Categories,
            ["categories", "new"] => AppRoute::CategoryNew,
            ["categories", id] if !id.is_empty() => AppRoute::CategoryDetail {
                id: CategoryId::new(*id),
            },
            ["categories", id, "edit"] if !id.is_empty() => AppRoute::CategoryEdit {
                id: CategoryId::new(*id),
            },
            ["unauthorized"] => AppRoute::Unauthorized,
            _ => not_found(),
        }
    }

    /// The canonical path of this route.
    pub fn href(&self) -> String {
        match self {
            AppRoute::Dashboard => "/".to_string(),
            AppRoute::Products => "/products".to_string(),
            AppRoute::ProductNew => "/products/new".to_string(),
            AppRoute::ProductDetail { id } => format!("/products/{}", id),
            AppRoute::ProductEdit { id } => format!("/products/{}/edit", id),
            AppRoute::Categories => "/categories".to_string(),
            AppRoute::CategoryNew => "/categories/new".to_string(),
            AppRoute::CategoryDetail { id } => format!("/categories/{}", id),
            AppRoute::CategoryEdit { id } => format!("/categories/{}/edit", id),
            AppRoute::Unauthorized => "/unauthorized".to_string(),
            AppRoute::NotFound { path } => path.clone(),
        }
    }

    /// The table entry this route was matched by.
    pub fn entry(&self) -> &'static RouteEntry {
        let page = match self {
            AppRoute::Dashboard => Page::Dashboard,
            AppRoute::Products => Page::Products,
            AppRoute::ProductNew | AppRoute::ProductEdit { .. } => Page::ProductForm,
            AppRoute::ProductDetail { .. } => Page::ProductDetail,
            AppRoute::Categories => Page::Categories,
            AppRoute::CategoryNew | AppRoute::CategoryEdit { .. } => Page::CategoryForm,
            AppRoute::CategoryDetail { .. } => Page::CategoryDetail,
            AppRoute::Unauthorized => Page::Unauthorized,
            AppRoute::NotFound { .. } => Page::NotFound,
        };
        let pattern = match self {
            AppRoute::ProductNew => "/products/new",
            AppRoute::ProductEdit { .. } => "/products/:id/edit",
            AppRoute::CategoryNew => "/categories/new",
            AppRoute::CategoryEdit { .. } => "/categories/:id/edit",
            _ => "",
        };
        ROUTE_TABLE
            .iter()
            .find(|e| e.page == page && (pattern.is_empty() || e.pattern == pattern))
            .unwrap_or(&ROUTE_TABLE[ROUTE_TABLE.len() - 1])
    }

    /// The page component that renders this route.
    pub fn page(&self) -> Page {
        self.entry().page
    }

    /// What the guard requires before rendering this route.
    pub fn requirement(&self) -> AccessRequirement {
        if self.entry().guarded {
            AccessRequirement::authenticated()
        } else {
            AccessRequirement::public()
        }
    }

    /// Create/edit mode for the form pages.
    pub fn form_mode(&self) -> Option<FormMode> {
        match self {
            AppRoute::ProductNew | AppRoute::CategoryNew => Some(FormMode::Create),
            AppRoute::ProductEdit { id } => Some(FormMode::Edit(id.to_string())),
            AppRoute::CategoryEdit { id } => Some(FormMode::Edit(id.to_string())),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, AppRoute::NotFound { .. })
    }
}

impl fmt::Display for AppRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.href())
    }
}

/// Page components of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Page {
    Dashboard,
    Products,
    ProductDetail,
    ProductForm,
    Categories,
    CategoryDetail,
    CategoryForm,
    Unauthorized,
    NotFound,
}

impl Page {
    /// Document title for the page.
    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Products => "Products",
            Page::ProductDetail => "Product Details",
            Page::ProductForm => "Product Form",
            Page::Categories => "Categories",
            Page::CategoryDetail => "Category Details",
            Page::CategoryForm => "Category Form",
            Page::Unauthorized => "Unauthorized",
            Page::NotFound => "Page Not Found",
        }
    }
}

/// One row of the route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RouteEntry {
    /// Path pattern, `:id` marks the parameter segment.
    pub pattern: &'static str,
    pub page: Page,
    /// Whether the page sits behind the route guard.
    pub guarded: bool,
}

/// Every route, in match priority order. The catch-all is last.
pub const ROUTE_TABLE: &[RouteEntry] = &[
    RouteEntry { pattern: "/", page: Page::Dashboard, guarded: true },
    RouteEntry { pattern: "/products", page: Page::Products, guarded: true },
    RouteEntry { pattern: "/products/new", page: Page::ProductForm, guarded: true },
    RouteEntry { pattern: "/products/:id", page: Page::ProductDetail, guarded: true },
    RouteEntry { pattern: "/products/:id/edit", page: Page::ProductForm, guarded: true },
    RouteEntry { pattern: "/categories", page: Page::Categories, guarded: true },
    RouteEntry { pattern: "/categories/new", page: Page::CategoryForm, guarded: true },
    RouteEntry { pattern: "/categories/:id", page: Page::CategoryDetail, guarded: true },
    RouteEntry { pattern: "/categories/:id/edit", page: Page::CategoryForm, guarded: true },
    RouteEntry { pattern: "/unauthorized", page: Page::Unauthorized, guarded: false },
    RouteEntry { pattern: "*", page: Page::NotFound, guarded: false },
];
