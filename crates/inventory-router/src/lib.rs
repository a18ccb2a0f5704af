//! Client-side routing for the inventory dashboard.
//!
//! The route surface is a fixed table:
//!
//! ```text
//! /                      -> Dashboard
//! /products              -> Products
//! /products/new          -> ProductForm (create)
//! /products/:id          -> ProductDetail
//! /products/:id/edit     -> ProductForm (edit)
//! /categories            -> Categories
//! /categories/new        -> CategoryForm (create)
//! /categories/:id        -> CategoryDetail
//! /categories/:id/edit   -> CategoryForm (edit)
//! /unauthorized          -> Unauthorized
//! *                      -> NotFound
//! ```
//!
//! Everything here is a pure function of the current path and the auth
//! state, so the decisions the UI makes can be checked without a browser.
//!
//! # Usage
//!
//! ```rust
//! use inventory_router::prelude::*;
//!
//! let route = AppRoute::resolve("/products/42/edit");
//! assert_eq!(route.form_mode(), Some(FormMode::Edit("42".to_string())));
//!
//! assert!(is_active("/products/42/edit", "/products"));
//! assert!(!is_active("/products", "/"));
//!
//! let decision = evaluate(&route.requirement(), &AuthState::default(), "/products/42/edit");
//! assert_eq!(decision, GuardDecision::Open);
//! ```

mod breadcrumb;
mod guard;
mod nav;
pub mod prelude;
mod route;

pub use breadcrumb::*;
pub use guard::*;
pub use nav::*;
pub use route::*;

// Re-export leptos_router essentials
pub use leptos_router::{
    components::{Redirect, Router},
    hooks::{use_location, use_navigate},
    NavigateOptions,
};
