//! Product inventory dashboard.
//!
//! A client-side Leptos app: a header with the primary navigation, a guarded
//! route table and placeholder pages for products and categories. Routing
//! decisions live in `inventory-router`; the domain types in
//! `inventory-core`.

mod app;
mod browser;
mod components;
mod logging;
mod pages;
pub mod sample;

pub use app::App;
pub use logging::ConsoleSink;
pub use pages::record::{RecordKind, CATEGORY, PRODUCT};
