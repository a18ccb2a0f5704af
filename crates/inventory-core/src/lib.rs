//! Domain types for the product inventory dashboard.
//!
//! This crate holds everything the dashboard knows about its data without
//! depending on any UI code:
//!
//! - **Catalog**: products, categories, their create/update payloads, stock status
//! - **Api**: wire shapes of the REST contract (paginated lists, errors, search)
//! - **Config**: API base URL, endpoint paths, page-size and stock settings
//! - **Format**: currency/date formatting, SKU generation, small string helpers
//!
//! # Example
//!
//! ```rust
//! use inventory_core::prelude::*;
//!
//! let product = Product::new(
//!     ProductId::new("2"),
//!     "MacBook Air M2",
//!     "EL-MAC-0042",
//!     Price::from_cents(119_900),
//!     3,
//!     DEFAULT_LOW_STOCK_THRESHOLD,
//! );
//!
//! assert!(product.low_stock);
//! assert_eq!(product.price.display(), "$1,199.00");
//! ```

pub mod api;
pub mod catalog;
pub mod config;
pub mod debounce;
pub mod error;
pub mod format;
pub mod ids;
pub mod money;
pub mod timestamp;

pub use error::InventoryError;
pub use ids::*;
pub use money::Price;

/// Result alias for fallible inventory operations.
pub type Result<T> = std::result::Result<T, InventoryError>;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::InventoryError;
    pub use crate::ids::*;
    pub use crate::money::Price;

    // Catalog
    pub use crate::catalog::{
        is_low_stock, Category, CategoryDto, InventoryUpdate, Product, ProductDto, StockStatus,
    };

    // Api
    pub use crate::api::{ApiError, ApiResponse, PaginatedResponse, ProductSearchParams};

    // Config
    pub use crate::config::{
        ApiEndpoints, AppConfig, AppSettings, Environment, DEFAULT_LOW_STOCK_THRESHOLD,
    };

    pub use crate::debounce::Debouncer;
}
