//! Product catalog module.
//!
//! Contains the product and category records plus the stock helpers the
//! list pages use for their badges.

mod category;
mod inventory;
mod product;

pub use category::{Category, CategoryDto};
pub use inventory::{is_low_stock, InventoryUpdate, StockStatus};
pub use product::{Product, ProductDto};
