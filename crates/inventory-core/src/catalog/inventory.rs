//! Stock level helpers.

use serde::{Deserialize, Serialize};

/// Check whether a quantity is at or below the low-stock threshold.
pub fn is_low_stock(quantity: i64, threshold: i64) -> bool {
    quantity <= threshold
}

/// Stock status shown as a badge next to a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    InStock,
    LowStock,
    OutOfStock,
}

impl StockStatus {
    /// Classify a quantity against the low-stock threshold.
    ///
    /// Zero (or less) is out of stock before the threshold is considered.
    pub fn from_quantity(quantity: i64, threshold: i64) -> Self {
        if quantity <= 0 {
            StockStatus::OutOfStock
        } else if is_low_stock(quantity, threshold) {
            StockStatus::LowStock
        } else {
            StockStatus::InStock
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::InStock => "In Stock",
            StockStatus::LowStock => "Low Stock",
            StockStatus::OutOfStock => "Out of Stock",
        }
    }

    /// Badge CSS class.
    pub fn badge_class(&self) -> &'static str {
        match self {
            StockStatus::InStock => "badge badge-success",
            StockStatus::LowStock => "badge badge-warning",
            StockStatus::OutOfStock => "badge badge-error",
        }
    }
}

/// Payload for setting a product's inventory quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryUpdate {
    pub quantity: i64,
}

impl InventoryUpdate {
    pub fn new(quantity: i64) -> Self {
        Self { quantity }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_low_stock_is_inclusive() {
        assert!(is_low_stock(5, 5));
        assert!(is_low_stock(0, 5));
        assert!(!is_low_stock(6, 5));
    }

    #[test]
    fn test_stock_status() {
        assert_eq!(StockStatus::from_quantity(0, 5), StockStatus::OutOfStock);
        assert_eq!(StockStatus::from_quantity(3, 5), StockStatus::LowStock);
        assert_eq!(StockStatus::from_quantity(5, 5), StockStatus::LowStock);
        assert_eq!(StockStatus::from_quantity(50, 5), StockStatus::InStock);
    }

    #[test]
    fn test_stock_status_labels() {
        assert_eq!(StockStatus::InStock.label(), "In Stock");
        assert_eq!(StockStatus::OutOfStock.badge_class(), "badge badge-error");
    }

    #[test]
    fn test_inventory_update_wire_format() {
        let json = serde_json::to_string(&InventoryUpdate::new(12)).unwrap();
        assert_eq!(json, r#"{"quantity":12}"#);
    }
}
