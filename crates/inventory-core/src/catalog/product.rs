//! Product types.

use crate::catalog::inventory::{is_low_stock, StockStatus};
use crate::ids::{CategoryId, ProductId};
use crate::money::Price;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A product in the inventory.
///
/// `low_stock` is derived from `inventory_quantity` and the low-stock
/// threshold. Records built through [`Product::new`] keep it consistent;
/// records deserialized from the wire are taken as-is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Price,
    pub inventory_quantity: i64,
    /// Stock keeping unit (unique).
    pub sku: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
    pub low_stock: bool,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::timestamp::option"
    )]
    pub created_at: Option<NaiveDateTime>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::timestamp::option"
    )]
    pub updated_at: Option<NaiveDateTime>,
}

impl Product {
    /// Create a product with its low-stock flag computed against `threshold`.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        sku: impl Into<String>,
        price: Price,
        inventory_quantity: i64,
        threshold: i64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            price,
            inventory_quantity,
            sku: sku.into(),
            category_id: None,
            category_name: None,
            low_stock: is_low_stock(inventory_quantity, threshold),
            created_at: None,
            updated_at: None,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Attach the product to a category.
    pub fn with_category(mut self, id: CategoryId, name: impl Into<String>) -> Self {
        self.category_id = Some(id);
        self.category_name = Some(name.into());
        self
    }

    /// Recompute the low-stock flag.
    pub fn refresh_low_stock(&mut self, threshold: i64) {
        self.low_stock = is_low_stock(self.inventory_quantity, threshold);
    }

    /// Check that the stored low-stock flag matches the quantity.
    pub fn low_stock_consistent(&self, threshold: i64) -> bool {
        self.low_stock == is_low_stock(self.inventory_quantity, threshold)
    }

    /// Badge status for list views.
    pub fn stock_status(&self, threshold: i64) -> StockStatus {
        StockStatus::from_quantity(self.inventory_quantity, threshold)
    }

    /// Route to this product's detail page.
    pub fn href(&self) -> String {
        format!("/products/{}", self.id)
    }
}

/// Create/update payload for a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub name: String,
    pub description: String,
    pub price: Price,
    pub inventory_quantity: i64,
    pub sku: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,
}

impl From<&Product> for ProductDto {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price,
            inventory_quantity: product.inventory_quantity,
            sku: product.sku.clone(),
            category_id: product.category_id.clone(),
        }
    }
}
