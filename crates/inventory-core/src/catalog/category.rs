//! Category types for product organization.

use crate::ids::CategoryId;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A product category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub description: String,
    /// Number of products in this category, when the server counted them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_count: Option<i64>,
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

impl Category {
    /// Create a new category.
    pub fn new(id: CategoryId, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            product_count: None,
            created_at: None,
            updated_at: None,
        }
    }

    /// Set the product count.
    pub fn with_product_count(mut self, count: i64) -> Self {
        self.product_count = Some(count);
        self
    }

    /// Badge text for the product count, e.g. "45 products".
    pub fn product_count_label(&self) -> Option<String> {
        self.product_count.map(|count| match count {
            1 => "1 product".to_string(),
            n => format!("{} products", n),
        })
    }

    /// Route to this category's detail page.
    pub fn href(&self) -> String {
        format!("/categories/{}", self.id)
    }
}

/// Create/update payload for a category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryDto {
    pub name: String,
    pub description: String,
}

impl From<&Category> for CategoryDto {
    fn from(category: &Category) -> Self {
        Self {
            name: category.name.clone(),
            description: category.description.clone(),
        }
    }
}
