//! Product search parameters.

use serde::{Deserialize, Serialize};

/// Sort direction for list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// Query parameters for the product list endpoint.
///
/// Only the fields that are set end up in the query string, in declaration
/// order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductSearchParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_stock: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    /// Sort expression, `field,direction`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
}

impl ProductSearchParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by name fragment. Blank input clears the filter.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.name = if name.trim().is_empty() { None } else { Some(name) };
        self
    }

    /// Filter by category. Blank input clears the filter.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        let category = category.into();
        self.category = if category.is_empty() { None } else { Some(category) };
        self
    }

    pub fn with_price_range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.min_price = min;
        self.max_price = max;
        self
    }

    pub fn in_stock_only(mut self) -> Self {
        self.in_stock = Some(true);
        self
    }

    pub fn with_page(mut self, page: u32, size: u32) -> Self {
        self.page = Some(page);
        self.size = Some(size);
        self
    }

    pub fn with_sort(mut self, field: &str, direction: SortDirection) -> Self {
        self.sort = Some(format!("{},{}", field, direction.as_str()));
        self
    }

    /// Fill in the default page size and cap it at `max_size`.
    pub fn normalize_page_size(mut self, default_size: u32, max_size: u32) -> Self {
        let size = self.size.unwrap_or(default_size).min(max_size);
        self.size = Some(size);
        self
    }

    /// Whether any filter (as opposed to paging or sorting) is set.
    pub fn has_filters(&self) -> bool {
        self.name.is_some()
            || self.category.is_some()
            || self.min_price.is_some()
            || self.max_price.is_some()
            || self.in_stock.is_some()
    }

    /// Render as a URL query string without the leading `?`.
    pub fn to_query_string(&self) -> crate::Result<String> {
        Ok(serde_urlencoded::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_params_render_empty_query() {
        let params = ProductSearchParams::new();
        assert_eq!(params.to_query_string().unwrap(), "");
        assert!(!params.has_filters());
    }

    #[test]
    fn test_query_string_order_and_encoding() {
        let params = ProductSearchParams::new()
            .with_name("iPhone 15")
            .with_category("electronics")
            .in_stock_only()
            .with_page(0, 20)
            .with_sort("price", SortDirection::Desc);

        assert_eq!(
            params.to_query_string().unwrap(),
            "name=iPhone+15&category=electronics&inStock=true&page=0&size=20&sort=price%2Cdesc"
        );
        assert!(params.has_filters());
    }

    #[test]
    fn test_blank_filters_are_dropped() {
        let params = ProductSearchParams::new().with_name("   ").with_category("");
        assert!(params.name.is_none());
        assert!(params.category.is_none());
    }

    #[test]
    fn test_normalize_page_size() {
        let defaulted = ProductSearchParams::new().normalize_page_size(20, 100);
        assert_eq!(defaulted.size, Some(20));

        let capped = ProductSearchParams::new()
            .with_page(1, 500)
            .normalize_page_size(20, 100);
        assert_eq!(capped.size, Some(100));
    }

    #[test]
    fn test_price_range() {
        let params = ProductSearchParams::new().with_price_range(Some(10.5), None);
        assert_eq!(params.to_query_string().unwrap(), "minPrice=10.5");
    }
}
