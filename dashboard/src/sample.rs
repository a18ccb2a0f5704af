//! Static sample data shown until the pages are wired to the API.

use inventory_core::prelude::*;

/// A headline number on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: &'static str,
    /// Highlighted leading part of the note, e.g. `+12`.
    pub trend: Option<&'static str>,
    pub note: &'static str,
    pub note_class: &'static str,
}

pub const STAT_CARDS: [StatCard; 4] = [
    StatCard {
        title: "Total Products",
        value: "247",
        trend: Some("+12"),
        note: " from last month",
        note_class: "text-sm text-secondary mt-2",
    },
    StatCard {
        title: "Low Stock Items",
        value: "8",
        trend: None,
        note: "Requires attention",
        note_class: "text-sm text-warning mt-2",
    },
    StatCard {
        title: "Categories",
        value: "15",
        trend: None,
        note: "Well organized",
        note_class: "text-sm text-secondary mt-2",
    },
    StatCard {
        title: "Total Value",
        value: "$124,580",
        trend: Some("+5.2%"),
        note: " from last month",
        note_class: "text-sm text-success mt-2",
    },
];

/// An entry in the dashboard activity feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Activity {
    pub title: &'static str,
    pub description: &'static str,
    pub age: &'static str,
    pub badge_class: &'static str,
}

pub const RECENT_ACTIVITY: [Activity; 3] = [
    Activity {
        title: "Sample Activity",
        description: "Product \"iPhone 15 Pro\" was updated",
        age: "2 hours ago",
        badge_class: "badge badge-primary",
    },
    Activity {
        title: "Low Stock Alert",
        description: "MacBook Air M2 is running low on stock",
        age: "5 hours ago",
        badge_class: "badge badge-warning",
    },
    Activity {
        title: "New Category",
        description: "Category \"Smart Home\" was created",
        age: "1 day ago",
        badge_class: "badge badge-success",
    },
];

/// Options of the category filter on the products page, `(value, label)`.
pub const CATEGORY_FILTERS: [(&str, &str); 3] = [
    ("electronics", "Electronics"),
    ("clothing", "Clothing"),
    ("books", "Books"),
];

/// A product link on the products page.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleProduct {
    pub icon: &'static str,
    pub product: Product,
}

impl SampleProduct {
    /// Link text: the icon, then e.g. `Sample Product 1 - iPhone 15 Pro`.
    pub fn label(&self) -> String {
        format!("{} Sample Product {} - {}", self.icon, self.product.id, self.product.name)
    }
}

/// The three sample products, one per stock status.
pub fn sample_products(threshold: i64) -> Vec<SampleProduct> {
    let electronics = CategoryId::new("1");
    vec![
        SampleProduct {
            icon: "\u{1f4f1}",
            product: Product::new(
                ProductId::new("1"),
                "iPhone 15 Pro",
                "EL-IPH-0001",
                Price::from_cents(99_900),
                50,
                threshold,
            )
            .with_category(electronics.clone(), "Electronics"),
        },
        SampleProduct {
            icon: "\u{1f4bb}",
            product: Product::new(
                ProductId::new("2"),
                "MacBook Air M2",
                "EL-MAC-0002",
                Price::from_cents(119_900),
                3,
                threshold,
            )
            .with_category(electronics.clone(), "Electronics"),
        },
        SampleProduct {
            icon: "\u{1f3a7}",
            product: Product::new(
                ProductId::new("3"),
                "AirPods Pro",
                "EL-AIR-0003",
                Price::from_cents(24_900),
                0,
                threshold,
            )
            .with_category(electronics, "Electronics"),
        },
    ]
}

/// A category card on the categories page.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleCategory {
    pub icon: &'static str,
    pub badge_class: &'static str,
    pub category: Category,
}

/// The four sample categories.
pub fn sample_categories() -> Vec<SampleCategory> {
    let card = |id: &str, icon, badge_class, name: &str, description: &str, count| SampleCategory {
        icon,
        badge_class,
        category: Category::new(CategoryId::new(id), name, description).with_product_count(count),
    };
    vec![
        card("1", "\u{1f4f1}", "badge badge-primary", "Electronics", "Phones, laptops, accessories", 45),
        card("2", "\u{1f455}", "badge badge-secondary", "Clothing", "Shirts, pants, accessories", 23),
        card("3", "\u{1f4da}", "badge badge-success", "Books", "Fiction, non-fiction, textbooks", 67),
        card("4", "\u{1f3e0}", "badge badge-warning", "Home & Garden", "Furniture, decor, tools", 12),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_products_cover_each_stock_status() {
        let statuses: Vec<StockStatus> = sample_products(DEFAULT_LOW_STOCK_THRESHOLD)
            .iter()
            .map(|s| s.product.stock_status(DEFAULT_LOW_STOCK_THRESHOLD))
            .collect();
        assert_eq!(
            statuses,
            vec![StockStatus::InStock, StockStatus::LowStock, StockStatus::OutOfStock]
        );
    }

    #[test]
    fn test_sample_products_keep_low_stock_flag_consistent() {
        for sample in sample_products(DEFAULT_LOW_STOCK_THRESHOLD) {
            assert!(sample.product.low_stock_consistent(DEFAULT_LOW_STOCK_THRESHOLD));
        }
    }

    #[test]
    fn test_sample_product_links() {
        let samples = sample_products(DEFAULT_LOW_STOCK_THRESHOLD);
        let hrefs: Vec<String> = samples.iter().map(|s| s.product.href()).collect();
        assert_eq!(hrefs, vec!["/products/1", "/products/2", "/products/3"]);
        assert!(samples[0].label().ends_with("Sample Product 1 - iPhone 15 Pro"));
    }

    #[test]
    fn test_sample_categories() {
        let cats = sample_categories();
        assert_eq!(cats.len(), 4);
        assert_eq!(cats[2].category.product_count_label().as_deref(), Some("67 products"));
        assert_eq!(cats[3].category.href(), "/categories/4");
    }

    #[test]
    fn test_stat_cards() {
        let titles: Vec<&str> = STAT_CARDS.iter().map(|c| c.title).collect();
        assert_eq!(
            titles,
            vec!["Total Products", "Low Stock Items", "Categories", "Total Value"]
        );
    }
}
