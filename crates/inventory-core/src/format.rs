//! Display formatting and small string helpers.

use std::sync::OnceLock;

use chrono::{NaiveDate, Utc};
use regex::Regex;

use crate::error::InventoryError;
use crate::money::Price;

/// Format a dollar amount as US currency, e.g. `$1,234.50`.
pub fn format_currency(amount: f64) -> String {
    Price::from_dollars(amount).display()
}

/// Format an API timestamp as a short date, e.g. `Mar 1, 2024`.
///
/// Accepts RFC 3339 timestamps, zone-less `YYYY-MM-DDTHH:MM:SS[.fff]`
/// timestamps and bare `YYYY-MM-DD` dates.
pub fn format_date(value: &str) -> crate::Result<String> {
    let date = parse_date(value).ok_or_else(|| InventoryError::InvalidDate(value.to_string()))?;
    Ok(date.format("%b %-d, %Y").to_string())
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    if let Some(ts) = crate::timestamp::parse(value) {
        return Some(ts.date());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Generate a SKU from a product name and optional category.
///
/// Layout is `CC-NNN-TTTT`: two category letters (`GN` without a category),
/// three name letters, and the last four digits of the current time in
/// milliseconds.
pub fn generate_sku(name: &str, category: Option<&str>) -> String {
    generate_sku_at(name, category, Utc::now().timestamp_millis())
}

/// [`generate_sku`] with an explicit millisecond timestamp.
pub fn generate_sku_at(name: &str, category: Option<&str>, millis: i64) -> String {
    let name_prefix = prefix_upper(name, 3);
    let category_prefix = match category {
        Some(c) if !c.is_empty() => prefix_upper(c, 2),
        _ => "GN".to_string(),
    };
    let digits = millis.unsigned_abs().to_string();
    let suffix = &digits[digits.len().saturating_sub(4)..];
    format!("{}-{}-{}", category_prefix, name_prefix, suffix)
}

fn prefix_upper(s: &str, n: usize) -> String {
    s.chars().take(n).collect::<String>().to_uppercase()
}

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"))
}

/// Loose email shape check: `local@domain.tld` without whitespace.
pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}

/// Uppercase the first character and lowercase the rest.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(1234.5), "$1,234.50");
        assert_eq!(format_currency(0.0), "$0.00");
    }

    #[test]
    fn test_format_date_variants() {
        assert_eq!(format_date("2024-03-01T10:15:00Z").unwrap(), "Mar 1, 2024");
        assert_eq!(format_date("2024-12-25T08:00:00.123").unwrap(), "Dec 25, 2024");
        assert_eq!(format_date("2023-07-04").unwrap(), "Jul 4, 2023");
    }

    #[test]
    fn test_format_date_invalid() {
        assert!(matches!(
            format_date("yesterday"),
            Err(InventoryError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_generate_sku() {
        assert_eq!(
            generate_sku_at("iPhone 15", Some("electronics"), 1_700_000_012_345),
            "EL-IPH-2345"
        );
        assert_eq!(generate_sku_at("tv", None, 98), "GN-TV-98");
        assert_eq!(generate_sku_at("Lamp", Some(""), 10_000), "GN-LAM-0000");
    }

    #[test]
    fn test_generate_sku_shape() {
        let sku = generate_sku("Desk", Some("Home"));
        let parts: Vec<&str> = sku.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "HO");
        assert_eq!(parts[1], "DES");
        assert_eq!(parts[2].len(), 4);
    }

    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("ops@example.com"));
        assert!(is_valid_email("a.b@c.co.uk"));
        assert!(!is_valid_email("no-at-sign.com"));
        assert!(!is_valid_email("two@@example.com"));
        assert!(!is_valid_email("space in@example.com"));
        assert!(!is_valid_email("nodot@example"));
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("eLECTRONICS"), "Electronics");
        assert_eq!(capitalize("a"), "A");
        assert_eq!(capitalize(""), "");
    }
}
