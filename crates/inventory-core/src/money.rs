//! Price type for product amounts.
//!
//! Prices are held as integer cents. On the wire they travel as a plain
//! decimal number (`49.99`), which is what the REST contract uses.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A USD price in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price {
    cents: i64,
}

impl Price {
    /// Create a price from cents.
    pub const fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    /// Create a price from a decimal dollar amount, rounding to the nearest cent.
    ///
    /// ```
    /// use inventory_core::Price;
    /// assert_eq!(Price::from_dollars(49.99).cents(), 4999);
    /// ```
    pub fn from_dollars(amount: f64) -> Self {
        Self::from_cents((amount * 100.0).round() as i64)
    }

    /// A zero price.
    pub const fn zero() -> Self {
        Self::from_cents(0)
    }

    /// Amount in cents.
    pub fn cents(&self) -> i64 {
        self.cents
    }

    /// Amount as a decimal dollar value.
    pub fn to_dollars(&self) -> f64 {
        self.cents as f64 / 100.0
    }

    pub fn is_zero(&self) -> bool {
        self.cents == 0
    }

    /// Format as US currency with grouping, e.g. `$124,580.00`.
    pub fn display(&self) -> String {
        let sign = if self.cents < 0 { "-" } else { "" };
        let abs = self.cents.unsigned_abs();
        format!("{}${}.{:02}", sign, group_thousands(abs / 100), abs % 100)
    }
}

/// Insert `,` separators every three digits.
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_dollars())
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        f64::deserialize(deserializer).map(Price::from_dollars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_dollars_rounds() {
        assert_eq!(Price::from_dollars(0.1 + 0.2).cents(), 30);
        assert_eq!(Price::from_dollars(999.999).cents(), 100_000);
    }

    #[test]
    fn test_display_groups_thousands() {
        assert_eq!(Price::from_cents(0).display(), "$0.00");
        assert_eq!(Price::from_cents(4999).display(), "$49.99");
        assert_eq!(Price::from_cents(100_000).display(), "$1,000.00");
        assert_eq!(Price::from_cents(12_458_000).display(), "$124,580.00");
        assert_eq!(Price::from_cents(123_456_789_01).display(), "$123,456,789.01");
    }

    #[test]
    fn test_display_negative() {
        assert_eq!(Price::from_cents(-505).display(), "-$5.05");
    }

    #[test]
    fn test_wire_format_is_decimal() {
        let price = Price::from_cents(4999);
        assert_eq!(serde_json::to_string(&price).unwrap(), "49.99");

        let parsed: Price = serde_json::from_str("1199").unwrap();
        assert_eq!(parsed.cents(), 119_900);
    }
}
