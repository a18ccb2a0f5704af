//! Inventory error types.

use thiserror::Error;

/// Errors that can occur in inventory operations.
#[derive(Error, Debug)]
pub enum InventoryError {
    /// A configuration value could not be interpreted.
    #[error("Invalid value for {key}: {value}")]
    InvalidConfig { key: String, value: String },

    /// A configuration document could not be parsed.
    #[error("Config parse error: {0}")]
    ConfigParse(String),

    /// A date string was not in a recognised format.
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for InventoryError {
    fn from(e: serde_json::Error) -> Self {
        InventoryError::Serialization(e.to_string())
    }
}

impl From<serde_urlencoded::ser::Error> for InventoryError {
    fn from(e: serde_urlencoded::ser::Error) -> Self {
        InventoryError::Serialization(e.to_string())
    }
}
