//! Application and API configuration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::InventoryError;

/// API base URL used when nothing overrides it.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

/// Environment variable overriding the API base URL.
pub const API_BASE_URL_VAR: &str = "INVENTORY_API_BASE_URL";

/// Environment variable selecting the runtime environment.
pub const ENVIRONMENT_VAR: &str = "INVENTORY_ENV";

/// Quantity at or below which a product counts as low stock.
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 5;

/// REST endpoint paths.
pub struct ApiEndpoints;

impl ApiEndpoints {
    pub const PRODUCTS: &'static str = "/api/products";
    pub const CATEGORIES: &'static str = "/api/categories";

    /// `/api/products/{id}`
    pub fn product(id: impl fmt::Display) -> String {
        format!("{}/{}", Self::PRODUCTS, id)
    }

    /// `/api/products/{id}/inventory`
    pub fn product_inventory(id: impl fmt::Display) -> String {
        format!("{}/{}/inventory", Self::PRODUCTS, id)
    }

    /// `/api/categories/{id}`
    pub fn category(id: impl fmt::Display) -> String {
        format!("{}/{}", Self::CATEGORIES, id)
    }
}

/// Deployment environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
    Test,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
            Environment::Test => "test",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "production" | "prod" => Ok(Environment::Production),
            "test" => Ok(Environment::Test),
            _ => Err(InventoryError::InvalidConfig {
                key: ENVIRONMENT_VAR.to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// Tunables shared by the list pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_page_size")]
    pub default_page_size: u32,
    #[serde(default = "default_max_page_size")]
    pub max_page_size: u32,
    /// Quiet period for search input, in milliseconds.
    #[serde(default = "default_debounce_delay_ms")]
    pub debounce_delay_ms: u64,
    #[serde(default = "default_low_stock_threshold")]
    pub low_stock_threshold: i64,
}

fn default_page_size() -> u32 {
    20
}

fn default_max_page_size() -> u32 {
    100
}

fn default_debounce_delay_ms() -> u64 {
    300
}

fn default_low_stock_threshold() -> i64 {
    DEFAULT_LOW_STOCK_THRESHOLD
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            max_page_size: default_max_page_size(),
            debounce_delay_ms: default_debounce_delay_ms(),
            low_stock_threshold: default_low_stock_threshold(),
        }
    }
}

impl AppSettings {
    /// Resolve a requested page size against the default and the maximum.
    pub fn page_size(&self, requested: Option<u32>) -> u32 {
        match requested {
            Some(0) | None => self.default_page_size,
            Some(n) => n.min(self.max_page_size),
        }
    }
}

/// Dashboard configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default)]
    pub environment: Environment,
    #[serde(default)]
    pub settings: AppSettings,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            environment: Environment::default(),
            settings: AppSettings::default(),
        }
    }
}

impl AppConfig {
    /// Configuration baked in at compile time.
    ///
    /// This is what the browser build uses, since a WASM module has no
    /// process environment to read.
    pub fn compiled() -> Self {
        let mut config = Self::default();
        if let Some(url) = option_env!("INVENTORY_API_BASE_URL") {
            config.api_base_url = url.to_string();
        }
        if let Some(env) = option_env!("INVENTORY_ENV") {
            if let Ok(env) = env.parse() {
                config.environment = env;
            }
        }
        config
    }

    /// Defaults with overrides from the process environment.
    pub fn from_env() -> crate::Result<Self> {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from a variable lookup.
    ///
    /// Empty values are ignored, as an unset variable would be.
    pub fn with_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> crate::Result<Self> {
        if let Some(url) = lookup(API_BASE_URL_VAR).filter(|v| !v.is_empty()) {
            self.api_base_url = url;
        }
        if let Some(env) = lookup(ENVIRONMENT_VAR).filter(|v| !v.is_empty()) {
            self.environment = env.parse()?;
        }
        Ok(self)
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    /// Join an endpoint path onto the base URL.
    pub fn endpoint_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Full URL of the product collection.
    pub fn products_url(&self) -> String {
        self.endpoint_url(ApiEndpoints::PRODUCTS)
    }

    /// Full URL of the category collection.
    pub fn categories_url(&self) -> String {
        self.endpoint_url(ApiEndpoints::CATEGORIES)
    }

    /// Parse a JSON configuration document.
    pub fn from_json(content: &str) -> crate::Result<Self> {
        serde_json::from_str(content).map_err(|e| InventoryError::ConfigParse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.api_base_url, "http://localhost:8080");
        assert!(config.is_development());
        assert_eq!(config.settings.default_page_size, 20);
        assert_eq!(config.settings.max_page_size, 100);
        assert_eq!(config.settings.debounce_delay_ms, 300);
        assert_eq!(config.settings.low_stock_threshold, 5);
    }

    #[test]
    fn test_env_overrides() {
        let config = AppConfig::default()
            .with_overrides(lookup(&[
                ("INVENTORY_API_BASE_URL", "https://api.example.com"),
                ("INVENTORY_ENV", "production"),
            ]))
            .unwrap();

        assert_eq!(config.api_base_url, "https://api.example.com");
        assert!(config.is_production());
    }

    #[test]
    fn test_empty_override_is_ignored() {
        let config = AppConfig::default()
            .with_overrides(lookup(&[("INVENTORY_API_BASE_URL", "")]))
            .unwrap();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_invalid_environment_is_an_error() {
        let err = AppConfig::default()
            .with_overrides(lookup(&[("INVENTORY_ENV", "staging")]))
            .unwrap_err();
        assert!(matches!(err, InventoryError::InvalidConfig { .. }));
    }

    #[test]
    fn test_endpoints() {
        assert_eq!(ApiEndpoints::product(42), "/api/products/42");
        assert_eq!(ApiEndpoints::product_inventory("7"), "/api/products/7/inventory");
        assert_eq!(ApiEndpoints::category(3), "/api/categories/3");
    }

    #[test]
    fn test_endpoint_url_joins_slashes() {
        let mut config = AppConfig::default();
        config.api_base_url = "https://api.example.com/".to_string();

        assert_eq!(config.products_url(), "https://api.example.com/api/products");
        assert_eq!(
            config.endpoint_url(&ApiEndpoints::category(1)),
            "https://api.example.com/api/categories/1"
        );
    }

    #[test]
    fn test_page_size_resolution() {
        let settings = AppSettings::default();
        assert_eq!(settings.page_size(None), 20);
        assert_eq!(settings.page_size(Some(0)), 20);
        assert_eq!(settings.page_size(Some(50)), 50);
        assert_eq!(settings.page_size(Some(1000)), 100);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = AppConfig::from_json(r#"{"environment": "test"}"#).unwrap();
        assert_eq!(config.environment, Environment::Test);
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.settings, AppSettings::default());
    }

    #[test]
    fn test_environment_parse() {
        assert_eq!("PROD".parse::<Environment>().unwrap(), Environment::Production);
        assert_eq!("dev".parse::<Environment>().unwrap(), Environment::Development);
        assert!("qa".parse::<Environment>().is_err());
    }
}
