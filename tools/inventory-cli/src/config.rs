//! CLI configuration.

use std::path::Path;

use anyhow::{Context, Result};
use inventory_core::config::AppConfig;
use inventory_router::{AuthState, DEFAULT_ROLE};
use serde::{Deserialize, Serialize};

/// File names searched for, in order, in each directory.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["inventory.toml", ".inventory.toml", "inventory.json"];

/// CLI configuration file.
///
/// The dashboard settings sit at the top level; `[auth]` describes the
/// visitor used when resolving paths.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    #[serde(flatten)]
    pub app: AppConfig,

    #[serde(default)]
    pub auth: AuthConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Apply `INVENTORY_*` overrides from a variable lookup.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        self.app = self
            .app
            .with_overrides(lookup)
            .context("Invalid environment override")?;
        Ok(self)
    }
}

/// The visitor used by `resolve`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(default = "default_true")]
    pub authenticated: bool,

    #[serde(default = "default_role")]
    pub role: String,
}

fn default_true() -> bool {
    true
}

fn default_role() -> String {
    DEFAULT_ROLE.to_string()
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            authenticated: true,
            role: default_role(),
        }
    }
}

impl From<&AuthConfig> for AuthState {
    fn from(auth: &AuthConfig) -> Self {
        AuthState::new(auth.authenticated, auth.role.clone())
    }
}

/// Generate a default inventory.toml config file.
pub fn generate_default_config() -> String {
    r#"# Product inventory dashboard configuration

api_base_url = "http://localhost:8080"
environment = "development"

[settings]
default_page_size = 20
max_page_size = 100
debounce_delay_ms = 300
low_stock_threshold = 5

# Visitor used by `inventory resolve`
[auth]
authenticated = true
role = "admin"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use inventory_core::config::Environment;

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let config: CliConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_partial_toml() {
        let config: CliConfig = toml::from_str(
            r#"
environment = "production"

[settings]
low_stock_threshold = 10

[auth]
role = "manager"
"#,
        )
        .unwrap();

        assert_eq!(config.app.environment, Environment::Production);
        assert_eq!(config.app.api_base_url, "http://localhost:8080");
        assert_eq!(config.app.settings.low_stock_threshold, 10);
        assert_eq!(config.app.settings.default_page_size, 20);
        assert!(config.auth.authenticated);
        assert_eq!(config.auth.role, "manager");
    }

    #[test]
    fn test_load_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        std::fs::write(
            &path,
            r#"{"api_base_url": "https://api.example.com", "auth": {"authenticated": false}}"#,
        )
        .unwrap();

        let config = CliConfig::load(&path).unwrap();
        assert_eq!(config.app.api_base_url, "https://api.example.com");
        assert!(!config.auth.authenticated);
        assert_eq!(config.auth.role, "admin");
    }

    #[test]
    fn test_load_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.toml");
        std::fs::write(&path, "environment = [").unwrap();

        let err = CliConfig::load(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse TOML config"));
    }

    #[test]
    fn test_env_overrides_apply_last() {
        let config: CliConfig = toml::from_str(r#"api_base_url = "http://file:1""#).unwrap();
        let config = config
            .with_overrides(|key| match key {
                "INVENTORY_API_BASE_URL" => Some("http://env:2".to_string()),
                _ => None,
            })
            .unwrap();

        assert_eq!(config.app.api_base_url, "http://env:2");
    }

    #[test]
    fn test_bad_environment_override_is_an_error() {
        let result = CliConfig::default().with_overrides(|key| match key {
            "INVENTORY_ENV" => Some("staging".to_string()),
            _ => None,
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_auth_state_from_config() {
        let auth = AuthConfig {
            authenticated: false,
            role: "viewer".to_string(),
        };
        assert_eq!(AuthState::from(&auth), AuthState::new(false, "viewer"));
    }
}
