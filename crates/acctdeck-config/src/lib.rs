//! Configuration management for acctdeck
//!
//! This module handles loading, validation, and management of
//! acctdeck configuration from YAML files.

pub mod error;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

pub use error::ConfigError;

// ==================== Configuration Types ====================

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,
    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8081
}

/// Navigation targets used after select and logout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutesConfig {
    /// Destination after an account is selected
    #[serde(default = "default_home")]
    pub home: String,
    /// Destination after a successful logout
    #[serde(default = "default_login")]
    pub login: String,
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            home: default_home(),
            login: default_login(),
        }
    }
}

fn default_home() -> String {
    "/".to_string()
}

fn default_login() -> String {
    "/login".to_string()
}

/// Session storage seed values and key names
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Username present in the store at startup
    #[serde(default)]
    pub username: String,
    /// Auth token present in the store at startup
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default = "default_username_key")]
    pub username_key: String,
    #[serde(default = "default_token_key")]
    pub token_key: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            username: String::new(),
            token: None,
            username_key: default_username_key(),
            token_key: default_token_key(),
        }
    }
}

fn default_username_key() -> String {
    "username".to_string()
}

fn default_token_key() -> String {
    "token".to_string()
}

/// Logout endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AuthConfig {
    /// Remote logout endpoint; logout succeeds locally when unset
    #[serde(default)]
    pub logout_url: Option<String>,
}

/// Balance display formatting
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrencyConfig {
    #[serde(default = "default_symbol")]
    pub symbol: String,
    #[serde(default = "default_decimal_places")]
    pub decimal_places: u32,
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            symbol: default_symbol(),
            decimal_places: default_decimal_places(),
        }
    }
}

fn default_symbol() -> String {
    "$".to_string()
}

fn default_decimal_places() -> u32 {
    2
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// An account present when the page mounts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedAccount {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub balance: Decimal,
}

impl SeedAccount {
    pub fn new(id: &str, name: &str, balance: Decimal) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            balance,
        }
    }
}

fn default_accounts() -> Vec<SeedAccount> {
    vec![
        SeedAccount::new("1", "Personal Checking", Decimal::new(523456, 2)),
        SeedAccount::new("2", "Vacation Fund", Decimal::new(1056789, 2)),
        SeedAccount::new("3", "Emergency Fund", Decimal::new(234567, 2)),
    ]
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub routes: RoutesConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub currency: CurrencyConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Accounts restored on every mount
    #[serde(default = "default_accounts")]
    pub accounts: Vec<SeedAccount>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            routes: RoutesConfig::default(),
            session: SessionConfig::default(),
            auth: AuthConfig::default(),
            currency: CurrencyConfig::default(),
            logging: LoggingConfig::default(),
            accounts: default_accounts(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path)
            .map_err(|_| ConfigError::IoError)?;

        Self::from_yaml(&content)
    }

    /// Parse and validate configuration from YAML text
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(content)
            .map_err(|e| ConfigError::InvalidYaml { message: e.to_string() })?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.port".to_string(),
                reason: "Port must be greater than 0".to_string(),
            });
        }

        if self.currency.decimal_places > 10 {
            return Err(ConfigError::InvalidValue {
                field: "currency.decimal_places".to_string(),
                reason: "Decimal places must be between 0 and 10".to_string(),
            });
        }

        for (field, path) in [("routes.home", &self.routes.home), ("routes.login", &self.routes.login)] {
            if !path.starts_with('/') {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    reason: format!("Route must start with '/', got '{}'", path),
                });
            }
        }

        let mut seen = HashSet::new();
        for account in &self.accounts {
            if !seen.insert(account.id.as_str()) {
                return Err(ConfigError::InvalidValue {
                    field: "accounts".to_string(),
                    reason: format!("Duplicate account id '{}'", account.id),
                });
            }
            if account.name.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "accounts".to_string(),
                    reason: format!("Account '{}' has a blank name", account.id),
                });
            }
        }

        Ok(())
    }

    /// Generate a default configuration file
    pub fn generate_default() -> &'static str {
        include_str!("../templates/default_config.yaml")
    }

    /// Address the HTTP server binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_yaml_uses_defaults() {
        let config = Config::from_yaml("{}").unwrap();
        assert_eq!(config.server.port, 8081);
        assert_eq!(config.routes.home, "/");
        assert_eq!(config.routes.login, "/login");
        assert_eq!(config.session.username_key, "username");
        assert_eq!(config.accounts.len(), 3);
        assert_eq!(config.accounts[0].name, "Personal Checking");
    }

    #[test]
    fn test_default_template_parses() {
        let config = Config::from_yaml(Config::generate_default()).unwrap();
        assert_eq!(config.accounts, Config::default().accounts);
        assert_eq!(config.currency.symbol, "$");
    }

    #[test]
    fn test_custom_accounts() {
        let yaml = r#"
accounts:
  - id: "a"
    name: "Brokerage"
    balance: "12.50"
"#;
        let config = Config::from_yaml(yaml).unwrap();
        assert_eq!(config.accounts.len(), 1);
        assert_eq!(config.accounts[0].balance, Decimal::new(1250, 2));
    }

    #[test]
    fn test_zero_port_rejected() {
        let err = Config::from_yaml("server:\n  port: 0\n").unwrap_err();
        assert_eq!(err.code(), error::ConfigErrorCode::InvalidValue);
    }

    #[test]
    fn test_duplicate_seed_ids_rejected() {
        let yaml = r#"
accounts:
  - { id: "1", name: "A" }
  - { id: "1", name: "B" }
"#;
        assert!(matches!(
            Config::from_yaml(yaml),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_relative_route_rejected() {
        assert!(Config::from_yaml("routes:\n  login: login\n").is_err());
    }

    #[test]
    fn test_invalid_yaml() {
        let err = Config::from_yaml("server: [").unwrap_err();
        assert_eq!(err.code(), error::ConfigErrorCode::InvalidYaml);
    }

    #[test]
    fn test_missing_file() {
        let err = Config::load("/nonexistent/acctdeck.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound { .. }));
    }
}
