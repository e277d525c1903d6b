//! # Console Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     BISTRO_RESTAURANT_NAME="Chez Rust"                                 │
//! │     BISTRO_TAX_RATE=8.25                                               │
//! │     BISTRO_ADMIN_USERNAME / BISTRO_ADMIN_PASSWORD                      │
//! │     BISTRO_WAITER_USERNAME / BISTRO_WAITER_PASSWORD                    │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     --config PATH, or                                                  │
//! │     ~/.config/bistro/bistro.toml (Linux)                               │
//! │     ~/Library/Application Support/com.bistro.console/bistro.toml       │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     10% tax, 20 tables, admin/password, waiter/password                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [restaurant]
//! name = "Chez Rust"
//!
//! [billing]
//! tax_rate_bps = 1000   # 10%
//!
//! [limits]
//! menu_capacity = 100
//! ticket_capacity = 100
//! table_count = 20
//!
//! [credentials.admin]
//! username = "admin"
//! password = "password"
//!
//! [credentials.waiter]
//! username = "waiter"
//! password = "password"
//!
//! [[menu]]
//! name = "Soup"
//! description = "Soup of the day"
//! price_cents = 650
//! ```
//!
//! When no `[[menu]]` entries are given the house menu is used.

use std::path::{Path, PathBuf};

use bistro_core::validation::{
    validate_capacity, validate_price, validate_tax_rate_bps, validate_username,
};
use bistro_core::{
    Credential, CredentialStore, MenuItem, Money, Role, TaxRate, DEFAULT_TAX_RATE_BPS,
    MAX_MENU_ITEMS, MAX_TICKET_LINES, TABLE_COUNT,
};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{AppError, AppResult};

// =============================================================================
// Sections
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestaurantSettings {
    /// Shown in the startup banner.
    #[serde(default = "default_restaurant_name")]
    pub name: String,
}

fn default_restaurant_name() -> String {
    "Restaurant Management System".to_string()
}

impl Default for RestaurantSettings {
    fn default() -> Self {
        RestaurantSettings {
            name: default_restaurant_name(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingSettings {
    /// Tax applied to bills and earnings, in basis points.
    #[serde(default = "default_tax_rate_bps")]
    pub tax_rate_bps: u32,
}

fn default_tax_rate_bps() -> u32 {
    DEFAULT_TAX_RATE_BPS
}

impl Default for BillingSettings {
    fn default() -> Self {
        BillingSettings {
            tax_rate_bps: default_tax_rate_bps(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimitSettings {
    #[serde(default = "default_menu_capacity")]
    pub menu_capacity: usize,

    #[serde(default = "default_ticket_capacity")]
    pub ticket_capacity: usize,

    #[serde(default = "default_table_count")]
    pub table_count: usize,
}

fn default_menu_capacity() -> usize {
    MAX_MENU_ITEMS
}

fn default_ticket_capacity() -> usize {
    MAX_TICKET_LINES
}

fn default_table_count() -> usize {
    TABLE_COUNT
}

impl Default for LimitSettings {
    fn default() -> Self {
        LimitSettings {
            menu_capacity: default_menu_capacity(),
            ticket_capacity: default_ticket_capacity(),
            table_count: default_table_count(),
        }
    }
}

/// Staff logins. Customers never authenticate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialSettings {
    #[serde(default = "default_admin")]
    pub admin: Credential,

    #[serde(default = "default_waiter")]
    pub waiter: Credential,
}

fn default_admin() -> Credential {
    Credential::new("admin", "password")
}

fn default_waiter() -> Credential {
    Credential::new("waiter", "password")
}

impl Default for CredentialSettings {
    fn default() -> Self {
        CredentialSettings {
            admin: default_admin(),
            waiter: default_waiter(),
        }
    }
}

/// One `[[menu]]` seed entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuSeed {
    pub name: String,

    #[serde(default)]
    pub description: String,

    pub price_cents: i64,
}

impl MenuSeed {
    pub fn to_item(&self) -> MenuItem {
        MenuItem::new(
            self.name.clone(),
            self.description.clone(),
            Money::from_cents(self.price_cents),
        )
    }
}

// =============================================================================
// App Configuration
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub restaurant: RestaurantSettings,

    #[serde(default)]
    pub billing: BillingSettings,

    #[serde(default)]
    pub limits: LimitSettings,

    #[serde(default)]
    pub credentials: CredentialSettings,

    /// Seed list for the catalog. Empty means the house menu.
    #[serde(default)]
    pub menu: Vec<MenuSeed>,
}

impl AppConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (bistro.toml)
    /// 3. Environment variables
    ///
    /// A path given explicitly must exist. The default path is optional.
    pub fn load(config_path: Option<PathBuf>) -> AppResult<Self> {
        let mut config = match config_path {
            Some(path) => Self::from_file(&path)?,
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                Some(path) => {
                    debug!(?path, "Config file not found, using defaults");
                    Self::default()
                }
                None => Self::default(),
            },
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Parses one TOML file.
    pub fn from_file(path: &Path) -> AppResult<Self> {
        info!(?path, "Loading config from file");
        let contents = std::fs::read_to_string(path)
            .map_err(|e| AppError::ConfigLoadFailed(format!("{}: {}", path.display(), e)))?;
        Ok(toml::from_str(&contents)?)
    }

    /// Applies `BISTRO_*` overrides from the process environment.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies overrides from any key lookup.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(name) = lookup("BISTRO_RESTAURANT_NAME") {
            debug!(name = %name, "Restaurant name overridden from env");
            self.restaurant.name = name;
        }

        if let Some(rate) = lookup("BISTRO_TAX_RATE") {
            match rate.trim().parse::<f64>() {
                Ok(pct) if pct >= 0.0 => {
                    self.billing.tax_rate_bps = TaxRate::from_percentage(pct).bps();
                    debug!(bps = self.billing.tax_rate_bps, "Tax rate overridden from env");
                }
                _ => warn!(value = %rate, "Ignoring invalid BISTRO_TAX_RATE"),
            }
        }

        if let Some(username) = lookup("BISTRO_ADMIN_USERNAME") {
            self.credentials.admin.username = username;
        }
        if let Some(password) = lookup("BISTRO_ADMIN_PASSWORD") {
            self.credentials.admin.password = password;
        }
        if let Some(username) = lookup("BISTRO_WAITER_USERNAME") {
            self.credentials.waiter.username = username;
        }
        if let Some(password) = lookup("BISTRO_WAITER_PASSWORD") {
            self.credentials.waiter.password = password;
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> AppResult<()> {
        validate_capacity("table_count", self.limits.table_count)?;
        validate_capacity("menu_capacity", self.limits.menu_capacity)?;
        validate_capacity("ticket_capacity", self.limits.ticket_capacity)?;
        validate_tax_rate_bps(self.billing.tax_rate_bps)?;
        validate_username(&self.credentials.admin.username)?;
        validate_username(&self.credentials.waiter.username)?;

        for seed in &self.menu {
            validate_price(Money::from_cents(seed.price_cents)).map_err(|e| {
                AppError::InvalidConfig(format!("menu entry '{}': {}", seed.name, e))
            })?;
        }

        Ok(())
    }

    pub fn tax_rate(&self) -> TaxRate {
        TaxRate::from_bps(self.billing.tax_rate_bps)
    }

    /// Builds the role-to-credential mapping handed to the driver.
    pub fn credential_store(&self) -> CredentialStore {
        CredentialStore::new()
            .with(Role::Admin, self.credentials.admin.clone())
            .with(Role::Waiter, self.credentials.waiter.clone())
    }

    /// Returns the default config file path.
    ///
    /// ## Platform Paths
    /// - **Linux**: `~/.config/bistro/bistro.toml`
    /// - **macOS**: `~/Library/Application Support/com.bistro.console/bistro.toml`
    /// - **Windows**: `%APPDATA%\bistro\console\config\bistro.toml`
    pub fn default_config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "bistro", "console")
            .map(|dirs| dirs.config_dir().join("bistro.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.billing.tax_rate_bps, 1000);
        assert_eq!(config.limits.table_count, 20);
        assert_eq!(config.limits.menu_capacity, 100);
        assert!(config.menu.is_empty());
        assert!(config.validate().is_ok());

        let store = config.credential_store();
        assert!(store.authenticate(Role::Admin, "admin", "password"));
        assert!(store.authenticate(Role::Waiter, "waiter", "password"));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [restaurant]
            name = "Chez Rust"

            [limits]
            table_count = 8
            "#,
        )
        .unwrap();

        assert_eq!(config.restaurant.name, "Chez Rust");
        assert_eq!(config.limits.table_count, 8);
        assert_eq!(config.limits.ticket_capacity, 100);
        assert_eq!(config.credentials.admin.username, "admin");
    }

    #[test]
    fn test_menu_seed_entries() {
        let config: AppConfig = toml::from_str(
            r#"
            [[menu]]
            name = "Soup"
            description = "Soup of the day"
            price_cents = 650

            [[menu]]
            name = "Bread"
            price_cents = 0
            "#,
        )
        .unwrap();

        assert_eq!(config.menu.len(), 2);
        let bread = config.menu[1].to_item();
        assert_eq!(bread.description, "");
        assert!(bread.price.is_zero());
    }

    #[test]
    fn test_env_overrides() {
        let vars = env(&[
            ("BISTRO_RESTAURANT_NAME", "Night Owl"),
            ("BISTRO_TAX_RATE", "8.25"),
            ("BISTRO_ADMIN_USERNAME", "boss"),
            ("BISTRO_WAITER_PASSWORD", "s3cret"),
        ]);
        let mut config = AppConfig::default();
        config.apply_overrides(|key| vars.get(key).cloned());

        assert_eq!(config.restaurant.name, "Night Owl");
        assert_eq!(config.billing.tax_rate_bps, 825);
        assert_eq!(config.credentials.admin.username, "boss");
        assert_eq!(config.credentials.admin.password, "password");

        let store = config.credential_store();
        assert!(store.authenticate(Role::Waiter, "waiter", "s3cret"));
        assert!(!store.authenticate(Role::Waiter, "waiter", "password"));
    }

    #[test]
    fn test_invalid_tax_env_is_ignored() {
        let vars = env(&[("BISTRO_TAX_RATE", "lots")]);
        let mut config = AppConfig::default();
        config.apply_overrides(|key| vars.get(key).cloned());
        assert_eq!(config.billing.tax_rate_bps, 1000);
    }

    #[test]
    fn test_validation_failures() {
        let mut config = AppConfig::default();
        config.limits.table_count = 0;
        assert!(matches!(config.validate(), Err(AppError::InvalidConfig(_))));

        let mut config = AppConfig::default();
        config.billing.tax_rate_bps = 10001;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.credentials.waiter.username = "  ".to_string();
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.menu.push(MenuSeed {
            name: "Refund".to_string(),
            description: String::new(),
            price_cents: -1,
        });
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bistro.toml");
        std::fs::write(&path, "[billing]\ntax_rate_bps = 500\n").unwrap();

        let config = AppConfig::from_file(&path).unwrap();
        assert_eq!(config.tax_rate(), TaxRate::from_bps(500));
    }

    #[test]
    fn test_load_missing_explicit_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppConfig::load(Some(dir.path().join("absent.toml"))).unwrap_err();
        assert!(matches!(err, AppError::ConfigLoadFailed(_)));
    }

    #[test]
    fn test_load_malformed_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bistro.toml");
        std::fs::write(&path, "[limits]\ntable_count = \"many\"\n").unwrap();

        let err = AppConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, AppError::ConfigParse(_)));
    }
}
