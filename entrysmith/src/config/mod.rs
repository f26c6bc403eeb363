//! Configuration management
//!
//! Settings are loaded from multiple sources with clear precedence:
//!
//! 1. Environment variables (highest priority, `ENTRYSMITH_` prefix, `__`
//!    separating nesting levels, e.g. `ENTRYSMITH_WAREHOUSE__URL`)
//! 2. `./entrysmith.toml`
//! 3. Hardcoded defaults (fallback)
//!
//! # Example Configuration
//!
//! ```toml
//! # entrysmith.toml
//! [warehouse]
//! url = "postgres://warehouse.internal/analytics"
//! connect_timeout_secs = 10
//!
//! [identity]
//! user_name = "jsmith"
//! ```

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Warehouse connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WarehouseSettings {
    /// Connection string for the metadata pool.
    ///
    /// Only required by commands that inspect a live schema; form-collection
    /// generation runs without it.
    pub url: Option<String>,

    /// Connection acquire timeout in seconds
    pub connect_timeout_secs: u64,
}

impl Default for WarehouseSettings {
    fn default() -> Self {
        Self {
            url: None,
            connect_timeout_secs: 10,
        }
    }
}

/// Acting-user identity settings
///
/// The generator never authenticates anyone; this name only surfaces as the
/// generated application's fallback user when the hosting platform does not
/// provide one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentitySettings {
    /// Pass-through user name
    pub user_name: String,
}

impl Default for IdentitySettings {
    fn default() -> Self {
        Self {
            user_name: std::env::var("USER").unwrap_or_else(|_| "unknown".to_string()),
        }
    }
}

/// Top-level settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Warehouse connection settings
    pub warehouse: WarehouseSettings,
    /// Acting-user identity settings
    pub identity: IdentitySettings,
}

impl Settings {
    /// Load settings from defaults, `entrysmith.toml`, and the environment
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when a source is present but malformed.
    pub fn load() -> Result<Self, Error> {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file("entrysmith.toml"))
            .merge(Env::prefixed("ENTRYSMITH_").split("__"))
            .extract()
            .map_err(|e| Error::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_usable() {
        let settings = Settings::default();
        assert!(settings.warehouse.url.is_none());
        assert_eq!(settings.warehouse.connect_timeout_secs, 10);
        assert!(!settings.identity.user_name.is_empty());
    }
}
