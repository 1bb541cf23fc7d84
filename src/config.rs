//! Settings file for servicebook.
//!
//! Values come from an optional TOML file; command-line flags and their
//! environment variables override whatever the file says.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::AdminCredentials;

pub const DEFAULT_CONFIG_FILE: &str = "servicebook.toml";
pub const DEFAULT_DATABASE: &str = "servicebook.db";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// SQLite file holding the ledger
    pub database: String,

    /// Printed in front of amounts in table output
    pub currency_symbol: String,

    /// Log filter used when RUST_LOG is unset (e.g. "warn", "servicebook=debug")
    pub log_level: String,

    /// Admin credential pair; the ledger is open when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin: Option<AdminCredentials>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database: DEFAULT_DATABASE.to_string(),
            currency_symbol: String::new(),
            log_level: "warn".to_string(),
            admin: None,
        }
    }
}

impl Settings {
    /// Load settings from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Invalid settings file {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_when_missing() {
        let temp = TempDir::new().unwrap();
        let settings = Settings::load(&temp.path().join("absent.toml")).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.database, "servicebook.db");
    }

    #[test]
    fn test_parse_full_file() {
        let settings = Settings::parse(
            r#"
            database = "/srv/shop/ledger.db"
            currency_symbol = "Rs"
            log_level = "info"

            [admin]
            user = "owner"
            password = "letmein"
            "#,
        )
        .unwrap();

        assert_eq!(settings.database, "/srv/shop/ledger.db");
        assert_eq!(settings.currency_symbol, "Rs");
        assert_eq!(settings.log_level, "info");
        assert_eq!(
            settings.admin,
            Some(AdminCredentials {
                user: "owner".into(),
                password: "letmein".into(),
            })
        );
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let settings = Settings::parse(r#"currency_symbol = "$""#).unwrap();
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.database, DEFAULT_DATABASE);
        assert!(settings.admin.is_none());
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bad.toml");
        fs::write(&path, "database = [").unwrap();
        assert!(Settings::load(&path).is_err());
    }
}
