//! Configuration management
//!
//! Loads account manager settings from defaults, an optional `config.toml`,
//! and `ACCOUNT_MANAGER_*` environment overrides.

use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

/// Account manager configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ManagerConfig {
    /// Path of the backing file holding the serialized accounts
    pub accounts_file: String,

    /// Minimum password length in characters
    pub min_password_length: usize,

    /// Maximum username length in characters
    pub max_username_length: usize,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            accounts_file: "accounts.txt".to_string(),
            min_password_length: 10,
            max_username_length: 64,
        }
    }
}

impl ManagerConfig {
    /// Load configuration with environment overrides
    ///
    /// Sources are layered: built-in defaults, then an optional `config.toml`
    /// in the working directory, then `ACCOUNT_MANAGER_*` environment
    /// variables (e.g. `ACCOUNT_MANAGER_ACCOUNTS_FILE`).
    pub fn load() -> Result<Self, config::ConfigError> {
        let settings = Config::builder()
            .set_default("accounts_file", "accounts.txt")?
            .set_default("min_password_length", 10i64)?
            .set_default("max_username_length", 64i64)?
            .add_source(File::with_name("config").required(false))
            .add_source(Environment::with_prefix("ACCOUNT_MANAGER"))
            .build()?;

        let config: ManagerConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the backing file location as a path
    pub fn accounts_path(&self) -> PathBuf {
        PathBuf::from(&self.accounts_file)
    }

    /// Validation for all configuration values
    fn validate(&self) -> Result<(), config::ConfigError> {
        if self.accounts_file.is_empty() {
            return Err(config::ConfigError::Message(
                "accounts_file cannot be empty".into(),
            ));
        }

        if self.min_password_length == 0 {
            return Err(config::ConfigError::Message(
                "min_password_length must be greater than 0".into(),
            ));
        }

        if self.max_username_length == 0 {
            return Err(config::ConfigError::Message(
                "max_username_length must be greater than 0".into(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ManagerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.accounts_path(), PathBuf::from("accounts.txt"));
    }

    #[test]
    fn test_zero_password_length_rejected() {
        let config = ManagerConfig {
            min_password_length: 0,
            ..ManagerConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
