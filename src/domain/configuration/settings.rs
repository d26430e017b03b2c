//! Application settings loaded from `nexus.toml`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::car::DEFAULT_BASE_PRICE;
use crate::domain::AppError;
use crate::domain::identifiers::validation::validate_identifier;

/// Default settings file name, looked up in the working directory.
pub const SETTINGS_FILE: &str = "nexus.toml";

/// Settings for pricing and reservation storage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    #[serde(default)]
    pub pricing: PricingSettings,
    #[serde(default)]
    pub storage: StorageSettings,
}

impl Settings {
    pub fn validate(&self) -> Result<(), AppError> {
        self.pricing.validate()?;
        self.storage.validate()?;
        Ok(())
    }
}

/// Pricing configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PricingSettings {
    /// Price of the car before option surcharges.
    #[serde(default = "default_base_price")]
    pub base_price: u64,
    /// Symbol prefixed to formatted prices.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

impl Default for PricingSettings {
    fn default() -> Self {
        Self { base_price: default_base_price(), currency_symbol: default_currency_symbol() }
    }
}

impl PricingSettings {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.currency_symbol.trim().is_empty() {
            return Err(AppError::config_error("currency_symbol must not be empty"));
        }
        Ok(())
    }
}

fn default_base_price() -> u64 {
    DEFAULT_BASE_PRICE
}

fn default_currency_symbol() -> String {
    "€".to_string()
}

/// Durable reservation storage configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StorageSettings {
    /// Key under which the reservation list is stored.
    #[serde(default = "default_namespace")]
    pub namespace: String,
    /// Directory holding the record store file.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Upper bound on the serialized reservation list, in bytes.
    #[serde(default = "default_quota_bytes")]
    pub quota_bytes: u64,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
            data_dir: default_data_dir(),
            quota_bytes: default_quota_bytes(),
        }
    }
}

impl StorageSettings {
    pub fn validate(&self) -> Result<(), AppError> {
        if !validate_identifier(&self.namespace) {
            return Err(AppError::config_error(format!(
                "namespace '{}' must be alphanumeric with hyphens or underscores",
                self.namespace
            )));
        }
        if self.data_dir.as_os_str().is_empty() {
            return Err(AppError::config_error("data_dir must not be empty"));
        }
        if self.quota_bytes == 0 {
            return Err(AppError::config_error("quota_bytes must be greater than 0"));
        }
        Ok(())
    }
}

fn default_namespace() -> String {
    "nexus-reservations".to_string()
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(".nexus")
}

fn default_quota_bytes() -> u64 {
    5 * 1024 * 1024
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let settings: Settings = toml::from_str("").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.pricing.base_price, 89_900);
        assert_eq!(settings.storage.namespace, "nexus-reservations");
        settings.validate().unwrap();
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let settings: Settings = toml::from_str(
            r#"
[storage]
quota_bytes = 1024
"#,
        )
        .unwrap();
        assert_eq!(settings.storage.quota_bytes, 1024);
        assert_eq!(settings.storage.data_dir, PathBuf::from(".nexus"));
        assert_eq!(settings.pricing, PricingSettings::default());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let parsed: Result<Settings, _> = toml::from_str("[pricing]\ndiscount = 10\n");
        assert!(parsed.is_err());
    }

    #[test]
    fn namespace_must_be_identifier() {
        let mut settings = Settings::default();
        settings.storage.namespace = "../escape".to_string();
        assert!(matches!(settings.validate(), Err(AppError::InvalidConfig(_))));
    }

    #[test]
    fn zero_quota_is_rejected() {
        let mut settings = Settings::default();
        settings.storage.quota_bytes = 0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn blank_currency_symbol_is_rejected() {
        let mut settings = Settings::default();
        settings.pricing.currency_symbol = " ".to_string();
        assert!(settings.validate().is_err());
    }
}
