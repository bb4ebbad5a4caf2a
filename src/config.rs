//! Configuration
//!
//! Settings are read from YAML. Every field has a default, so an empty
//! mapping yields the stock storefront.

use std::{fs, path::Path, str::FromStr};

use serde::Deserialize;
use thiserror::Error;
use tracing::Level;

/// Catalog endpoint used when none is configured.
pub const DEFAULT_CATALOG_URL: &str =
    "https://res.cloudinary.com/sivadass/raw/upload/v1535817394/json/products.json";

/// Number of loading placeholders shown while the catalog is pending.
pub const DEFAULT_PLACEHOLDERS: usize = 12;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error reading the config file
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// A value was parsed but is not usable
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Storefront configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StorefrontConfig {
    /// Catalog endpoint settings.
    pub catalog: CatalogConfig,

    /// Loading placeholders rendered while the catalog is pending.
    pub placeholders: usize,

    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

/// Catalog endpoint settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    /// URL returning a JSON array of products.
    pub url: String,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            catalog: CatalogConfig::default(),
            placeholders: DEFAULT_PLACEHOLDERS,
            log_level: "info".to_string(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_CATALOG_URL.to_string(),
        }
    }
}

impl StorefrontConfig {
    /// Parse and validate configuration from YAML.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the YAML is malformed, has unknown keys, or
    /// holds invalid values.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_norway::from_str(yaml)?;

        config.validate()?;

        Ok(config)
    }

    /// Read, parse and validate a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the file cannot be read or its contents are
    /// invalid.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let yaml = fs::read_to_string(path)?;

        Self::from_yaml(&yaml)
    }

    /// Check that every value is usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] describing the first bad value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.catalog.url.trim();

        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::Invalid(format!(
                "catalog url must be http(s), got: {url:?}"
            )));
        }

        if self.placeholders == 0 {
            return Err(ConfigError::Invalid(
                "placeholders must be at least 1".to_string(),
            ));
        }

        Level::from_str(&self.log_level).map_err(|_err| {
            ConfigError::Invalid(format!("unknown log level: {}", self.log_level))
        })?;

        Ok(())
    }

    /// Parsed log level, `INFO` if the configured one is not recognised.
    pub fn level(&self) -> Level {
        Level::from_str(&self.log_level).unwrap_or(Level::INFO)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use testresult::TestResult;

    use super::*;

    #[test]
    fn defaults_point_at_stock_catalog() -> TestResult {
        let config = StorefrontConfig::default();

        config.validate()?;

        assert_eq!(config.catalog.url, DEFAULT_CATALOG_URL);
        assert_eq!(config.placeholders, 12);
        assert_eq!(config.level(), Level::INFO);

        Ok(())
    }

    #[test]
    fn yaml_overrides_selected_fields() -> TestResult {
        let config = StorefrontConfig::from_yaml(
            "catalog:\n  url: http://localhost:8080/products.json\nlog_level: debug\n",
        )?;

        assert_eq!(config.catalog.url, "http://localhost:8080/products.json");
        assert_eq!(config.placeholders, DEFAULT_PLACEHOLDERS);
        assert_eq!(config.level(), Level::DEBUG);

        Ok(())
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result = StorefrontConfig::from_yaml("currency: EUR\n");

        assert!(matches!(result, Err(ConfigError::Yaml(_))));
    }

    #[test]
    fn zero_placeholders_are_rejected() {
        let result = StorefrontConfig::from_yaml("placeholders: 0\n");

        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn non_http_url_is_rejected() {
        let result = StorefrontConfig::from_yaml("catalog:\n  url: ftp://example.com/p.json\n");

        assert!(matches!(result, Err(ConfigError::Invalid(message)) if message.contains("ftp")));
    }

    #[test]
    fn unknown_log_level_is_rejected() {
        let result = StorefrontConfig::from_yaml("log_level: chatty\n");

        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn reads_config_from_file() -> TestResult {
        let mut file = tempfile::NamedTempFile::new()?;
        writeln!(file, "placeholders: 4")?;

        let config = StorefrontConfig::from_path(file.path())?;

        assert_eq!(config.placeholders, 4);

        Ok(())
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = StorefrontConfig::from_path("/nonexistent/storefront.yml");

        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
