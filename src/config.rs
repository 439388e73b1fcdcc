//! Manager configuration.
//!
//! [`ThemeConfig`] names the storage key and the presentation class. The
//! fallback preference is always `system`. Every field has a default, so a
//! YAML document only needs the fields it changes:
//!
//! ```yaml
//! storage_key: site-theme
//! dark_class: theme-dark
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Storage key used when none is configured.
pub const DEFAULT_STORAGE_KEY: &str = "theme";

/// Presentation class used when none is configured.
pub const DEFAULT_DARK_CLASS: &str = "dark";

/// Errors from loading or validating a [`ThemeConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("storage_key must not be empty")]
    EmptyKey,

    #[error("dark_class must not be empty or contain whitespace")]
    InvalidClass,
}

/// Settings for a [`ThemePreferenceManager`](crate::ThemePreferenceManager).
///
/// # Example
///
/// ```rust
/// use themepref::ThemeConfig;
///
/// let config = ThemeConfig::from_yaml_str("dark_class: night").unwrap();
/// assert_eq!(config.storage_key(), "theme");
/// assert_eq!(config.dark_class(), "night");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    storage_key: String,
    dark_class: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            dark_class: DEFAULT_DARK_CLASS.to_string(),
        }
    }
}

impl ThemeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses and validates a YAML document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: ThemeConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    pub fn dark_class(&self) -> &str {
        &self.dark_class
    }

    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    pub fn with_dark_class(mut self, class: impl Into<String>) -> Self {
        self.dark_class = class.into();
        self
    }

    /// Checks that the key and class are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_key.trim().is_empty() {
            return Err(ConfigError::EmptyKey);
        }
        if self.dark_class.is_empty() || self.dark_class.contains(char::is_whitespace) {
            return Err(ConfigError::InvalidClass);
        }
        Ok(())
    }
}
