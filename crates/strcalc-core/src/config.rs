//! Calculator configuration
//!
//! ```toml
//! default_delimiter = ";"
//! declaration_marker = "//"
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Delimiter used when no declaration is present
pub const DEFAULT_DELIMITER: &str = ";";

/// Prefix introducing a delimiter declaration
pub const DEFAULT_DECLARATION_MARKER: &str = "//";

/// Settings for the declaration-reading variants
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Fallback delimiter, also used when a declaration names none
    pub default_delimiter: String,
    /// Prefix that marks a delimiter declaration
    pub declaration_marker: String,
}

impl CalculatorConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With default delimiter
    #[inline]
    #[must_use]
    pub fn with_default_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.default_delimiter = delimiter.into();
        self
    }

    /// With declaration marker
    #[inline]
    #[must_use]
    pub fn with_declaration_marker(mut self, marker: impl Into<String>) -> Self {
        self.declaration_marker = marker.into();
        self
    }

    /// Parse and validate TOML text
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::io_error(path, e))?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!("Loaded calculator config from {}", path.display());
        Ok(config)
    }

    /// Reject values the tokenizer cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_delimiter.is_empty() {
            return Err(ConfigError::Invalid("default_delimiter must not be empty".to_string()));
        }
        if self.declaration_marker.is_empty() {
            return Err(ConfigError::Invalid("declaration_marker must not be empty".to_string()));
        }
        if self.declaration_marker.contains('\n') {
            return Err(ConfigError::Invalid(
                "declaration_marker must not contain a line break".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            default_delimiter: DEFAULT_DELIMITER.to_string(),
            declaration_marker: DEFAULT_DECLARATION_MARKER.to_string(),
        }
    }
}
