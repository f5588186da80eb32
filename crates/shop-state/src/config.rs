//! Storefront configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::DEFAULT_RELATED_LIMIT;
use crate::error::StoreError;
use crate::money::Currency;

/// Settings the storefront context is built from.
///
/// Every field has a default, so an empty TOML document is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Store name shown in page titles.
    pub name: String,
    /// Currency of the seed prices and cart totals.
    pub currency: Currency,
    /// How many related products a detail page lists.
    pub related_products_limit: usize,
    /// Whether to start with the demo product list. When false the catalog
    /// starts empty.
    pub seed_catalog: bool,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            name: "Storefront".to_string(),
            currency: Currency::USD,
            related_products_limit: DEFAULT_RELATED_LIMIT,
            seed_catalog: true,
        }
    }
}

impl StorefrontConfig {
    /// Create a configuration with the given store name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the currency.
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Set the related products limit.
    pub fn with_related_limit(mut self, limit: usize) -> Self {
        self.related_products_limit = limit;
        self
    }

    /// Enable or disable the seed catalog.
    pub fn with_seed_catalog(mut self, enabled: bool) -> Self {
        self.seed_catalog = enabled;
        self
    }

    /// Parse a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, StoreError> {
        Ok(toml::from_str(content)?)
    }

    /// Parse a JSON document.
    pub fn from_json_str(content: &str) -> Result<Self, StoreError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load from a file. `.json` files are read as JSON, anything else as TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| StoreError::ConfigRead {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let config = if path.extension().is_some_and(|ext| ext == "json") {
            Self::from_json_str(&content)?
        } else {
            Self::from_toml_str(&content)?
        };
        tracing::debug!(path = %path.display(), name = %config.name, "storefront config loaded");
        Ok(config)
    }

    /// Render as TOML.
    pub fn to_toml_string(&self) -> Result<String, StoreError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
