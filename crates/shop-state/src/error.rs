//! Store error types.
//!
//! Store mutations never fail; these errors come from configuration loading
//! and from lookups that the caller asks to be strict.

use thiserror::Error;

/// Errors that can occur around the storefront stores.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Configuration file could not be read.
    #[error("Failed to read config file {path}: {message}")]
    ConfigRead { path: String, message: String },

    /// Configuration could not be parsed.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::SerializationError(e.to_string())
    }
}

impl From<toml::de::Error> for StoreError {
    fn from(e: toml::de::Error) -> Self {
        StoreError::ConfigError(e.to_string())
    }
}

impl From<toml::ser::Error> for StoreError {
    fn from(e: toml::ser::Error) -> Self {
        StoreError::SerializationError(e.to_string())
    }
}
