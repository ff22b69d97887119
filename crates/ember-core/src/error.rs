//! Error types for Ember

use thiserror::Error;

/// The main error type for Ember operations
#[derive(Debug, Error)]
pub enum EmberError {
    #[error("Invalid emitter config: {0}")]
    InvalidConfig(String),

    #[error("Value out of range: {field} must be between {min} and {max}, got {value}")]
    ValueOutOfRange {
        field: String,
        min: f64,
        max: f64,
        value: f64,
    },

    #[error("Invalid texture: {0}")]
    InvalidTexture(String),

    #[error("Scene not found: {0}")]
    SceneNotFound(String),

    #[error("Scene error: {0}")]
    SceneError(String),

    #[error("TOML parse error: {0}")]
    TomlParse(String),
}

/// Result type alias for Ember operations
pub type Result<T> = std::result::Result<T, EmberError>;

impl From<toml::de::Error> for EmberError {
    fn from(err: toml::de::Error) -> Self {
        EmberError::TomlParse(err.to_string())
    }
}
