//! Error type shared by option records and the configuration loader.

use std::convert::Infallible;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, OptionsError>;

#[derive(Debug, Error)]
pub enum OptionsError {
    /// A per-dimension sequence did not match the record's dimensionality.
    #[error("expected {expected} per-dimension values, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("failed to read options file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse options: {0}")]
    Format(String),
}

impl From<Infallible> for OptionsError {
    fn from(value: Infallible) -> Self {
        match value {}
    }
}

impl From<toml::de::Error> for OptionsError {
    fn from(value: toml::de::Error) -> Self {
        OptionsError::Format(value.to_string())
    }
}

impl From<serde_json::Error> for OptionsError {
    fn from(value: serde_json::Error) -> Self {
        OptionsError::Format(value.to_string())
    }
}
