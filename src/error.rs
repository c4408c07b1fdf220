//! Error types for the guide

use thiserror::Error;

/// Guide error type
#[derive(Error, Debug)]
pub enum GuideError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Catalog error: {0}")]
    Catalog(String),
}

impl From<toml::de::Error> for GuideError {
    fn from(e: toml::de::Error) -> Self {
        GuideError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GuideError>;
