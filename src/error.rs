//! Error types for curbside-core

use thiserror::Error;

/// Main error type for curbside-core operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Geocoding error: {0}")]
    Geocoding(String),
}

/// Result type alias for curbside-core operations
pub type Result<T> = std::result::Result<T, Error>;
