//! Error types and handling for the Castle Explorer application

use thiserror::Error;

/// Main error type for the Castle Explorer application
#[derive(Error, Debug)]
pub enum CastleExplorerError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Geocoding failures (fatal for the whole search)
    #[error("Geocoding error: {message}")]
    Geocoding { message: String },

    /// Nearby place search failures (the geocoded origin stays usable)
    #[error("Place search error: {message}")]
    PlaceSearch { message: String },

    /// Other API communication errors
    #[error("API error: {message}")]
    Api { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },
}

impl CastleExplorerError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new geocoding error
    pub fn geocoding<S: Into<String>>(message: S) -> Self {
        Self::Geocoding {
            message: message.into(),
        }
    }

    /// Create a new place search error
    pub fn place_search<S: Into<String>>(message: S) -> Self {
        Self::PlaceSearch {
            message: message.into(),
        }
    }

    /// Create a new API error
    pub fn api<S: Into<String>>(message: S) -> Self {
        Self::Api {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            CastleExplorerError::Config { .. } => {
                "Configuration error. Please check your API key setup.".to_string()
            }
            CastleExplorerError::Geocoding { message } => {
                format!("Could not locate that place: {message}")
            }
            CastleExplorerError::PlaceSearch { message } => {
                format!("Searching for castles failed: {message}")
            }
            CastleExplorerError::Api { .. } => {
                "Unable to reach external services. Please check your internet connection."
                    .to_string()
            }
            CastleExplorerError::Validation { message } => {
                format!("Invalid input: {message}")
            }
        }
    }
}

/// User-facing message for any pipeline error
///
/// Domain errors render their curated message; anything else falls back to
/// the error's display form.
#[must_use]
pub fn user_facing_message(error: &anyhow::Error) -> String {
    error
        .downcast_ref::<CastleExplorerError>()
        .map_or_else(|| error.to_string(), CastleExplorerError::user_message)
}
