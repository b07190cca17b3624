//! Configuration for the Castle Explorer application
//!
//! All settings are injected through the environment at startup. The Google
//! Maps credential is mandatory; everything else has a default.

use crate::CastleExplorerError;
use anyhow::{Context, Result};
use std::env;

/// Environment variable holding the Google Maps API key
pub const API_KEY_VAR: &str = "GOOGLE_MAPS_API_KEY";

/// Environment variable overriding the listen port
pub const PORT_VAR: &str = "CASTLE_EXPLORER_PORT";

const DEFAULT_PORT: u16 = 3000;

/// Runtime configuration, resolved once in `main`
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Google Maps API key used by geocoding, nearby search and place details
    pub google_api_key: String,
    /// TCP port the web server binds to
    pub port: u16,
}

impl AppConfig {
    /// Load configuration from the environment
    pub fn from_env() -> Result<Self> {
        let google_api_key = env::var(API_KEY_VAR)
            .with_context(|| format!("Missing {API_KEY_VAR} env var"))?;

        let port = match env::var(PORT_VAR) {
            Ok(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("Invalid {PORT_VAR} value: {raw}"))?,
            Err(_) => DEFAULT_PORT,
        };

        let config = Self {
            google_api_key,
            port,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        if self.google_api_key.is_empty() {
            return Err(CastleExplorerError::config(
                "Google Maps API key cannot be empty. Please provide a valid key.",
            )
            .into());
        }

        if self.google_api_key.len() < 8 {
            return Err(CastleExplorerError::config(
                "Google Maps API key appears to be invalid (too short). Please check your key.",
            )
            .into());
        }

        if self.google_api_key.len() > 100 {
            return Err(CastleExplorerError::config(
                "Google Maps API key appears to be invalid (too long). Please check your key.",
            )
            .into());
        }

        if self.port == 0 {
            return Err(CastleExplorerError::config("Port cannot be 0").into());
        }

        Ok(())
    }
}
