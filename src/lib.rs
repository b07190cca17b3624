//! Castle Explorer - find castles around a city
//!
//! This library provides the search pipeline behind the web UI: geocoding,
//! nearby castle search, per-place detail enrichment, Wikipedia background,
//! review sentiment and travel metrics.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod places;
pub mod routing;
pub mod search;
pub mod sentiment;
pub mod web;
pub mod wikipedia;

// Re-export core types for public API
pub use config::AppConfig;
pub use error::CastleExplorerError;
pub use models::{Location, Place, PlaceStub, Review};
pub use places::GoogleMapsClient;
pub use search::{CastleReport, CastleSearchService, SearchOutcome};
pub use sentiment::{SentimentLabel, SentimentResult};
pub use wikipedia::{KnowledgeSummary, WikipediaClient};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
