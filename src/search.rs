//! Castle Search Pipeline
//!
//! This module drives one search end to end: geocode the city, find castle
//! candidates around it, then enrich each surviving place with details,
//! encyclopedia background, review sentiment and travel metrics. All steps
//! run strictly one after another; nothing is cached between searches.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::AppConfig;
use crate::error::{CastleExplorerError, user_facing_message};
use crate::models::{Location, Place};
use crate::places::GoogleMapsClient;
use crate::routing::{self, DistanceEmission};
use crate::sentiment::{self, SentimentResult};
use crate::wikipedia::{KnowledgeSummary, WikipediaClient};
use anyhow::Result;

/// Category keyword passed to the nearby search
pub const SEARCH_KEYWORD: &str = "château";

/// Smallest accepted search radius in kilometers
pub const MIN_RADIUS_KM: u32 = 1;

/// Largest accepted search radius in kilometers
pub const MAX_RADIUS_KM: u32 = 50;

/// Radius used when the request does not carry one
pub const DEFAULT_RADIUS_KM: u32 = 10;

/// One fully enriched castle in the search output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CastleReport {
    /// The place record (always carries a website)
    pub place: Place,
    /// Encyclopedia description and preview image
    pub knowledge: KnowledgeSummary,
    /// Aggregate review sentiment
    pub sentiment: SentimentResult,
    /// Distance from the origin and carbon estimate
    pub travel: DistanceEmission,
    /// Driving-directions deep link
    pub directions_url: String,
}

/// Result of one search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// Geocoded origin of the search
    pub origin: Location,
    /// Enriched castles, in the order the places provider returned them
    pub castles: Vec<CastleReport>,
    /// Inline message when the candidate search failed (origin stays usable)
    pub warning: Option<String>,
}

/// Service running the search pipeline
pub struct CastleSearchService {
    places: GoogleMapsClient,
    wikipedia: WikipediaClient,
}

impl CastleSearchService {
    /// Create a service with clients built from the configuration
    pub fn new(config: &AppConfig) -> Result<Self> {
        Ok(Self {
            places: GoogleMapsClient::new(config)?,
            wikipedia: WikipediaClient::new()?,
        })
    }

    /// Run one search for castles around a free-text location
    ///
    /// Failure model: validation and geocoding errors abort the search;
    /// a failed candidate search degrades to an empty list with a warning;
    /// a failed details or encyclopedia lookup only affects its place.
    pub async fn search(&self, location_text: &str, radius_km: u32) -> Result<SearchOutcome> {
        validate_request(location_text, radius_km)?;

        let origin = self.places.geocode(location_text).await?;
        let radius_m = radius_km * 1000;

        let stubs = match self
            .places
            .nearby_search(&origin, radius_m, SEARCH_KEYWORD)
            .await
        {
            Ok(stubs) => stubs,
            Err(error) => {
                warn!("Candidate search failed: {error:#}");
                return Ok(SearchOutcome {
                    origin,
                    castles: Vec::new(),
                    warning: Some(user_facing_message(&error)),
                });
            }
        };

        let mut castles = Vec::new();
        for stub in stubs {
            let place = match self.places.place_details(&stub).await {
                Ok(Some(place)) => place,
                Ok(None) => continue,
                Err(error) => {
                    warn!("Skipping '{}': {error:#}", stub.name);
                    continue;
                }
            };

            let knowledge = match self.wikipedia.lookup(&place.name).await {
                Ok(summary) => summary,
                Err(error) => {
                    warn!("Encyclopedia lookup failed for '{}': {error:#}", place.name);
                    KnowledgeSummary::default()
                }
            };

            let sentiment = sentiment::score_reviews(&place.reviews);
            let travel = routing::estimate(&origin, &place.location);
            let directions_url = routing::directions_url(location_text, &place.location);

            debug!(
                "Enriched '{}' ({:.2} km, {:.2} kg CO2)",
                place.name, travel.distance_km, travel.emission_kg
            );

            castles.push(CastleReport {
                place,
                knowledge,
                sentiment,
                travel,
                directions_url,
            });
        }

        info!(
            "Search around '{}' kept {} castles with a website",
            location_text,
            castles.len()
        );

        Ok(SearchOutcome {
            origin,
            castles,
            warning: None,
        })
    }
}

/// Reject bad input before any network call happens
fn validate_request(location_text: &str, radius_km: u32) -> Result<()> {
    if location_text.trim().is_empty() {
        return Err(CastleExplorerError::validation("Location cannot be empty").into());
    }

    if !(MIN_RADIUS_KM..=MAX_RADIUS_KM).contains(&radius_km) {
        return Err(CastleExplorerError::validation(format!(
            "Radius must be between {MIN_RADIUS_KM} and {MAX_RADIUS_KM} km, got {radius_km}"
        ))
        .into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> AppConfig {
        AppConfig {
            google_api_key: "test_api_key_123".to_string(),
            port: 3000,
        }
    }

    #[test]
    fn test_validate_request_accepts_bounds() {
        assert!(validate_request("Lyon, France", MIN_RADIUS_KM).is_ok());
        assert!(validate_request("Lyon, France", DEFAULT_RADIUS_KM).is_ok());
        assert!(validate_request("Lyon, France", MAX_RADIUS_KM).is_ok());
    }

    #[test]
    fn test_validate_request_rejects_out_of_range_radius() {
        assert!(validate_request("Lyon, France", 0).is_err());
        assert!(validate_request("Lyon, France", 51).is_err());
    }

    #[test]
    fn test_validate_request_rejects_empty_location() {
        assert!(validate_request("", DEFAULT_RADIUS_KM).is_err());
        assert!(validate_request("   ", DEFAULT_RADIUS_KM).is_err());
    }

    #[tokio::test]
    async fn test_search_rejects_invalid_radius_before_any_call() {
        let service = CastleSearchService::new(&test_config()).unwrap();
        let result = service.search("Lyon, France", 0).await;
        let error = result.unwrap_err();
        assert!(
            error
                .downcast_ref::<CastleExplorerError>()
                .is_some_and(|e| matches!(e, CastleExplorerError::Validation { .. }))
        );
    }

    #[test]
    fn test_radius_conversion_to_meters() {
        // The slider works in kilometers, the places API in meters
        assert_eq!(DEFAULT_RADIUS_KM * 1000, 10_000);
    }
}
