//! Google Maps API client
//!
//! Covers the three calls the search pipeline makes against the Google Maps
//! platform: geocoding a free-text city, the nearby search for castle
//! candidates, and the per-place details request. Success is decided by the
//! `status` field inside the response body, not only the HTTP status line.

use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::CastleExplorerError;
use crate::config::AppConfig;
use crate::models::{Location, Place, PlaceStub, Review};
use anyhow::{Context, Result};

/// Fields requested from the place details endpoint
const DETAIL_FIELDS: &str =
    "name,formatted_address,website,opening_hours,formatted_phone_number,rating,user_ratings_total,reviews";

/// Google Maps API client
pub struct GoogleMapsClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GoogleMapsClient {
    /// Create a new client
    pub fn new(config: &AppConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("castle-explorer/", env!("CARGO_PKG_VERSION")))
            .build()
            .with_context(|| "Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_key: config.google_api_key.clone(),
            base_url: "https://maps.googleapis.com/maps/api".to_string(),
        })
    }

    /// Resolve a free-text place name to coordinates
    ///
    /// Only the first candidate is used; there is no disambiguation between
    /// multiple matches.
    pub async fn geocode(&self, address: &str) -> Result<Location> {
        debug!("Geocoding '{}'", address);

        let url = format!(
            "{}/geocode/json?address={}&key={}",
            self.base_url,
            urlencoding::encode(address),
            self.api_key
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| CastleExplorerError::api(format!("Geocoding request failed: {e}")))?;

        let payload: response::GeocodeResponse = response
            .json()
            .await
            .with_context(|| "Failed to parse geocoding response")?;

        if payload.status != "OK" {
            return Err(CastleExplorerError::geocoding(
                payload.error_message.unwrap_or(payload.status),
            )
            .into());
        }

        let first = payload
            .results
            .into_iter()
            .next()
            .ok_or_else(|| CastleExplorerError::geocoding("No candidates returned"))?;

        let location = Location::new(
            first.geometry.location.lat,
            first.geometry.location.lng,
        );
        info!(
            "Geocoded '{}' to {}",
            address,
            location.format_coordinates()
        );
        Ok(location)
    }

    /// Search for castle candidates around a point
    ///
    /// Returns all candidates from the single response page, in API order.
    /// The `next_page_token` is deliberately not followed.
    pub async fn nearby_search(
        &self,
        center: &Location,
        radius_m: u32,
        keyword: &str,
    ) -> Result<Vec<PlaceStub>> {
        info!(
            "Searching '{}' within {}m of {}",
            keyword,
            radius_m,
            center.format_coordinates()
        );

        let url = format!(
            "{}/place/nearbysearch/json?location={}&radius={}&keyword={}&key={}",
            self.base_url,
            center.as_query_pair(),
            radius_m,
            urlencoding::encode(keyword),
            self.api_key
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| CastleExplorerError::api(format!("Nearby search request failed: {e}")))?;

        let payload: response::NearbySearchResponse = response
            .json()
            .await
            .with_context(|| "Failed to parse nearby search response")?;

        if payload.status != "OK" {
            return Err(CastleExplorerError::place_search(
                payload.error_message.unwrap_or(payload.status),
            )
            .into());
        }

        let stubs: Vec<PlaceStub> = payload
            .results
            .into_iter()
            .map(|result| PlaceStub {
                place_id: result.place_id,
                name: result.name,
                location: Location::new(result.geometry.location.lat, result.geometry.location.lng),
            })
            .collect();

        info!("Found {} candidates", stubs.len());
        Ok(stubs)
    }

    /// Fetch extended attributes for one candidate
    ///
    /// Returns `None` when the place has no website; such places never reach
    /// the output. Coordinates are kept from the search stub.
    pub async fn place_details(&self, stub: &PlaceStub) -> Result<Option<Place>> {
        debug!("Fetching details for '{}'", stub.name);

        let url = format!(
            "{}/place/details/json?place_id={}&fields={}&key={}",
            self.base_url,
            urlencoding::encode(&stub.place_id),
            DETAIL_FIELDS,
            self.api_key
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| CastleExplorerError::api(format!("Details request failed: {e}")))?;

        let payload: response::DetailsResponse = response
            .json()
            .await
            .with_context(|| "Failed to parse place details response")?;

        if payload.status != "OK" {
            return Err(
                CastleExplorerError::api(payload.error_message.unwrap_or(payload.status)).into(),
            );
        }

        let details = payload
            .result
            .ok_or_else(|| CastleExplorerError::api("Details response without result"))?;

        let Some(website) = details.website.filter(|site| !site.is_empty()) else {
            warn!("Skipping '{}': no website listed", stub.name);
            return Ok(None);
        };

        Ok(Some(Place {
            place_id: stub.place_id.clone(),
            name: details.name.unwrap_or_else(|| stub.name.clone()),
            location: stub.location,
            address: details.formatted_address,
            website,
            phone: details.formatted_phone_number,
            rating: details.rating.unwrap_or(0.0),
            rating_count: details.user_ratings_total.unwrap_or(0),
            reviews: details
                .reviews
                .unwrap_or_default()
                .into_iter()
                .map(|review| Review { text: review.text })
                .collect(),
        }))
    }
}

/// Google Maps API response payloads
mod response {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    pub struct GeocodeResponse {
        pub status: String,
        pub error_message: Option<String>,
        #[serde(default)]
        pub results: Vec<GeocodeResult>,
    }

    #[derive(Debug, Deserialize)]
    pub struct GeocodeResult {
        pub geometry: Geometry,
    }

    #[derive(Debug, Deserialize)]
    pub struct NearbySearchResponse {
        pub status: String,
        pub error_message: Option<String>,
        #[serde(default)]
        pub results: Vec<NearbyResult>,
    }

    #[derive(Debug, Deserialize)]
    pub struct NearbyResult {
        pub place_id: String,
        pub name: String,
        pub geometry: Geometry,
    }

    #[derive(Debug, Deserialize)]
    pub struct Geometry {
        pub location: LatLng,
    }

    #[derive(Debug, Deserialize)]
    pub struct LatLng {
        pub lat: f64,
        pub lng: f64,
    }

    #[derive(Debug, Deserialize)]
    pub struct DetailsResponse {
        pub status: String,
        pub error_message: Option<String>,
        pub result: Option<PlaceDetails>,
    }

    #[derive(Debug, Deserialize)]
    pub struct PlaceDetails {
        pub name: Option<String>,
        pub formatted_address: Option<String>,
        pub website: Option<String>,
        pub formatted_phone_number: Option<String>,
        pub rating: Option<f64>,
        pub user_ratings_total: Option<u32>,
        pub reviews: Option<Vec<ReviewPayload>>,
    }

    #[derive(Debug, Deserialize)]
    pub struct ReviewPayload {
        pub text: Option<String>,
    }
}
