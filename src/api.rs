use std::sync::Arc;

use axum::{
    Router,
    extract::{Query, State},
    response::Json,
    routing::get,
};
use serde::{Deserialize, Serialize};

use crate::error::user_facing_message;
use crate::search::{CastleReport, CastleSearchService, DEFAULT_RADIUS_KM, SearchOutcome};
use crate::sentiment::SentimentResult;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub location: String,
    pub radius_km: Option<u32>,
}

#[derive(Serialize, Deserialize)]
pub struct ApiLocation {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Serialize, Deserialize)]
pub struct ApiSentiment {
    pub label: String,
    pub score: f64,
}

#[derive(Serialize, Deserialize)]
pub struct ApiCastle {
    pub place_id: String,
    pub name: String,
    pub location: ApiLocation,
    pub address: Option<String>,
    pub website: String,
    pub phone: Option<String>,
    pub rating: f64,
    pub rating_count: u32,
    /// Absent when no review carried scorable text
    pub sentiment: Option<ApiSentiment>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub distance_km: f64,
    pub emission_kg: f64,
    pub directions_url: String,
}

#[derive(Serialize, Deserialize)]
pub struct ApiSearchResponse {
    /// Geocoded origin; absent when geocoding failed
    pub origin: Option<ApiLocation>,
    pub castles: Vec<ApiCastle>,
    /// Inline message shown to the user
    pub error: Option<String>,
}

impl From<&CastleReport> for ApiCastle {
    fn from(report: &CastleReport) -> Self {
        let sentiment = match &report.sentiment {
            SentimentResult::Scored { label, score } => Some(ApiSentiment {
                label: label.to_string(),
                score: *score,
            }),
            SentimentResult::NoData => None,
        };

        Self {
            place_id: report.place.place_id.clone(),
            name: report.place.name.clone(),
            location: ApiLocation {
                latitude: report.place.location.latitude,
                longitude: report.place.location.longitude,
            },
            address: report.place.address.clone(),
            website: report.place.website.clone(),
            phone: report.place.phone.clone(),
            rating: report.place.rating,
            rating_count: report.place.rating_count,
            sentiment,
            description: report.knowledge.description.clone(),
            image_url: report.knowledge.image_url.clone(),
            distance_km: report.travel.distance_km,
            emission_kg: report.travel.emission_kg,
            directions_url: report.directions_url.clone(),
        }
    }
}

impl From<SearchOutcome> for ApiSearchResponse {
    fn from(outcome: SearchOutcome) -> Self {
        Self {
            origin: Some(ApiLocation {
                latitude: outcome.origin.latitude,
                longitude: outcome.origin.longitude,
            }),
            castles: outcome.castles.iter().map(ApiCastle::from).collect(),
            error: outcome.warning,
        }
    }
}

impl ApiSearchResponse {
    /// Response for a search that produced nothing but an error message
    #[must_use]
    pub fn failed(message: String) -> Self {
        Self {
            origin: None,
            castles: Vec::new(),
            error: Some(message),
        }
    }
}

pub fn router(service: Arc<CastleSearchService>) -> Router {
    Router::new()
        .route("/search", get(search))
        .with_state(service)
}

async fn search(
    State(service): State<Arc<CastleSearchService>>,
    Query(params): Query<SearchParams>,
) -> Json<ApiSearchResponse> {
    let radius_km = params.radius_km.unwrap_or(DEFAULT_RADIUS_KM);

    match service.search(&params.location, radius_km).await {
        Ok(outcome) => Json(ApiSearchResponse::from(outcome)),
        Err(error) => Json(ApiSearchResponse::failed(user_facing_message(&error))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Location, Place};
    use crate::routing::DistanceEmission;
    use crate::sentiment::SentimentLabel;
    use crate::wikipedia::KnowledgeSummary;

    fn sample_report(sentiment: SentimentResult) -> CastleReport {
        CastleReport {
            place: Place {
                place_id: "abc123".to_string(),
                name: "Château de Test".to_string(),
                location: Location::new(45.9, 4.9),
                address: Some("1 rue du Château".to_string()),
                website: "https://example.com".to_string(),
                phone: None,
                rating: 4.5,
                rating_count: 10,
                reviews: Vec::new(),
            },
            knowledge: KnowledgeSummary::default(),
            sentiment,
            travel: DistanceEmission {
                distance_km: 10.0,
                emission_kg: 1.2,
            },
            directions_url: "https://www.google.com/maps/dir/?api=1".to_string(),
        }
    }

    #[test]
    fn test_castle_mapping_with_score() {
        let report = sample_report(SentimentResult::Scored {
            label: SentimentLabel::Positive,
            score: 0.4,
        });
        let api = ApiCastle::from(&report);
        assert_eq!(api.name, "Château de Test");
        assert_eq!(api.rating, 4.5);
        assert_eq!(api.rating_count, 10);
        let sentiment = api.sentiment.unwrap();
        assert_eq!(sentiment.label, "Positive");
        assert_eq!(sentiment.score, 0.4);
        assert!(api.description.is_none());
        assert!(api.image_url.is_none());
    }

    #[test]
    fn test_castle_mapping_without_review_data() {
        let api = ApiCastle::from(&sample_report(SentimentResult::NoData));
        assert!(api.sentiment.is_none());
    }

    #[test]
    fn test_outcome_mapping_keeps_warning() {
        let outcome = SearchOutcome {
            origin: Location::new(45.76, 4.83),
            castles: Vec::new(),
            warning: Some("Searching for castles failed: OVER_QUERY_LIMIT".to_string()),
        };
        let response = ApiSearchResponse::from(outcome);
        assert!(response.origin.is_some());
        assert!(response.castles.is_empty());
        assert!(response.error.unwrap().contains("OVER_QUERY_LIMIT"));
    }

    #[test]
    fn test_failed_response_has_no_origin() {
        let response = ApiSearchResponse::failed("Could not locate that place".to_string());
        assert!(response.origin.is_none());
        assert!(response.castles.is_empty());
        assert!(response.error.is_some());
    }
}
