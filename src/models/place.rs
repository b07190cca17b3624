//! Place models for castle candidates returned by the places provider

use crate::models::Location;
use serde::{Deserialize, Serialize};

/// A candidate returned by the nearby search, before detail enrichment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceStub {
    /// Opaque identifier from the places provider
    pub place_id: String,
    /// Display name from the search result
    pub name: String,
    /// Coordinates from the search result
    pub location: Location,
}

/// A fully enriched castle record
///
/// Only built for candidates whose details carry a website; everything else
/// is dropped before enrichment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Place {
    /// Opaque identifier from the places provider
    pub place_id: String,
    /// Display name
    pub name: String,
    /// Coordinates (taken from the search result, not the details response)
    pub location: Location,
    /// Formatted postal address, when the provider has one
    pub address: Option<String>,
    /// Official website, always non-empty
    pub website: String,
    /// Formatted phone number, when the provider has one
    pub phone: Option<String>,
    /// Average rating on a 0-5 scale, 0 when unrated
    pub rating: f64,
    /// Number of ratings behind the average
    pub rating_count: u32,
    /// User reviews attached to the place
    pub reviews: Vec<Review>,
}

/// A single user review
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    /// Free-text body; reviews can be rating-only
    pub text: Option<String>,
}

impl Review {
    /// Create a review with a text body
    #[must_use]
    pub fn with_text<S: Into<String>>(text: S) -> Self {
        Self {
            text: Some(text.into()),
        }
    }

    /// Create a rating-only review without text
    #[must_use]
    pub fn without_text() -> Self {
        Self { text: None }
    }
}
