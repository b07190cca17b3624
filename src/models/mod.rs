//! Data models for the Castle Explorer application
//!
//! Core domain types shared across the pipeline:
//! - Location: geographic coordinates
//! - Place: a castle candidate with its contact and review data

pub mod location;
pub mod place;

// Re-export all public types for convenient access
pub use location::Location;
pub use place::{Place, PlaceStub, Review};
