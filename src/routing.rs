//! Travel metrics between the search origin and a castle
//!
//! Great-circle distance plus a linear carbon estimate for an average
//! passenger car, and the Google Maps driving-directions deep link.

use haversine::{Location as HaversineLocation, Units, distance};
use serde::{Deserialize, Serialize};

use crate::models::Location;

/// Average passenger car emission factor, grams of CO2 per kilometer
pub const EMISSION_FACTOR_CAR: f64 = 120.0;

/// Distance and carbon estimate for one origin/destination pair
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DistanceEmission {
    /// Great-circle distance in kilometers
    pub distance_km: f64,
    /// Estimated CO2 mass in kilograms for a one-way car trip
    pub emission_kg: f64,
}

/// Great-circle distance between two coordinates in kilometers
#[must_use]
pub fn distance_km(from: &Location, to: &Location) -> f64 {
    let from_haversine = HaversineLocation {
        latitude: from.latitude,
        longitude: from.longitude,
    };
    let to_haversine = HaversineLocation {
        latitude: to.latitude,
        longitude: to.longitude,
    };
    distance(from_haversine, to_haversine, Units::Kilometers)
}

/// Carbon estimate in kilograms for a car trip of the given length
#[must_use]
pub fn carbon_emission_kg(distance_km: f64) -> f64 {
    distance_km * (EMISSION_FACTOR_CAR / 1000.0)
}

/// Distance and emission for one origin/destination pair
#[must_use]
pub fn estimate(from: &Location, to: &Location) -> DistanceEmission {
    let km = distance_km(from, to);
    DistanceEmission {
        distance_km: km,
        emission_kg: carbon_emission_kg(km),
    }
}

/// Driving-directions deep link from the user's origin text to a destination
#[must_use]
pub fn directions_url(origin: &str, destination: &Location) -> String {
    format!(
        "https://www.google.com/maps/dir/?api=1&origin={}&destination={}&travelmode=driving",
        urlencoding::encode(origin),
        destination.as_query_pair()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_is_symmetric() {
        let lyon = Location::new(45.7640, 4.8357);
        let annecy = Location::new(45.8992, 6.1294);
        assert_eq!(distance_km(&lyon, &annecy), distance_km(&annecy, &lyon));
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        let lyon = Location::new(45.7640, 4.8357);
        assert!(distance_km(&lyon, &lyon).abs() < 1e-9);
    }

    #[test]
    fn test_known_distance() {
        // Lyon to Annecy is roughly 100 km as the crow flies
        let lyon = Location::new(45.7640, 4.8357);
        let annecy = Location::new(45.8992, 6.1294);
        let km = distance_km(&lyon, &annecy);
        assert!((90.0..120.0).contains(&km), "got {km} km");
    }

    #[test]
    fn test_emission_is_linear() {
        assert_eq!(carbon_emission_kg(0.0), 0.0);
        assert_eq!(carbon_emission_kg(10.0), 1.2);
        assert_eq!(carbon_emission_kg(100.0), 12.0);
        for km in [0.5, 7.3, 42.0, 250.0] {
            assert_eq!(carbon_emission_kg(km), km * 0.12);
        }
    }

    #[test]
    fn test_estimate_combines_both() {
        let lyon = Location::new(45.7640, 4.8357);
        let annecy = Location::new(45.8992, 6.1294);
        let result = estimate(&lyon, &annecy);
        assert_eq!(result.emission_kg, result.distance_km * 0.12);
    }

    #[test]
    fn test_directions_url() {
        let destination = Location::new(45.8992, 6.1294);
        let url = directions_url("Lyon, France", &destination);
        assert_eq!(
            url,
            "https://www.google.com/maps/dir/?api=1&origin=Lyon%2C%20France&destination=45.8992,6.1294&travelmode=driving"
        );
    }
}
