//! Location model for geographic coordinates

use serde::{Deserialize, Serialize};

/// Location coordinates
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Location {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

impl Location {
    /// Create a new location
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Format location as a "lat,lng" pair for API query strings
    #[must_use]
    pub fn as_query_pair(&self) -> String {
        format!("{},{}", self.latitude, self.longitude)
    }

    /// Format location as a readable coordinates string
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_pair() {
        let location = Location::new(45.7640, 4.8357);
        assert_eq!(location.as_query_pair(), "45.764,4.8357");
    }

    #[test]
    fn test_format_coordinates() {
        let location = Location::new(45.764_043, 4.835_659);
        assert_eq!(location.format_coordinates(), "45.7640, 4.8357");
    }
}
