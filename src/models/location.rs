// Location model representing geographic coordinates

use crate::utils::distance::great_circle_distance;
use serde::{Deserialize, Serialize};

/// Represents a resolved (longitude, latitude) pair in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub longitude: f64,
    pub latitude: f64,
}

impl Location {
    /// Creates a new location without range checks
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }

    /// Creates a location, returning `None` unless both values are finite
    /// and inside ±180° longitude / ±90° latitude
    pub fn try_new(longitude: f64, latitude: f64) -> Option<Self> {
        let location = Self::new(longitude, latitude);
        location.is_valid().then_some(location)
    }

    pub fn is_valid(&self) -> bool {
        self.longitude.is_finite()
            && self.latitude.is_finite()
            && (-180.0..=180.0).contains(&self.longitude)
            && (-90.0..=90.0).contains(&self.latitude)
    }

    /// Great-circle distance to another location in kilometers
    pub fn distance_to(&self, other: &Location) -> f64 {
        great_circle_distance(self, other)
    }
}

impl From<geo::Point<f64>> for Location {
    fn from(point: geo::Point<f64>) -> Self {
        Self::new(point.x(), point.y())
    }
}

impl From<Location> for geo::Point<f64> {
    fn from(location: Location) -> Self {
        geo::Point::new(location.longitude, location.latitude)
    }
}
