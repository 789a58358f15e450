// Loop route classification

use crate::models::Location;

/// Start and end closer than this are treated as the same place
pub const LOOP_DISTANCE_THRESHOLD_KM: f64 = 0.5;

/// Decides whether a route's start and end are effectively the same physical point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoopClassifier {
    threshold_km: f64,
}

impl LoopClassifier {
    pub fn new(threshold_km: f64) -> Self {
        Self { threshold_km }
    }

    pub fn threshold_km(&self) -> f64 {
        self.threshold_km
    }

    /// True when the two locations are at most `threshold_km` apart (inclusive)
    pub fn is_same_location(&self, c1: &Location, c2: &Location) -> bool {
        is_same_location(c1, c2, self.threshold_km)
    }
}

impl Default for LoopClassifier {
    fn default() -> Self {
        Self::new(LOOP_DISTANCE_THRESHOLD_KM)
    }
}

pub fn is_same_location(c1: &Location, c2: &Location, threshold_km: f64) -> bool {
    c1.distance_to(c2) <= threshold_km
}
