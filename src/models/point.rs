// Named points along a route

use crate::models::Location;
use serde::{Deserialize, Serialize};

/// Role of a point within a route. Only affects how the point is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointRole {
    Start,
    End,
    Waypoint,
}

impl PointRole {
    /// Marker colour used by map front ends
    pub fn color(&self) -> &'static str {
        match self {
            PointRole::Start => "red",
            PointRole::End => "green",
            PointRole::Waypoint => "orange",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            PointRole::Start => "mark_r",
            PointRole::End => "mark_g",
            PointRole::Waypoint => "mark_y",
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            PointRole::Start => "start",
            PointRole::End => "end",
            PointRole::Waypoint => "waypoint",
        }
    }

    pub fn label_prefix(&self) -> &'static str {
        match self {
            PointRole::Start => "Start",
            PointRole::End => "End",
            PointRole::Waypoint => "Waypoint",
        }
    }
}

/// A named, geocoded point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Place name as entered by the user
    pub name: String,

    /// Resolved coordinate
    pub location: Location,

    /// Display role
    pub role: PointRole,
}

impl GeoPoint {
    /// Creates a new point with the given name, coordinate and role
    pub fn new<S: Into<String>>(name: S, location: Location, role: PointRole) -> Self {
        Self {
            name: name.into(),
            location,
            role,
        }
    }

    pub fn start<S: Into<String>>(name: S, longitude: f64, latitude: f64) -> Self {
        Self::new(name, Location::new(longitude, latitude), PointRole::Start)
    }

    pub fn end<S: Into<String>>(name: S, longitude: f64, latitude: f64) -> Self {
        Self::new(name, Location::new(longitude, latitude), PointRole::End)
    }

    pub fn waypoint<S: Into<String>>(name: S, longitude: f64, latitude: f64) -> Self {
        Self::new(name, Location::new(longitude, latitude), PointRole::Waypoint)
    }

    /// Same point with a different role
    pub fn with_role(&self, role: PointRole) -> Self {
        Self {
            role,
            ..self.clone()
        }
    }

    /// Label such as `Start: Beijing`
    pub fn display_name(&self) -> String {
        format!("{}: {}", self.role.label_prefix(), self.name)
    }

    pub fn longitude(&self) -> f64 {
        self.location.longitude
    }

    pub fn latitude(&self) -> f64 {
        self.location.latitude
    }

    /// Great-circle distance to another point in kilometers
    pub fn distance_to(&self, other: &GeoPoint) -> f64 {
        self.location.distance_to(&other.location)
    }
}
