// Models module - exports all model types

mod location;
mod point;
mod route;

// Re-export model types
pub use self::location::Location;
pub use self::point::{GeoPoint, PointRole};
pub use self::route::{ImportSummary, RouteRequest, RouteResult, RouteShape};

// Common type aliases for improved code readability
pub type Distance = f64;
pub type NodeIndex = usize;
