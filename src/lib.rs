// Public modules
pub mod algorithms;
pub mod config;
pub mod error;
pub mod models;
pub mod planner;
pub mod resolver;
pub mod utils;

// Re-exports for convenience
pub use algorithms::Algorithm;
pub use config::PlannerConfig;
pub use error::{ErrorKind, PlannerError, Result};
pub use models::{GeoPoint, Location, PointRole, RouteRequest, RouteResult};
pub use planner::{DisplaySink, RoutePlanner};
pub use utils::distance::{great_circle_distance, EARTH_RADIUS_KM};
pub use utils::loop_route::{LoopClassifier, LOOP_DISTANCE_THRESHOLD_KM};
pub use utils::matrix::DistanceMatrix;
