// Route models: what the user asks for and what the engine reports back

use crate::algorithms::Algorithm;
use crate::error::{PlannerError, Result};
use crate::models::{Distance, GeoPoint, NodeIndex, PointRole};
use crate::utils::loop_route::LoopClassifier;
use crate::utils::matrix::DistanceMatrix;
use serde::Serialize;

/// A planning request: fixed start and end, ordered unique waypoints
#[derive(Debug, Clone)]
pub struct RouteRequest {
    start: GeoPoint,
    waypoints: Vec<GeoPoint>,
    end: GeoPoint,
    is_loop: bool,
    algorithm: Algorithm,
    classifier: LoopClassifier,
}

/// Outcome of a bulk waypoint import
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub imported: usize,
    pub duplicates: usize,
}

impl RouteRequest {
    /// Creates a request without waypoints and classifies it as loop or open
    pub fn new(
        start: GeoPoint,
        end: GeoPoint,
        algorithm: Algorithm,
        classifier: LoopClassifier,
    ) -> Self {
        let mut request = Self {
            start: start.with_role(PointRole::Start),
            waypoints: Vec::new(),
            end: end.with_role(PointRole::End),
            is_loop: false,
            algorithm,
            classifier,
        };
        request.classify();
        request
    }

    pub fn start(&self) -> &GeoPoint {
        &self.start
    }

    pub fn end(&self) -> &GeoPoint {
        &self.end
    }

    pub fn waypoints(&self) -> &[GeoPoint] {
        &self.waypoints
    }

    pub fn is_loop(&self) -> bool {
        self.is_loop
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn classifier(&self) -> &LoopClassifier {
        &self.classifier
    }

    /// Appends a waypoint, rejecting names that were already added
    pub fn add_waypoint(&mut self, point: GeoPoint) -> Result<()> {
        if self.has_waypoint(&point.name) {
            return Err(PlannerError::DuplicateWaypoint(point.name));
        }
        self.waypoints.push(point.with_role(PointRole::Waypoint));
        Ok(())
    }

    /// Adds every new waypoint in order, counting the duplicates that were skipped
    pub fn import_waypoints<I>(&mut self, points: I) -> ImportSummary
    where
        I: IntoIterator<Item = GeoPoint>,
    {
        let mut summary = ImportSummary::default();
        for point in points {
            match self.add_waypoint(point) {
                Ok(()) => summary.imported += 1,
                Err(_) => summary.duplicates += 1,
            }
        }
        summary
    }

    pub fn has_waypoint(&self, name: &str) -> bool {
        self.waypoints.iter().any(|wp| wp.name == name)
    }

    pub fn remove_waypoint(&mut self, name: &str) -> bool {
        let before = self.waypoints.len();
        self.waypoints.retain(|wp| wp.name != name);
        self.waypoints.len() != before
    }

    pub fn set_start(&mut self, start: GeoPoint) {
        self.start = start.with_role(PointRole::Start);
        self.classify();
    }

    pub fn set_end(&mut self, end: GeoPoint) {
        self.end = end.with_role(PointRole::End);
        self.classify();
    }

    /// Exchanges start and end and re-evaluates the loop flag
    pub fn swap_endpoints(&mut self) {
        std::mem::swap(&mut self.start, &mut self.end);
        self.start.role = PointRole::Start;
        self.end.role = PointRole::End;
        self.classify();
    }

    /// Takes effect on the next calculation
    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        self.algorithm = algorithm;
    }

    /// Points fed to the matrix: `[start, waypoints.., end]`, without the end for loops
    pub fn node_points(&self) -> Vec<&GeoPoint> {
        let mut points = Vec::with_capacity(self.waypoints.len() + 2);
        points.push(&self.start);
        points.extend(self.waypoints.iter());
        if !self.is_loop {
            points.push(&self.end);
        }
        points
    }

    pub fn node_names(&self) -> Vec<String> {
        self.node_points().into_iter().map(|p| p.name.clone()).collect()
    }

    fn classify(&mut self) {
        self.is_loop = self
            .classifier
            .is_same_location(&self.start.location, &self.end.location);
    }
}

/// Whether a computed route is open or a closed circuit, with the extra figures each shows
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum RouteShape {
    Open {
        /// Great-circle distance between the two anchors
        direct_distance_km: Distance,
    },
    Loop {
        threshold_km: Distance,
        /// Point serving as both start and end
        anchor: String,
        /// Distance from the final stop back to the anchor
        closing_leg_km: Distance,
    },
}

/// A computed route, ready for presentation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteResult {
    /// Point names in visiting order
    pub ordered_points: Vec<String>,

    /// Node indices in visiting order
    pub path: Vec<NodeIndex>,

    /// Points of the request the path does not pass through
    pub skipped_points: Vec<String>,

    /// Sum of the legs actually present in the path
    pub total_distance_km: Distance,

    pub algorithm: Algorithm,
    pub algorithm_name: String,
    pub algorithm_description: String,

    /// Number of intermediate points in the request
    pub waypoint_count: usize,

    pub shape: RouteShape,
}

impl RouteResult {
    /// Assembles the result for `path` over `points` using `matrix` for the legs.
    /// For loops, `threshold_km` is the classifier threshold that was applied.
    pub fn from_path<S: AsRef<str>>(
        points: &[S],
        path: &[NodeIndex],
        matrix: &DistanceMatrix,
        algorithm: Algorithm,
        loop_threshold_km: Option<Distance>,
    ) -> Self {
        let ordered_points = path
            .iter()
            .map(|&index| points[index].as_ref().to_string())
            .collect();
        let skipped_points = (0..points.len())
            .filter(|index| !path.contains(index))
            .map(|index| points[index].as_ref().to_string())
            .collect();

        let first = path.first().copied().unwrap_or(0);
        let last = path.last().copied().unwrap_or(0);
        let anchors = if loop_threshold_km.is_some() { 1 } else { 2 };

        let shape = match loop_threshold_km {
            Some(threshold_km) => RouteShape::Loop {
                threshold_km,
                anchor: points
                    .get(first)
                    .map(|p| p.as_ref().to_string())
                    .unwrap_or_default(),
                closing_leg_km: if path.len() > 1 {
                    matrix.get(last, first)
                } else {
                    0.0
                },
            },
            None => RouteShape::Open {
                direct_distance_km: if path.len() > 1 {
                    matrix.get(first, last)
                } else {
                    0.0
                },
            },
        };

        Self {
            ordered_points,
            path: path.to_vec(),
            skipped_points,
            total_distance_km: matrix.path_length(path),
            algorithm,
            algorithm_name: algorithm.name().to_string(),
            algorithm_description: algorithm.description().to_string(),
            waypoint_count: points.len().saturating_sub(anchors),
            shape,
        }
    }

    pub fn is_loop(&self) -> bool {
        matches!(self.shape, RouteShape::Loop { .. })
    }
}
