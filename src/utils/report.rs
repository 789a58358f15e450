// Human-readable route reports

use std::fmt;

use crate::algorithms::Algorithm;
use crate::models::{Distance, NodeIndex, RouteResult, RouteShape};
use crate::utils::matrix::DistanceMatrix;

/// Formats the report for `path` over `points`.
///
/// `loop_threshold_km` is `Some` for loop routes and carries the threshold used
/// to classify them.
pub fn format_route<S: AsRef<str>>(
    points: &[S],
    path: &[NodeIndex],
    matrix: &DistanceMatrix,
    algorithm: Algorithm,
    loop_threshold_km: Option<Distance>,
) -> String {
    RouteResult::from_path(points, path, matrix, algorithm, loop_threshold_km).to_string()
}

impl fmt::Display for RouteResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.shape {
            RouteShape::Loop { .. } => writeln!(f, "[Loop route]")?,
            RouteShape::Open { .. } => writeln!(f, "[Open route]")?,
        }

        writeln!(f, "Full route:")?;
        let sequence = self
            .ordered_points
            .iter()
            .enumerate()
            .map(|(i, name)| format!("{}. {}", i + 1, name))
            .collect::<Vec<_>>()
            .join(" → ");
        write!(f, "{sequence}")?;
        if let RouteShape::Loop { anchor, .. } = &self.shape {
            write!(f, " → back to {anchor}")?;
        }
        writeln!(f)?;
        writeln!(f)?;

        writeln!(f, "Algorithm: {}", self.algorithm_name)?;
        writeln!(f, "Description: {}", self.algorithm_description)?;
        writeln!(f, "Total distance: {:.2} km", self.total_distance_km)?;
        writeln!(f, "Waypoints: {}", self.waypoint_count)?;
        if !self.skipped_points.is_empty() {
            writeln!(f, "Not visited: {}", self.skipped_points.join(", "))?;
        }
        writeln!(f)?;

        match &self.shape {
            RouteShape::Loop {
                threshold_km,
                anchor,
                closing_leg_km,
            } => {
                writeln!(f, "Loop details:")?;
                writeln!(f, "• start and end are within {threshold_km} km of each other")?;
                writeln!(f, "• start/end: {anchor}")?;
                writeln!(f, "• return leg: {closing_leg_km:.2} km")?;
            }
            RouteShape::Open { direct_distance_km } => {
                writeln!(f, "Start to end distance: {direct_distance_km:.2} km")?;
            }
        }

        write!(
            f,
            "Route type: {}",
            if self.is_loop() { "loop" } else { "open" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GeoPoint;

    fn points() -> Vec<GeoPoint> {
        vec![
            GeoPoint::start("A", 0.0, 0.0),
            GeoPoint::waypoint("B", 0.0, 1.0),
            GeoPoint::end("C", 0.0, 2.0),
        ]
    }

    #[test]
    fn test_open_report() {
        let matrix = DistanceMatrix::build(&points());
        let report = format_route(
            &["A", "B", "C"],
            &[0, 1, 2],
            &matrix,
            Algorithm::NearestNeighbor,
            None,
        );

        assert!(report.starts_with("[Open route]\nFull route:\n1. A → 2. B → 3. C\n"));
        assert!(report.contains("Algorithm: Nearest neighbor"));
        assert!(report.contains("Description: greedy, always picks nearest unvisited point"));
        assert!(report.contains(&format!(
            "Total distance: {:.2} km",
            matrix.path_length(&[0, 1, 2])
        )));
        assert!(report.contains("Waypoints: 1"));
        assert!(!report.contains("Not visited"));
        assert!(report.ends_with("Route type: open"));
    }

    #[test]
    fn test_dijkstra_report_lists_skipped_points() {
        let matrix = DistanceMatrix::build(&points());
        let report = format_route(&["A", "B", "C"], &[0, 2], &matrix, Algorithm::Dijkstra, None);

        assert!(report.contains("1. A → 2. C\n"));
        assert!(report.contains(
            "Description: single-source shortest path, guarantees optimum for the point-to-point leg"
        ));
        assert!(report.contains("Not visited: B"));
    }

    #[test]
    fn test_loop_report() {
        let matrix = DistanceMatrix::build(&points());
        let report = format_route(
            &["A", "B", "C"],
            &[0, 1, 2],
            &matrix,
            Algorithm::NearestNeighbor,
            Some(0.5),
        );

        assert!(report.starts_with("[Loop route]"));
        assert!(report.contains("3. C → back to A"));
        assert!(report.contains("within 0.5 km"));
        assert!(report.contains("• start/end: A"));
        assert!(report.contains("Waypoints: 2"));
        assert!(report.ends_with("Route type: loop"));
    }
}
