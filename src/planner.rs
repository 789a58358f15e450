// Route planner: validates a request, builds the matrix, orders the stops and reports

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::time::Instant;

use log::{debug, info, warn};

use crate::algorithms::{self, Algorithm};
use crate::config::PlannerConfig;
use crate::error::{ErrorKind, PlannerError, Result};
use crate::models::{GeoPoint, ImportSummary, PointRole, RouteRequest, RouteResult};
use crate::resolver::CoordinateResolver;
use crate::utils::loop_route::LoopClassifier;
use crate::utils::matrix::DistanceMatrix;

/// Receives the outcome of a calculation for presentation
pub trait DisplaySink {
    fn on_route_computed(&mut self, result: &RouteResult);
    fn on_error(&mut self, kind: ErrorKind, message: &str);
}

/// Sink that keeps everything it receives
#[derive(Debug, Default)]
pub struct CollectingSink {
    pub routes: Vec<RouteResult>,
    pub errors: Vec<(ErrorKind, String)>,
}

impl DisplaySink for CollectingSink {
    fn on_route_computed(&mut self, result: &RouteResult) {
        self.routes.push(result.clone());
    }

    fn on_error(&mut self, kind: ErrorKind, message: &str) {
        self.errors.push((kind, message.to_string()));
    }
}

/// Orchestrates a route calculation
#[derive(Debug, Clone, Default)]
pub struct RoutePlanner {
    config: PlannerConfig,
}

impl RoutePlanner {
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    pub fn classifier(&self) -> LoopClassifier {
        self.config.classifier()
    }

    /// Resolves `name` and wraps it as a point with the given role.
    /// Out-of-range coordinates are rejected here, before they reach a request.
    pub fn resolve_point<R: CoordinateResolver + ?Sized>(
        &self,
        resolver: &R,
        name: &str,
        role: PointRole,
    ) -> Result<GeoPoint> {
        let name = name.trim();
        let location = resolver.resolve(name)?;
        if !location.is_valid() {
            return Err(PlannerError::InvalidCoordinate {
                name: name.to_string(),
                longitude: location.longitude,
                latitude: location.latitude,
            });
        }
        debug!(
            "Resolved {} {} to ({}, {})",
            role.kind(),
            name,
            location.longitude,
            location.latitude
        );
        Ok(GeoPoint::new(name, location, role))
    }

    /// Resolves every name and assembles a request using the configured classifier.
    /// Duplicate waypoints are skipped with a warning.
    pub fn request<R, S>(
        &self,
        resolver: &R,
        start: &str,
        end: &str,
        waypoints: &[S],
        algorithm: Option<Algorithm>,
    ) -> Result<RouteRequest>
    where
        R: CoordinateResolver + ?Sized,
        S: AsRef<str>,
    {
        let start = self.resolve_point(resolver, start, PointRole::Start)?;
        let end = self.resolve_point(resolver, end, PointRole::End)?;
        let mut request = RouteRequest::new(
            start,
            end,
            algorithm.unwrap_or(self.config.algorithm),
            self.classifier(),
        );

        for name in waypoints {
            let name = name.as_ref().trim();
            if name.is_empty() {
                continue;
            }
            if request.has_waypoint(name) {
                warn!("Skipping duplicate waypoint {}", name);
                continue;
            }
            let point = self.resolve_point(resolver, name, PointRole::Waypoint)?;
            request.add_waypoint(point)?;
        }

        Ok(request)
    }

    /// Resolves one waypoint name per line and adds them to `request`.
    /// Blank lines are skipped; names already on the request count as duplicates.
    pub fn import_waypoint_lines<R, I, S>(
        &self,
        resolver: &R,
        request: &mut RouteRequest,
        lines: I,
    ) -> Result<ImportSummary>
    where
        R: CoordinateResolver + ?Sized,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let points = lines
            .into_iter()
            .filter(|line| !line.as_ref().trim().is_empty())
            .map(|line| self.resolve_point(resolver, line.as_ref(), PointRole::Waypoint))
            .collect::<Result<Vec<_>>>()?;

        Ok(request.import_waypoints(points))
    }

    /// Reads a waypoint file (one name per line) into `request`
    pub fn import_waypoints_file<R, P>(
        &self,
        resolver: &R,
        request: &mut RouteRequest,
        path: P,
    ) -> Result<ImportSummary>
    where
        R: CoordinateResolver + ?Sized,
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let summary = self.import_waypoint_lines(resolver, request, contents.lines())?;
        info!(
            "Imported {} waypoints from {} ({} duplicates skipped)",
            summary.imported,
            path.display(),
            summary.duplicates
        );
        Ok(summary)
    }

    /// Computes the route for `request`
    pub fn plan(&self, request: &RouteRequest) -> Result<RouteResult> {
        let points = request.node_points();
        if points.len() < 2 {
            return Err(PlannerError::InsufficientPoints {
                count: points.len(),
            });
        }

        for point in &points {
            if !point.location.is_valid() {
                return Err(PlannerError::InvalidCoordinate {
                    name: point.name.clone(),
                    longitude: point.longitude(),
                    latitude: point.latitude(),
                });
            }
        }

        let algorithm = request.algorithm();
        info!(
            "Planning {} route over {} points with {}",
            if request.is_loop() { "loop" } else { "open" },
            points.len(),
            algorithm
        );

        let started = Instant::now();
        let locations: Vec<_> = points.iter().map(|p| p.location).collect();
        let matrix = DistanceMatrix::from_locations(&locations);
        let path = algorithms::order(&matrix, 0, points.len() - 1, algorithm)?;

        let names: Vec<&str> = points.iter().map(|p| p.name.as_str()).collect();
        let loop_threshold = request
            .is_loop()
            .then(|| request.classifier().threshold_km());
        let result = RouteResult::from_path(&names, &path, &matrix, algorithm, loop_threshold);

        debug!(
            "Route {:?} totals {:.2} km (computed in {:.2?})",
            result.ordered_points,
            result.total_distance_km,
            started.elapsed()
        );

        Ok(result)
    }

    /// Computes a route over already-assembled node names, looking up coordinates in
    /// `resolved`. The first name is the start, the last one the end (or the last stop
    /// for loops).
    pub fn plan_points<S: AsRef<str>>(
        &self,
        names: &[S],
        resolved: &HashMap<String, GeoPoint>,
        algorithm: Algorithm,
        is_loop: bool,
    ) -> Result<RouteResult> {
        if names.len() < 2 {
            return Err(PlannerError::InsufficientPoints { count: names.len() });
        }

        let matrix = DistanceMatrix::build_for(names, resolved)?;
        let path = algorithms::order(&matrix, 0, names.len() - 1, algorithm)?;
        let loop_threshold = is_loop.then(|| self.config.loop_threshold_km);

        Ok(RouteResult::from_path(names, &path, &matrix, algorithm, loop_threshold))
    }

    /// Computes the route and reports the outcome to `sink` instead of returning it
    pub fn plan_with_sink(&self, request: &RouteRequest, sink: &mut dyn DisplaySink) {
        match self.plan(request) {
            Ok(result) => sink.on_route_computed(&result),
            Err(e) => {
                warn!("Route calculation failed: {}", e);
                sink.on_error(e.kind(), &e.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Location;
    use crate::resolver::StaticResolver;

    fn resolver() -> StaticResolver {
        StaticResolver::with_builtin_cities()
    }

    #[test]
    fn test_request_resolves_and_skips_duplicates() {
        let planner = RoutePlanner::default();
        let request = planner
            .request(
                &resolver(),
                "Beijing",
                "Shanghai",
                &["Tianjin", "Nanjing", "Tianjin", ""],
                None,
            )
            .unwrap();

        assert_eq!(
            request.node_names(),
            vec!["Beijing", "Tianjin", "Nanjing", "Shanghai"]
        );
        assert_eq!(request.algorithm(), Algorithm::NearestNeighbor);
        assert!(!request.is_loop());
    }

    #[test]
    fn test_request_fails_on_unknown_place() {
        let planner = RoutePlanner::default();
        let err = planner
            .request(&resolver(), "Beijing", "Shanghai", &["Atlantis"], None)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Resolution);
    }

    #[test]
    fn test_resolve_point_rejects_invalid_coordinate() {
        let mut resolver = StaticResolver::new();
        resolver.insert("Nowhere", Location::new(200.0, 10.0));

        let err = RoutePlanner::default()
            .resolve_point(&resolver, "Nowhere", PointRole::Waypoint)
            .unwrap_err();
        assert!(matches!(err, PlannerError::InvalidCoordinate { .. }));
    }

    #[test]
    fn test_import_waypoints_file_skips_blanks_and_counts_duplicates() {
        use std::io::Write;
        use tempfile::NamedTempFile;

        let planner = RoutePlanner::default();
        let mut request = planner
            .request(&resolver(), "Beijing", "Shanghai", &["Qingdao"], None)
            .unwrap();

        let mut file = NamedTempFile::new().unwrap();
        write!(file, "Tianjin\n\n   \nQingdao\n  Nanjing \nTianjin\n").unwrap();

        let summary = planner
            .import_waypoints_file(&resolver(), &mut request, file.path())
            .unwrap();

        assert_eq!(
            summary,
            ImportSummary {
                imported: 2,
                duplicates: 2
            }
        );
        assert_eq!(
            request.node_names(),
            vec!["Beijing", "Qingdao", "Tianjin", "Nanjing", "Shanghai"]
        );
    }

    #[test]
    fn test_import_waypoints_file_errors() {
        let planner = RoutePlanner::default();
        let mut request = planner
            .request(&resolver(), "Beijing", "Shanghai", &[] as &[&str], None)
            .unwrap();

        let err = planner
            .import_waypoints_file(&resolver(), &mut request, "/nonexistent/waypoints.txt")
            .unwrap_err();
        assert!(matches!(err, PlannerError::Io(_)));

        let err = planner
            .import_waypoint_lines(&resolver(), &mut request, ["Tianjin", "Atlantis"])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Resolution);
        assert!(request.waypoints().is_empty());
    }

    #[test]
    fn test_plan_open_route() {
        let planner = RoutePlanner::default();
        let request = planner
            .request(&resolver(), "Beijing", "Shanghai", &["Nanjing", "Tianjin"], None)
            .unwrap();

        let result = planner.plan(&request).unwrap();
        assert_eq!(
            result.ordered_points,
            vec!["Beijing", "Tianjin", "Nanjing", "Shanghai"]
        );
        assert_eq!(result.waypoint_count, 2);
    }

    #[test]
    fn test_plan_rejects_invalid_points() {
        let request = RouteRequest::new(
            GeoPoint::start("A", 0.0, 95.0),
            GeoPoint::end("B", 1.0, 1.0),
            Algorithm::NearestNeighbor,
            LoopClassifier::default(),
        );
        let err = RoutePlanner::default().plan(&request).unwrap_err();
        assert!(matches!(err, PlannerError::InvalidCoordinate { name, .. } if name == "A"));
    }

    #[test]
    fn test_loop_without_waypoints_is_insufficient() {
        let request = RouteRequest::new(
            GeoPoint::start("Home", 116.4, 39.9),
            GeoPoint::end("Home", 116.4, 39.9),
            Algorithm::NearestNeighbor,
            LoopClassifier::default(),
        );
        let mut sink = CollectingSink::default();
        RoutePlanner::default().plan_with_sink(&request, &mut sink);

        assert!(sink.routes.is_empty());
        assert_eq!(sink.errors.len(), 1);
        assert_eq!(sink.errors[0].0, ErrorKind::InsufficientPoints);
    }

    #[test]
    fn test_plan_points_with_lookup() {
        let resolved: HashMap<String, GeoPoint> = [
            GeoPoint::start("A", 0.0, 0.0),
            GeoPoint::waypoint("B", 0.0, 1.0),
            GeoPoint::end("C", 0.0, 2.0),
        ]
        .into_iter()
        .map(|p| (p.name.clone(), p))
        .collect();
        let planner = RoutePlanner::default();

        let result = planner
            .plan_points(&["A", "B", "C"], &resolved, Algorithm::NearestNeighbor, false)
            .unwrap();
        assert_eq!(result.ordered_points, vec!["A", "B", "C"]);

        let err = planner
            .plan_points(&["A", "D", "C"], &resolved, Algorithm::NearestNeighbor, false)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingCoordinate);

        let err = planner
            .plan_points(&["A"], &resolved, Algorithm::Dijkstra, false)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InsufficientPoints);
    }

    #[test]
    fn test_sink_receives_route() {
        let planner = RoutePlanner::new(PlannerConfig {
            algorithm: Algorithm::Dijkstra,
            ..PlannerConfig::default()
        });
        let request = planner
            .request(&resolver(), "Beijing", "Shanghai", &["Qingdao"], None)
            .unwrap();

        let mut sink = CollectingSink::default();
        planner.plan_with_sink(&request, &mut sink);

        assert!(sink.errors.is_empty());
        assert_eq!(sink.routes.len(), 1);
        assert_eq!(sink.routes[0].algorithm, Algorithm::Dijkstra);
        assert_eq!(sink.routes[0].ordered_points, vec!["Beijing", "Shanghai"]);
    }
}
