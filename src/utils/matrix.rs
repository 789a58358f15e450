// All-pairs distance matrix over an ordered point list

use crate::error::{PlannerError, Result};
use crate::models::{Distance, GeoPoint, Location, NodeIndex};
use std::collections::HashMap;

/// Symmetric square matrix of great-circle distances in kilometers
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    distances: Vec<Vec<Distance>>,
}

impl DistanceMatrix {
    /// Builds the matrix for the given points, in order
    pub fn build(points: &[GeoPoint]) -> Self {
        let locations: Vec<Location> = points.iter().map(|p| p.location).collect();
        Self::from_locations(&locations)
    }

    /// Builds the matrix for named points, looking each one up in `resolved`.
    /// Fails on the first name without a coordinate.
    pub fn build_for<S: AsRef<str>>(
        names: &[S],
        resolved: &HashMap<String, GeoPoint>,
    ) -> Result<Self> {
        let locations = names
            .iter()
            .map(|name| {
                resolved
                    .get(name.as_ref())
                    .map(|point| point.location)
                    .ok_or_else(|| PlannerError::MissingCoordinate(name.as_ref().to_string()))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::from_locations(&locations))
    }

    pub fn from_locations(locations: &[Location]) -> Self {
        let n = locations.len();
        let mut distances = vec![vec![0.0; n]; n];

        // Upper triangle only, mirrored below
        for i in 0..n {
            for j in (i + 1)..n {
                let distance = locations[i].distance_to(&locations[j]);
                distances[i][j] = distance;
                distances[j][i] = distance;
            }
        }

        Self { distances }
    }

    /// Wraps precomputed rows. Every row must have one entry per row;
    /// symmetry is left to the caller.
    pub fn from_rows(distances: Vec<Vec<Distance>>) -> Result<Self> {
        let size = distances.len();
        if let Some((row, entries)) = distances
            .iter()
            .enumerate()
            .find(|(_, entries)| entries.len() != size)
        {
            return Err(PlannerError::RaggedMatrix {
                row,
                len: entries.len(),
                size,
            });
        }

        Ok(Self { distances })
    }

    pub fn size(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    pub fn get(&self, from: NodeIndex, to: NodeIndex) -> Distance {
        self.distances[from][to]
    }

    pub fn row(&self, from: NodeIndex) -> &[Distance] {
        &self.distances[from]
    }

    /// Sum of the distances between consecutive nodes of `path`
    pub fn path_length(&self, path: &[NodeIndex]) -> Distance {
        path.windows(2).map(|leg| self.get(leg[0], leg[1])).sum()
    }

    pub fn is_symmetric(&self, tolerance: f64) -> bool {
        let n = self.size();
        (0..n).all(|i| {
            self.distances[i].len() == n
                && self.distances[i][i].abs() <= tolerance
                && (0..i).all(|j| (self.distances[i][j] - self.distances[j][i]).abs() <= tolerance)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_points() -> Vec<GeoPoint> {
        vec![
            GeoPoint::start("A", 0.0, 0.0),
            GeoPoint::waypoint("B", 0.0, 1.0),
            GeoPoint::end("C", 0.0, 2.0),
        ]
    }

    #[test]
    fn test_build_is_symmetric_with_zero_diagonal() {
        let matrix = DistanceMatrix::build(&sample_points());

        assert_eq!(matrix.size(), 3);
        assert!(matrix.is_symmetric(0.0));
        for i in 0..3 {
            assert_eq!(matrix.get(i, i), 0.0);
        }
        assert!(matrix.get(0, 2) > matrix.get(0, 1));
    }

    #[test]
    fn test_build_for_reports_missing_coordinate() {
        let resolved: HashMap<String, GeoPoint> = sample_points()
            .into_iter()
            .map(|p| (p.name.clone(), p))
            .collect();

        let matrix = DistanceMatrix::build_for(&["A", "C"], &resolved).unwrap();
        assert_eq!(matrix.size(), 2);

        let err = DistanceMatrix::build_for(&["A", "Z", "C"], &resolved).unwrap_err();
        assert!(matches!(err, PlannerError::MissingCoordinate(name) if name == "Z"));
    }

    #[test]
    fn test_path_length() {
        let matrix = DistanceMatrix::build(&sample_points());
        let expected = matrix.get(0, 1) + matrix.get(1, 2);

        assert_eq!(matrix.path_length(&[0, 1, 2]), expected);
        assert_eq!(matrix.path_length(&[0]), 0.0);
        assert_eq!(matrix.path_length(&[]), 0.0);
    }

    #[test]
    fn test_empty_matrix() {
        let matrix = DistanceMatrix::build(&[]);
        assert!(matrix.is_empty());
        assert!(matrix.is_symmetric(0.0));
    }

    #[test]
    fn test_from_rows_rejects_non_square_input() {
        let ragged = vec![vec![0.0, 1.0], vec![1.0]];
        let err = DistanceMatrix::from_rows(ragged).unwrap_err();
        assert!(matches!(err, PlannerError::RaggedMatrix { row: 1, len: 1, size: 2 }));

        let wide = vec![vec![0.0, 1.0, 2.0], vec![1.0, 0.0, 3.0]];
        let err = DistanceMatrix::from_rows(wide).unwrap_err();
        assert!(matches!(err, PlannerError::RaggedMatrix { row: 0, len: 3, size: 2 }));

        let square = DistanceMatrix::from_rows(vec![vec![0.0, 4.0], vec![4.0, 0.0]]).unwrap();
        assert_eq!(square.size(), 2);
        assert_eq!(square.get(1, 0), 4.0);
    }
}
