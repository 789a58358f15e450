use crate::algorithms::PathSolver;
use crate::error::{PlannerError, Result};
use crate::models::NodeIndex;
use crate::utils::matrix::DistanceMatrix;

/// Greedy nearest-neighbor ordering with pinned start and end.
///
/// Starting at `start`, repeatedly moves to the closest unvisited node other than
/// `end` (zero distances are not eligible, lowest index wins ties), then finishes at
/// `end`. Every node is visited exactly once; the tour is not guaranteed optimal.
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestNeighborSolver;

impl PathSolver for NearestNeighborSolver {
    fn solve(
        &self,
        matrix: &DistanceMatrix,
        start: NodeIndex,
        end: NodeIndex,
    ) -> Result<Vec<NodeIndex>> {
        let n = matrix.size();
        if n < 2 || start == end {
            return Err(PlannerError::NoValidPath);
        }
        if n == 2 {
            return Ok(vec![start, end]);
        }

        let mut visited = vec![false; n];
        let mut path = Vec::with_capacity(n);

        let mut current = start;
        visited[current] = true;
        path.push(current);

        // Everything except the end node has to be placed before it
        while path.len() < n - 1 {
            let mut next = None;
            let mut min_distance = f64::INFINITY;

            for (candidate, &distance) in matrix.row(current).iter().enumerate() {
                if visited[candidate] || candidate == end {
                    continue;
                }
                if distance > 0.0 && distance < min_distance {
                    min_distance = distance;
                    next = Some(candidate);
                }
            }

            let next = next.ok_or(PlannerError::NoValidPath)?;
            visited[next] = true;
            path.push(next);
            current = next;
        }

        path.push(end);
        Ok(path)
    }
}
