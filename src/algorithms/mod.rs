pub mod dijkstra;
pub mod nearest_neighbor;

use crate::error::{PlannerError, Result};
use crate::models::NodeIndex;
use crate::utils::matrix::DistanceMatrix;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use self::dijkstra::DijkstraSolver;
pub use self::nearest_neighbor::NearestNeighborSolver;

/// Trait for strategies that order the nodes of a distance matrix
/// between a pinned start and end node
pub trait PathSolver {
    /// Returns the visiting order as node indices, beginning at `start`
    /// and ending at `end`
    fn solve(&self, matrix: &DistanceMatrix, start: NodeIndex, end: NodeIndex)
        -> Result<Vec<NodeIndex>>;
}

/// Ordering strategy selectable by the user.
///
/// The two strategies answer different questions:
/// - `NearestNeighbor` visits every waypoint (a greedy full tour, not guaranteed optimal).
/// - `Dijkstra` finds the shortest start-to-end path; waypoints are optional and on a
///   complete graph it usually goes straight from start to end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    #[default]
    NearestNeighbor,
    Dijkstra,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::NearestNeighbor, Algorithm::Dijkstra];

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::NearestNeighbor => "Nearest neighbor",
            Algorithm::Dijkstra => "Dijkstra",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Algorithm::NearestNeighbor => "greedy, always picks nearest unvisited point",
            Algorithm::Dijkstra => {
                "single-source shortest path, guarantees optimum for the point-to-point leg"
            }
        }
    }

    /// Whether the returned path is guaranteed to contain every node
    pub fn visits_all_points(&self) -> bool {
        matches!(self, Algorithm::NearestNeighbor)
    }

    pub fn solver(&self) -> Box<dyn PathSolver> {
        match self {
            Algorithm::NearestNeighbor => Box::new(NearestNeighborSolver),
            Algorithm::Dijkstra => Box::new(DijkstraSolver),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().replace(['-', ' '], "_").as_str() {
            "nearest" | "nearest_neighbor" | "nn" => Ok(Algorithm::NearestNeighbor),
            "dijkstra" => Ok(Algorithm::Dijkstra),
            other => Err(PlannerError::config(format!("unknown algorithm: {other}"))),
        }
    }
}

/// Orders the nodes of `matrix` from `start` to `end` with the chosen strategy.
///
/// Fails with `NoValidPath` for fewer than two nodes, for out-of-range or identical
/// anchors, and when the strategy cannot connect them.
pub fn order(
    matrix: &DistanceMatrix,
    start: NodeIndex,
    end: NodeIndex,
    algorithm: Algorithm,
) -> Result<Vec<NodeIndex>> {
    let n = matrix.size();
    if n < 2 || start >= n || end >= n || start == end {
        return Err(PlannerError::NoValidPath);
    }

    let path = algorithm.solver().solve(matrix, start, end)?;

    if path.first() != Some(&start) || path.last() != Some(&end) {
        return Err(PlannerError::NoValidPath);
    }

    Ok(path)
}
