use std::cmp::{Ordering, Reverse};

use priority_queue::PriorityQueue;

use crate::algorithms::PathSolver;
use crate::error::{PlannerError, Result};
use crate::models::{Distance, NodeIndex};
use crate::utils::matrix::DistanceMatrix;

// Custom wrapper to make f64 usable as a queue priority
#[derive(PartialEq, Copy, Clone, Debug)]
struct QueueDistance(Distance);

impl Eq for QueueDistance {}

impl PartialOrd for QueueDistance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueDistance {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Single-source shortest path from `start` to `end` over the matrix graph.
///
/// Zero entries are treated as missing edges. The scan stops as soon as `end` is
/// settled. The resulting path is the cheapest start-to-end connection and does not
/// have to pass through every node.
#[derive(Debug, Clone, Copy, Default)]
pub struct DijkstraSolver;

impl PathSolver for DijkstraSolver {
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

        let mut distances = vec![f64::INFINITY; n];
        let mut previous: Vec<Option<NodeIndex>> = vec![None; n];
        let mut settled = vec![false; n];
        // Reversed so the closest node has the highest priority
        let mut queue = PriorityQueue::new();

        distances[start] = 0.0;
        queue.push(start, Reverse(QueueDistance(0.0)));

        while let Some((node, _)) = queue.pop() {
            if node == end {
                break;
            }
            settled[node] = true;

            for (neighbor, &edge) in matrix.row(node).iter().enumerate() {
                if settled[neighbor] || edge <= 0.0 {
                    continue;
                }

                let candidate = distances[node] + edge;
                if candidate < distances[neighbor] {
                    distances[neighbor] = candidate;
                    previous[neighbor] = Some(node);
                    // Re-pushing an existing item only updates its priority
                    queue.push(neighbor, Reverse(QueueDistance(candidate)));
                }
            }
        }

        if !distances[end].is_finite() {
            return Err(PlannerError::NoValidPath);
        }

        let mut path = vec![end];
        let mut at = end;
        while let Some(prev) = previous[at] {
            path.push(prev);
            at = prev;
        }
        path.reverse();

        if path.first() != Some(&start) {
            return Err(PlannerError::NoValidPath);
        }

        Ok(path)
    }
}
