//! Shortest-path search (Dijkstra over non-negative edge weights)

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::graph::{FloorPlan, NodeId};
use super::types::{PathError, PathOutcome};

/// Min-heap entry: tentative cost of a node, by load-order position
///
/// Equal costs order by position so the search is deterministic for a
/// fixed graph.
#[derive(Debug, Clone, Copy, PartialEq)]
struct HeapEntry {
    cost: f64,
    position: usize,
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .total_cmp(&other.cost)
            .then_with(|| self.position.cmp(&other.position))
    }
}

/// Query for the minimum-weight path between two nodes
#[derive(Debug, Clone)]
pub struct PathQuery {
    /// Start node ID
    pub source: NodeId,
    /// End node ID
    pub target: NodeId,
}

impl PathQuery {
    /// Create a new path query between two nodes
    pub fn between(source: impl Into<NodeId>, target: impl Into<NodeId>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    /// Execute the path query
    ///
    /// Unknown endpoints are an error; a valid but unreachable target is
    /// [`PathOutcome::Unreachable`].
    pub fn execute(&self, plan: &FloorPlan) -> Result<PathOutcome, PathError> {
        let start = plan
            .position(&self.source)
            .ok_or_else(|| PathError::UnknownNode(self.source.clone()))?;
        let target = plan
            .position(&self.target)
            .ok_or_else(|| PathError::UnknownNode(self.target.clone()))?;

        if start == target {
            return Ok(PathOutcome::Found {
                path: vec![self.source.clone()],
                cost: 0.0,
            });
        }

        let adjacency = plan.adjacency();
        let count = plan.node_count();

        let mut distances = vec![f64::INFINITY; count];
        let mut predecessors: Vec<Option<usize>> = vec![None; count];
        let mut settled = vec![false; count];
        let mut heap: BinaryHeap<Reverse<HeapEntry>> = BinaryHeap::new();

        distances[start] = 0.0;
        heap.push(Reverse(HeapEntry {
            cost: 0.0,
            position: start,
        }));

        while let Some(Reverse(HeapEntry { cost, position })) = heap.pop() {
            // Stale entry for a node already settled at a lower cost
            if settled[position] {
                continue;
            }
            settled[position] = true;

            if position == target {
                break;
            }

            let current = &plan.node_at(position).id;
            for neighbor in adjacency.neighbors(current) {
                let Some(next) = plan.position(&neighbor.node) else {
                    continue;
                };
                if settled[next] {
                    continue;
                }

                let candidate = cost + neighbor.weight;
                if candidate < distances[next] {
                    distances[next] = candidate;
                    predecessors[next] = Some(position);
                    heap.push(Reverse(HeapEntry {
                        cost: candidate,
                        position: next,
                    }));
                }
            }
        }

        if !distances[target].is_finite() {
            return Ok(PathOutcome::Unreachable);
        }

        Ok(PathOutcome::Found {
            path: Self::reconstruct_path(plan, &predecessors, target),
            cost: distances[target],
        })
    }

    /// Walk predecessors back from the target, then reverse
    fn reconstruct_path(
        plan: &FloorPlan,
        predecessors: &[Option<usize>],
        target: usize,
    ) -> Vec<NodeId> {
        let mut path = vec![plan.node_at(target).id.clone()];
        let mut current = target;

        while let Some(pred) = predecessors[current] {
            path.push(plan.node_at(pred).id.clone());
            current = pred;
        }

        path.reverse();
        path
    }
}
