//! Reference graph algorithms used to check the router's answers
//!
//! All-pairs Floyd-Warshall over the raw edge list. Nothing here shares code
//! with the production search.

use std::collections::HashMap;
use wayfind::{FloorPlan, NodeId};

/// All-pairs shortest distances
#[derive(Debug, Clone)]
pub struct AllPairs {
    index: HashMap<NodeId, usize>,
    dist: Vec<Vec<f64>>,
}

impl AllPairs {
    pub fn distance(&self, a: &NodeId, b: &NodeId) -> f64 {
        self.dist[self.index[a]][self.index[b]]
    }

    pub fn reachable(&self, a: &NodeId, b: &NodeId) -> bool {
        self.distance(a, b).is_finite()
    }
}

/// Floyd-Warshall treating every edge as two directed arcs
pub fn all_pairs(plan: &FloorPlan) -> AllPairs {
    let ids: Vec<NodeId> = plan.nodes().iter().map(|n| n.id.clone()).collect();
    let index: HashMap<NodeId, usize> =
        ids.iter().enumerate().map(|(i, id)| (id.clone(), i)).collect();
    let n = ids.len();

    let mut dist = vec![vec![f64::INFINITY; n]; n];
    for (i, row) in dist.iter_mut().enumerate() {
        row[i] = 0.0;
    }
    for edge in plan.edges() {
        let (a, b) = (index[&edge.from], index[&edge.to]);
        dist[a][b] = dist[a][b].min(edge.weight);
        dist[b][a] = dist[b][a].min(edge.weight);
    }

    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                let through = dist[i][k] + dist[k][j];
                if through < dist[i][j] {
                    dist[i][j] = through;
                }
            }
        }
    }

    AllPairs { index, dist }
}

/// Sum of the cheapest raw edge for each consecutive pair
///
/// Returns `None` if some pair has no edge at all.
pub fn independent_path_weight(plan: &FloorPlan, path: &[NodeId]) -> Option<f64> {
    let mut total = 0.0;
    for pair in path.windows(2) {
        let cheapest = plan
            .edges()
            .iter()
            .filter(|e| {
                (e.from == pair[0] && e.to == pair[1]) || (e.from == pair[1] && e.to == pair[0])
            })
            .map(|e| e.weight)
            .fold(None, |acc: Option<f64>, w| Some(acc.map_or(w, |a| a.min(w))))?;
        total += cheapest;
    }
    Some(total)
}
