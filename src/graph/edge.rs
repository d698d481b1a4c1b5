//! Undirected weighted edges

use super::node::NodeId;
use serde::{Deserialize, Serialize};

/// An undirected connection between two nodes
///
/// `weight` is the physical walking distance. The edge is traversable in
/// both directions at the same cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// One endpoint
    pub from: NodeId,
    /// The other endpoint
    pub to: NodeId,
    /// Non-negative walking distance
    pub weight: f64,
}

impl Edge {
    /// Create a new edge
    pub fn new(from: impl Into<NodeId>, to: impl Into<NodeId>, weight: f64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }

    /// True if this edge joins `a` and `b`, in either orientation
    pub fn connects(&self, a: &NodeId, b: &NodeId) -> bool {
        (&self.from == a && &self.to == b) || (&self.from == b && &self.to == a)
    }

    /// Opposite endpoint of `id`, if `id` is an endpoint at all
    pub fn other_end(&self, id: &NodeId) -> Option<&NodeId> {
        if &self.from == id {
            Some(&self.to)
        } else if &self.to == id {
            Some(&self.from)
        } else {
            None
        }
    }

    pub(crate) fn has_valid_weight(&self) -> bool {
        self.weight.is_finite() && self.weight >= 0.0
    }
}
