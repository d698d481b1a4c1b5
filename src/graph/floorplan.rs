//! FloorPlan: the validated navigation graph of a building

use super::edge::Edge;
use super::node::{Node, NodeId};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::sync::OnceLock;
use thiserror::Error;

/// Errors raised while assembling a floor plan from raw nodes and edges
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    #[error("Duplicate node id: {0}")]
    DuplicateNode(NodeId),

    #[error("Node id must not be empty")]
    EmptyNodeId,

    /// Query ids are trimmed, so a padded id could never be routed to
    #[error("Node id has leading or trailing whitespace: \"{0}\"")]
    UntrimmedNodeId(NodeId),

    #[error("Edge {from} -> {to} references unknown node: {missing}")]
    DanglingEdge {
        from: NodeId,
        to: NodeId,
        missing: NodeId,
    },

    #[error("Edge {from} -> {to} has invalid weight {weight}")]
    InvalidWeight { from: NodeId, to: NodeId, weight: f64 },
}

/// Result type for graph construction
pub type GraphResult<T> = Result<T, GraphError>;

/// Wire shape of the graph file and of `GET /api/graph`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

/// One adjacency entry: a neighbor reachable over a single edge
#[derive(Debug, Clone, PartialEq)]
pub struct Neighbor {
    pub node: NodeId,
    pub weight: f64,
}

/// Node id -> neighbors, both directions of every edge
///
/// Entries appear in edge-list order. Parallel edges are kept as separate
/// entries; relaxation picks the cheapest one on its own.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Adjacency {
    lists: HashMap<NodeId, Vec<Neighbor>>,
}

impl Adjacency {
    /// Build adjacency lists from an edge list
    pub fn build(edges: &[Edge]) -> Self {
        let mut lists: HashMap<NodeId, Vec<Neighbor>> = HashMap::new();

        for edge in edges {
            lists.entry(edge.from.clone()).or_default().push(Neighbor {
                node: edge.to.clone(),
                weight: edge.weight,
            });
            lists.entry(edge.to.clone()).or_default().push(Neighbor {
                node: edge.from.clone(),
                weight: edge.weight,
            });
        }

        Self { lists }
    }

    /// Neighbors of a node (empty for isolated or unknown nodes)
    pub fn neighbors(&self, id: &NodeId) -> &[Neighbor] {
        self.lists.get(id).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Number of nodes with at least one incident edge
    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }
}

/// The validated navigation graph
///
/// Immutable after [`FloorPlan::build`]. Node iteration order is the load
/// order, which keeps path tie-breaks reproducible.
#[derive(Debug)]
pub struct FloorPlan {
    nodes: Vec<Node>,
    index: HashMap<NodeId, usize>,
    edges: Vec<Edge>,
    adjacency: OnceLock<Adjacency>,
}

impl FloorPlan {
    /// Validate nodes and edges and assemble a floor plan
    ///
    /// Fails on duplicate or empty node ids, on edges whose endpoints are
    /// not in the node set, and on negative or non-finite weights.
    pub fn build(nodes: Vec<Node>, edges: Vec<Edge>) -> GraphResult<Self> {
        let mut index = HashMap::with_capacity(nodes.len());
        for (i, node) in nodes.iter().enumerate() {
            if node.id.is_blank() {
                return Err(GraphError::EmptyNodeId);
            }
            if node.id.is_padded() {
                return Err(GraphError::UntrimmedNodeId(node.id.clone()));
            }
            if index.insert(node.id.clone(), i).is_some() {
                return Err(GraphError::DuplicateNode(node.id.clone()));
            }
        }

        for edge in &edges {
            for endpoint in [&edge.from, &edge.to] {
                if !index.contains_key(endpoint) {
                    return Err(GraphError::DanglingEdge {
                        from: edge.from.clone(),
                        to: edge.to.clone(),
                        missing: endpoint.clone(),
                    });
                }
            }
            if !edge.has_valid_weight() {
                return Err(GraphError::InvalidWeight {
                    from: edge.from.clone(),
                    to: edge.to.clone(),
                    weight: edge.weight,
                });
            }
        }

        Ok(Self {
            nodes,
            index,
            edges,
            adjacency: OnceLock::new(),
        })
    }

    /// Build from the wire document
    pub fn from_document(doc: GraphDocument) -> GraphResult<Self> {
        Self::build(doc.nodes, doc.edges)
    }

    /// Export back to the wire document
    pub fn to_document(&self) -> GraphDocument {
        GraphDocument {
            nodes: self.nodes.clone(),
            edges: self.edges.clone(),
        }
    }

    /// Adjacency lists, built on first use and cached
    pub fn adjacency(&self) -> &Adjacency {
        self.adjacency.get_or_init(|| Adjacency::build(&self.edges))
    }

    /// Get a node by id
    pub fn get_node(&self, id: &str) -> Option<&Node> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    /// Check if a node exists
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Load-order position of a node
    pub(crate) fn position(&self, id: &NodeId) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub(crate) fn node_at(&self, position: usize) -> &Node {
        &self.nodes[position]
    }

    /// All nodes in load order
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// All edges in load order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Nodes on one floor, in load order
    pub fn nodes_on_floor(&self, floor: i32) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(move |n| n.floor == floor)
    }

    /// Distinct floor numbers, ascending
    pub fn floors(&self) -> Vec<i32> {
        self.nodes
            .iter()
            .map(|n| n.floor)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Weight of the cheapest edge joining `a` and `b`, if any
    pub fn edge_weight_between(&self, a: &NodeId, b: &NodeId) -> Option<f64> {
        self.edges
            .iter()
            .filter(|e| e.connects(a, b))
            .map(|e| e.weight)
            .reduce(f64::min)
    }
}
