//! Query types and result structures

use crate::graph::{FloorPlan, NodeId, NodeKind, Room};
use serde::Serialize;
use thiserror::Error;

/// Outcome of a path search between two known nodes
#[derive(Debug, Clone, PartialEq)]
pub enum PathOutcome {
    /// A minimum-cost path, start and end inclusive
    Found { path: Vec<NodeId>, cost: f64 },
    /// The end node is not reachable from the start node
    Unreachable,
}

impl PathOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, PathOutcome::Found { .. })
    }
}

/// Errors from the path finder itself
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("Node not found: {0}")]
    UnknownNode(NodeId),
}

/// Errors a route request can end in
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("Missing parameter: {0} is required")]
    MissingParameter(&'static str),

    #[error("Node not found: {0}")]
    UnknownNode(NodeId),

    #[error("No route found between {from} and {to}")]
    NoPathFound { from: NodeId, to: NodeId },

    #[error("Navigation graph is not loaded")]
    GraphUnavailable,
}

impl RouteError {
    /// Stable machine-readable code
    pub fn kind(&self) -> &'static str {
        match self {
            RouteError::MissingParameter(_) => "missing_parameter",
            RouteError::UnknownNode(_) => "unknown_node",
            RouteError::NoPathFound { .. } => "no_path_found",
            RouteError::GraphUnavailable => "graph_unavailable",
        }
    }
}

impl From<PathError> for RouteError {
    fn from(err: PathError) -> Self {
        match err {
            PathError::UnknownNode(id) => RouteError::UnknownNode(id),
        }
    }
}

/// A computed route
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    pub from: NodeId,
    pub to: NodeId,
    /// Node ids from `from` to `to`, inclusive
    pub path: Vec<NodeId>,
    /// Sum of edge weights along `path`
    pub distance: f64,
}

impl Route {
    /// Number of edges walked
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Count doors and staircases along the route and list floors visited
    pub fn summary(&self, plan: &FloorPlan) -> RouteSummary {
        let mut summary = RouteSummary {
            hops: self.hops(),
            ..Default::default()
        };

        for node in self.path.iter().filter_map(|id| plan.get_node(id.as_str())) {
            match node.kind {
                NodeKind::Door => summary.doors += 1,
                NodeKind::Stairs => summary.stairs += 1,
                _ => {}
            }
            if summary.floors.last() != Some(&node.floor) {
                summary.floors.push(node.floor);
            }
        }

        summary
    }
}

/// Human-oriented facts about a route
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RouteSummary {
    pub hops: usize,
    pub doors: usize,
    pub stairs: usize,
    /// Floors in the order they are visited, consecutive repeats collapsed
    pub floors: Vec<i32>,
}

/// Body of a route answer: the route fields plus its summary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteResponse {
    #[serde(flatten)]
    pub route: Route,
    pub summary: RouteSummary,
}

impl RouteResponse {
    pub fn new(route: Route, plan: &FloorPlan) -> Self {
        let summary = route.summary(plan);
        Self { route, summary }
    }
}

/// Result of a room search
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    pub results: Vec<Room>,
    pub query: String,
    pub count: usize,
}

impl SearchResult {
    pub fn empty(query: impl Into<String>) -> Self {
        Self {
            results: Vec::new(),
            query: query.into(),
            count: 0,
        }
    }

    pub fn from_rooms(query: impl Into<String>, results: Vec<Room>) -> Self {
        let count = results.len();
        Self {
            results,
            query: query.into(),
            count,
        }
    }
}
