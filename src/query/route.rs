//! Route queries: input validation, path finding and distance

use crate::graph::{FloorPlan, NodeId};
use super::path::PathQuery;
use super::types::{PathOutcome, Route, RouteError};

/// A request for the shortest route between two node ids
///
/// Ids are raw caller input; [`RouteQuery::execute`] validates them before
/// any search runs.
#[derive(Debug, Clone, Default)]
pub struct RouteQuery {
    pub from: String,
    pub to: String,
}

impl RouteQuery {
    /// Create a route query between two node ids
    pub fn between(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Validate the ids and compute the route
    ///
    /// Missing ids are checked before unknown ids, and both before the
    /// search, so an unknown id never surfaces as `NoPathFound`.
    pub fn execute(&self, plan: &FloorPlan) -> Result<Route, RouteError> {
        let from = self.from.trim();
        let to = self.to.trim();

        if from.is_empty() {
            return Err(RouteError::MissingParameter("from"));
        }
        if to.is_empty() {
            return Err(RouteError::MissingParameter("to"));
        }

        for id in [from, to] {
            if !plan.contains(id) {
                return Err(RouteError::UnknownNode(NodeId::from(id)));
            }
        }

        match PathQuery::between(from, to).execute(plan)? {
            PathOutcome::Found { path, .. } => {
                let distance = path_distance(plan, &path);
                tracing::debug!(from, to, hops = path.len().saturating_sub(1), distance, "route found");
                Ok(Route {
                    from: NodeId::from(from),
                    to: NodeId::from(to),
                    path,
                    distance,
                })
            }
            PathOutcome::Unreachable => {
                tracing::debug!(from, to, "no route");
                Err(RouteError::NoPathFound {
                    from: NodeId::from(from),
                    to: NodeId::from(to),
                })
            }
        }
    }
}

/// Shortest route between two node ids
pub fn route(plan: &FloorPlan, from: &str, to: &str) -> Result<Route, RouteError> {
    RouteQuery::between(from, to).execute(plan)
}

/// Sum of edge weights along a path
///
/// Each consecutive pair contributes its cheapest connecting edge. Pairs
/// with no connecting edge contribute nothing.
pub fn path_distance(plan: &FloorPlan, path: &[NodeId]) -> f64 {
    path.windows(2)
        .filter_map(|pair| plan.edge_weight_between(&pair[0], &pair[1]))
        .sum()
}
