//! Query system for wayfind floor plans
//!
//! Provides room search, shortest-path search, and validated route
//! computation over a loaded floor plan.

mod find;
mod path;
mod route;
mod types;

pub use find::RoomSearch;
pub use path::PathQuery;
pub use route::{path_distance, route, RouteQuery};
pub use types::{
    PathError, PathOutcome, Route, RouteError, RouteResponse, RouteSummary, SearchResult,
};
