//! Wayfind: Indoor Wayfinding Service
//!
//! Serves room metadata and a building's navigation graph, and computes
//! shortest walking routes between graph nodes.
//!
//! # Core Concepts
//!
//! - **Nodes**: Rooms, doors, corridor waypoints, stairs and entrances
//! - **Edges**: Undirected connections weighted by walking distance
//! - **FloorPlan**: The validated graph, immutable once loaded
//! - **Routes**: Minimum-distance node sequences between two nodes
//!
//! # Example
//!
//! ```
//! use wayfind::{route, Edge, FloorPlan, Node};
//!
//! let plan = FloorPlan::build(
//!     vec![Node::new("entrance", 1), Node::new("node_101", 1)],
//!     vec![Edge::new("entrance", "node_101", 12.0)],
//! )
//! .unwrap();
//!
//! let found = route(&plan, "entrance", "node_101").unwrap();
//! assert_eq!(found.distance, 12.0);
//! ```

pub mod config;
mod graph;
pub mod http;
pub mod query;
pub mod storage;

pub use config::{ConfigError, ServerConfig};
pub use graph::{
    Adjacency, Edge, FloorPlan, GraphDocument, GraphError, GraphResult, GraphSnapshot, Neighbor,
    Node, NodeId, NodeKind, Room, RoomCatalog, WayfindEngine,
};
pub use query::{
    path_distance, route, PathError, PathOutcome, PathQuery, RoomSearch, Route, RouteError,
    RouteQuery, RouteResponse, RouteSummary, SearchResult,
};
pub use storage::{
    load_snapshot, FloorPlanSource, InMemorySource, JsonFileSource, StorageError, StorageResult,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
