//! Core graph data structures

mod edge;
mod engine;
mod floorplan;
mod node;
mod room;


pub use edge::Edge;
pub use engine::{GraphSnapshot, WayfindEngine};
pub use floorplan::{Adjacency, FloorPlan, GraphDocument, GraphError, GraphResult, Neighbor};
pub use node::{Node, NodeId, NodeKind};
pub use room::{Room, RoomCatalog};
