//! Storage backends for wayfind
//!
//! Building data is read once through the `FloorPlanSource` trait, validated,
//! and turned into an immutable [`GraphSnapshot`]. The primary
//! implementation is `JsonFileSource`.

mod json;
mod traits;

pub use json::{JsonFileSource, DEFAULT_GRAPH_FILE, DEFAULT_ROOMS_FILE};
pub use traits::{FloorPlanSource, InMemorySource, StorageError, StorageResult};

use crate::graph::{FloorPlan, GraphSnapshot};

/// Load and validate building data into a snapshot
///
/// Fails if the graph is inconsistent or any room references a node the
/// graph does not contain.
pub fn load_snapshot(source: &dyn FloorPlanSource) -> StorageResult<GraphSnapshot> {
    let plan = FloorPlan::from_document(source.load_graph()?)?;
    let rooms = source.load_rooms()?;

    if let Some(room) = rooms.rooms.iter().find(|r| !plan.contains(r.node_id.as_str())) {
        return Err(StorageError::DanglingRoom {
            room_id: room.room_id.clone(),
            node_id: room.node_id.clone(),
        });
    }

    tracing::info!(
        nodes = plan.node_count(),
        edges = plan.edge_count(),
        rooms = rooms.len(),
        floors = plan.floors().len(),
        "building data loaded"
    );

    Ok(GraphSnapshot::new(plan, rooms))
}
