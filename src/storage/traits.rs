//! Storage trait definitions

use crate::graph::{GraphDocument, GraphError, NodeId, RoomCatalog};
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading building data
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed JSON in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid graph: {0}")]
    Graph(#[from] GraphError),

    #[error("Room {room_id} points at unknown node {node_id}")]
    DanglingRoom { room_id: String, node_id: NodeId },
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// A place the static building data comes from
///
/// Implementations return raw documents; validation happens in
/// [`super::load_snapshot`] so every source gets the same checks.
pub trait FloorPlanSource: Send + Sync {
    /// Load the navigation graph
    fn load_graph(&self) -> StorageResult<GraphDocument>;

    /// Load room metadata
    fn load_rooms(&self) -> StorageResult<RoomCatalog>;
}

/// Source backed by documents already in memory (useful for testing)
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    pub graph: GraphDocument,
    pub rooms: RoomCatalog,
}

impl InMemorySource {
    pub fn new(graph: GraphDocument, rooms: RoomCatalog) -> Self {
        Self { graph, rooms }
    }
}

impl FloorPlanSource for InMemorySource {
    fn load_graph(&self) -> StorageResult<GraphDocument> {
        Ok(self.graph.clone())
    }

    fn load_rooms(&self) -> StorageResult<RoomCatalog> {
        Ok(self.rooms.clone())
    }
}
