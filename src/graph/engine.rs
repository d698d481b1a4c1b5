//! WayfindEngine: shared, read-only view of the loaded building data

use super::floorplan::FloorPlan;
use super::room::RoomCatalog;
use crate::query::{Route, RouteError, RouteQuery, RoomSearch, SearchResult};
use chrono::{DateTime, Utc};
use std::sync::{Arc, RwLock};

/// One consistent version of the building data
///
/// Cloning is cheap; queries hold a snapshot for their whole duration so a
/// concurrent [`WayfindEngine::replace`] never changes data under them.
#[derive(Debug, Clone)]
pub struct GraphSnapshot {
    pub plan: Arc<FloorPlan>,
    pub rooms: Arc<RoomCatalog>,
    pub loaded_at: DateTime<Utc>,
}

impl GraphSnapshot {
    pub fn new(plan: FloorPlan, rooms: RoomCatalog) -> Self {
        Self {
            plan: Arc::new(plan),
            rooms: Arc::new(rooms),
            loaded_at: Utc::now(),
        }
    }
}

/// The main wayfinding engine
///
/// Starts empty; until a snapshot is installed every query fails with
/// [`RouteError::GraphUnavailable`].
#[derive(Debug, Default)]
pub struct WayfindEngine {
    current: RwLock<Option<GraphSnapshot>>,
}

impl WayfindEngine {
    /// Create an engine with no data loaded
    pub fn new() -> Self {
        Self {
            current: RwLock::new(None),
        }
    }

    /// Create an engine serving the given data
    pub fn with_snapshot(snapshot: GraphSnapshot) -> Self {
        Self {
            current: RwLock::new(Some(snapshot)),
        }
    }

    /// Install a new snapshot, replacing the previous one as a whole
    pub fn replace(&self, snapshot: GraphSnapshot) {
        let mut guard = self.current.write().unwrap_or_else(|e| e.into_inner());
        *guard = Some(snapshot);
    }

    /// Current snapshot, if any
    pub fn snapshot(&self) -> Option<GraphSnapshot> {
        self.current
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Whether a graph is loaded and queries can be served
    pub fn is_ready(&self) -> bool {
        self.snapshot().is_some()
    }

    /// Shortest route between two node ids on the current snapshot
    pub fn route(&self, from: &str, to: &str) -> Result<Route, RouteError> {
        let snapshot = self.snapshot().ok_or(RouteError::GraphUnavailable)?;
        RouteQuery::between(from, to).execute(&snapshot.plan)
    }

    /// Search rooms on the current snapshot
    pub fn search(&self, query: &str) -> Result<SearchResult, RouteError> {
        let snapshot = self.snapshot().ok_or(RouteError::GraphUnavailable)?;
        Ok(RoomSearch::new(query).execute(&snapshot.rooms))
    }
}
