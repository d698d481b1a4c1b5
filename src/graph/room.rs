//! Room metadata shown to users and searched by name

use super::node::NodeId;
use serde::{Deserialize, Serialize};

/// A named room and the graph node that represents it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    /// Human-facing room number (e.g. "101")
    pub room_id: String,
    /// Display name
    pub label: String,
    /// Alternative names users search for
    #[serde(default)]
    pub aliases: Vec<String>,
    /// Floor number
    pub floor: i32,
    /// Free-form room category (e.g. "classroom", "office")
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Graph node a route to this room should target
    pub node_id: NodeId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Room {
    /// Create a new room bound to a graph node
    pub fn new(
        room_id: impl Into<String>,
        label: impl Into<String>,
        floor: i32,
        node_id: impl Into<NodeId>,
    ) -> Self {
        Self {
            room_id: room_id.into(),
            label: label.into(),
            aliases: Vec::new(),
            floor,
            kind: String::new(),
            node_id: node_id.into(),
            description: None,
        }
    }

    /// Add an alias
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// Set the room category
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// All rooms of the building, in file order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoomCatalog {
    pub rooms: Vec<Room>,
}

impl RoomCatalog {
    pub fn new(rooms: Vec<Room>) -> Self {
        Self { rooms }
    }

    /// Look up a room by its room id (exact match)
    pub fn get(&self, room_id: &str) -> Option<&Room> {
        self.rooms.iter().find(|r| r.room_id == room_id)
    }

    /// Find the room represented by a graph node
    pub fn by_node(&self, node_id: &NodeId) -> Option<&Room> {
        self.rooms.iter().find(|r| &r.node_id == node_id)
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}
