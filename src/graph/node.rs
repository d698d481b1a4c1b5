//! Node representation in the navigation graph

use serde::{Deserialize, Serialize};

/// Unique identifier for a node
///
/// Serializes as a plain string (e.g. "node_101", "d12", "stairs_1")
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Create a NodeId from a string
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True if the id is empty or whitespace only
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// True if the id has leading or trailing whitespace
    pub fn is_padded(&self) -> bool {
        self.0.trim().len() != self.0.len()
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::borrow::Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// What a node stands for in the building
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// Corridor junction or bend
    #[default]
    Waypoint,
    /// Doorway between a room and a corridor
    Door,
    /// Room centre
    Room,
    /// Staircase landing, links floors
    Stairs,
    /// Building entrance
    Entrance,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Waypoint => "waypoint",
            NodeKind::Door => "door",
            NodeKind::Room => "room",
            NodeKind::Stairs => "stairs",
            NodeKind::Entrance => "entrance",
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A node in the navigation graph
///
/// `x`/`y` are floor-plan image coordinates used by the map renderer.
/// Routing never looks at them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier
    pub id: NodeId,
    /// Floor number (1 = ground floor)
    pub floor: i32,
    /// Horizontal display coordinate
    pub x: f64,
    /// Vertical display coordinate
    pub y: f64,
    /// Node classification
    #[serde(rename = "type", default)]
    pub kind: NodeKind,
}

impl Node {
    /// Create a new waypoint node on the given floor at the origin
    pub fn new(id: impl Into<NodeId>, floor: i32) -> Self {
        Self {
            id: id.into(),
            floor,
            x: 0.0,
            y: 0.0,
            kind: NodeKind::Waypoint,
        }
    }

    /// Set the node kind
    pub fn with_kind(mut self, kind: NodeKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set display coordinates
    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }
}
