// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Location node types: ids, the type vocabulary, and node records.
//!
//! Survey tooling emits raw integer ids for single-floor graphs and
//! floor-prefixed string ids (`"1f_3"`, `"b2_2f_17"`) once floors are merged.
//! Both arrive as the same opaque [`NodeId`]; the prefix before the first
//! `_` is the node's floor/building locality.

use nalgebra::Point2;
use serde::{Deserialize, Serialize};

// ============================================================================
// Node ids
// ============================================================================

/// Opaque identifier of a location node.
///
/// Deserializes from either a JSON string or a JSON integer; integer ids are
/// stored in their decimal string form, so `7` and `"7"` are the same id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeId(String);

impl NodeId {
    /// Creates an id from anything string-like.
    pub fn new(id: impl Into<String>) -> Self {
        NodeId(id.into())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the floor/building prefix of this id.
    ///
    /// The prefix is the substring before the first `_` separator
    /// (`"b2_1f_17"` -> `"b2"`). An id without a separator is its own
    /// singleton floor (`"42"` -> `"42"`).
    pub fn floor(&self) -> &str {
        match self.0.find('_') {
            Some(sep) => &self.0[..sep],
            None => &self.0,
        }
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        NodeId(id)
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        NodeId(id.to_owned())
    }
}

impl<'de> Deserialize<'de> for NodeId {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct IdVisitor;

        impl serde::de::Visitor<'_> for IdVisitor {
            type Value = NodeId;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("a string or integer node id")
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> std::result::Result<NodeId, E> {
                Ok(NodeId(v.to_owned()))
            }

            fn visit_u64<E: serde::de::Error>(self, v: u64) -> std::result::Result<NodeId, E> {
                Ok(NodeId(v.to_string()))
            }

            fn visit_i64<E: serde::de::Error>(self, v: i64) -> std::result::Result<NodeId, E> {
                Ok(NodeId(v.to_string()))
            }
        }

        deserializer.deserialize_any(IdVisitor)
    }
}

// ============================================================================
// Node types
// ============================================================================

/// Category of a location node.
///
/// The vocabulary is open: unknown type names from newer survey tooling are
/// preserved verbatim in [`NodeType::Other`] and round-trip unchanged.
/// `Corridor`, `Elevator`, and `Stair` receive special routing treatment;
/// the remaining named variants are the types current tooling emits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NodeType {
    Room,
    Corridor,
    Restroom,
    Stair,
    Elevator,
    Door,
    Outside,
    Other(String),
}

impl NodeType {
    /// Returns the type name as a string.
    pub fn as_str(&self) -> &str {
        match self {
            NodeType::Room => "Room",
            NodeType::Corridor => "Corridor",
            NodeType::Restroom => "Restroom",
            NodeType::Stair => "Stair",
            NodeType::Elevator => "Elevator",
            NodeType::Door => "Door",
            NodeType::Outside => "Outside",
            NodeType::Other(name) => name,
        }
    }

    /// True for the vertical transition types (elevator and stair).
    pub fn is_vertical(&self) -> bool {
        matches!(self, NodeType::Elevator | NodeType::Stair)
    }

    /// True for corridor waypoints.
    pub fn is_corridor(&self) -> bool {
        matches!(self, NodeType::Corridor)
    }
}

impl std::fmt::Display for NodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for NodeType {
    fn from(name: String) -> Self {
        match name.as_str() {
            "Room" => NodeType::Room,
            "Corridor" => NodeType::Corridor,
            "Restroom" => NodeType::Restroom,
            "Stair" => NodeType::Stair,
            "Elevator" => NodeType::Elevator,
            "Door" => NodeType::Door,
            "Outside" => NodeType::Outside,
            _ => NodeType::Other(name),
        }
    }
}

impl From<&str> for NodeType {
    fn from(name: &str) -> Self {
        NodeType::from(name.to_owned())
    }
}

impl From<NodeType> for String {
    fn from(ty: NodeType) -> Self {
        match ty {
            NodeType::Other(name) => name,
            named => named.as_str().to_owned(),
        }
    }
}

// ============================================================================
// Node records
// ============================================================================

/// A surveyed location: id, display name, category, planar position.
///
/// Coordinates are in the per-venue survey space (pixels of the floor-plan
/// raster or meters, consistently within one graph).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    pub x: f64,
    pub y: f64,
}

impl Node {
    /// Planar position as a nalgebra point.
    pub fn position(&self) -> Point2<f64> {
        Point2::new(self.x, self.y)
    }

    /// Floor/building prefix of this node's id.
    pub fn floor(&self) -> &str {
        self.id.floor()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- NodeId ---

    #[test]
    fn floor_prefix_before_first_separator() {
        assert_eq!(NodeId::new("1f_3").floor(), "1f");
        assert_eq!(NodeId::new("b2_1f_17").floor(), "b2");
    }

    #[test]
    fn floor_of_unseparated_id_is_whole_id() {
        assert_eq!(NodeId::new("42").floor(), "42");
        assert_eq!(NodeId::new("lobby").floor(), "lobby");
    }

    #[test]
    fn id_deserializes_from_string_or_integer() {
        let s: NodeId = serde_json::from_str("\"1f_3\"").unwrap();
        let n: NodeId = serde_json::from_str("7").unwrap();
        assert_eq!(s, NodeId::new("1f_3"));
        assert_eq!(n, NodeId::new("7"));
    }

    #[test]
    fn id_rejects_non_scalar_json() {
        assert!(serde_json::from_str::<NodeId>("[1, 2]").is_err());
        assert!(serde_json::from_str::<NodeId>("3.5").is_err());
    }

    #[test]
    fn id_serializes_as_plain_string() {
        let json = serde_json::to_string(&NodeId::new("2f_10")).unwrap();
        assert_eq!(json, "\"2f_10\"");
    }

    // --- NodeType ---

    #[test]
    fn known_type_names_round_trip() {
        for name in [
            "Room", "Corridor", "Restroom", "Stair", "Elevator", "Door", "Outside",
        ] {
            let ty = NodeType::from(name);
            assert!(!matches!(ty, NodeType::Other(_)), "{name} should be reserved");
            assert_eq!(ty.as_str(), name);
        }
    }

    #[test]
    fn unknown_type_name_preserved_verbatim() {
        let ty = NodeType::from("Lobby");
        assert_eq!(ty, NodeType::Other("Lobby".to_owned()));
        assert_eq!(serde_json::to_string(&ty).unwrap(), "\"Lobby\"");
    }

    #[test]
    fn vertical_types() {
        assert!(NodeType::Elevator.is_vertical());
        assert!(NodeType::Stair.is_vertical());
        assert!(!NodeType::Corridor.is_vertical());
        assert!(!NodeType::from("Lobby").is_vertical());
    }

    // --- Node ---

    #[test]
    fn node_parses_with_renamed_type_field() {
        let node: Node = serde_json::from_str(
            r#"{"id": "1f_3", "name": "101호", "type": "Room", "x": 120.5, "y": 88.0}"#,
        )
        .unwrap();
        assert_eq!(node.id, NodeId::new("1f_3"));
        assert_eq!(node.node_type, NodeType::Room);
        assert_eq!(node.position(), Point2::new(120.5, 88.0));
    }

    #[test]
    fn node_name_defaults_to_empty() {
        let node: Node =
            serde_json::from_str(r#"{"id": 4, "type": "Corridor", "x": 0.0, "y": 1.0}"#).unwrap();
        assert_eq!(node.name, "");
        assert_eq!(node.id, NodeId::new("4"));
    }
}
