// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Validated in-memory wayfinding graph.
//!
//! Built once from a [`GraphDocument`], then read-only for the lifetime of
//! all queries. Holds the node records, the directed weighted adjacency
//! lists, and the document order of node ids so that name resolution and
//! whole-graph iteration are deterministic across runs.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::document::GraphDocument;
use crate::error::{Error, Result};
use crate::node::{Node, NodeId};

/// Outgoing `(target, weight)` pairs of one node. Indoor survey graphs stay
/// near degree 4 (corridor junctions), so the list lives inline.
type AdjacencyList = SmallVec<[(NodeId, f64); 4]>;

/// Immutable-after-load graph of a surveyed venue.
///
/// Construction validates the document invariants (unique node ids,
/// non-negative edge weights) and never yields a partial graph. Edges whose
/// target id was never surveyed are kept and left to query-time defensive
/// handling; edges whose *source* id is unknown are dropped, so neighbor
/// queries on nonexistent ids stay empty.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// Node id → node record.
    nodes: FxHashMap<NodeId, Node>,
    /// Source id → outgoing adjacency list.
    adjacency: FxHashMap<NodeId, AdjacencyList>,
    /// Node ids in document order.
    order: Vec<NodeId>,
    edge_count: usize,
}

impl Graph {
    /// Parses and validates a graph from JSON document text.
    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_document(GraphDocument::from_json(json)?)
    }

    /// Builds a graph from a parsed document, validating its invariants.
    pub fn from_document(doc: GraphDocument) -> Result<Self> {
        let mut graph = Graph::default();
        graph.order.reserve(doc.nodes.len());

        for node in doc.nodes {
            if graph.nodes.contains_key(&node.id) {
                return Err(Error::DuplicateNode(node.id));
            }
            graph.order.push(node.id.clone());
            graph.nodes.insert(node.id.clone(), node);
        }

        for edge in doc.edges {
            // Negated comparison so NaN weights are rejected as well.
            if !(edge.weight >= 0.0) {
                return Err(Error::NegativeWeight {
                    from: edge.source,
                    to: edge.target,
                    weight: edge.weight,
                });
            }
            if !graph.nodes.contains_key(&edge.source) {
                continue;
            }
            graph
                .adjacency
                .entry(edge.source)
                .or_default()
                .push((edge.target, edge.weight));
            graph.edge_count += 1;
        }

        Ok(graph)
    }

    // =========================================================================
    // Node accessors
    // =========================================================================

    /// True if the id names a node in this graph.
    pub fn contains(&self, id: &NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Returns the node for an id, or [`Error::UnknownNode`].
    pub fn node(&self, id: &NodeId) -> Result<&Node> {
        self.nodes.get(id).ok_or_else(|| Error::UnknownNode(id.clone()))
    }

    /// Returns the node for an id, if present.
    pub fn get(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Node ids in document order.
    pub fn node_ids(&self) -> impl Iterator<Item = &NodeId> {
        self.order.iter()
    }

    /// Nodes in document order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.order.iter().filter_map(move |id| self.nodes.get(id))
    }

    /// All nodes whose display name matches exactly, in document order.
    ///
    /// Survey names repeat across buildings ("화장실" on every floor), so
    /// callers that need one node take the first match.
    pub fn resolve_name(&self, name: &str) -> Vec<&Node> {
        self.nodes().filter(|n| n.name == name).collect()
    }

    /// Returns the number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of stored directed edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    // =========================================================================
    // Edge accessors
    // =========================================================================

    /// Outgoing `(target, weight)` pairs of a node.
    ///
    /// Empty for nodes without outgoing edges and for unknown ids; never an
    /// error.
    pub fn neighbors(&self, id: &NodeId) -> &[(NodeId, f64)] {
        self.adjacency.get(id).map(|list| list.as_slice()).unwrap_or(&[])
    }

    /// Weight of the stored directed edge `source -> target`, if present.
    pub fn edge_weight(&self, source: &NodeId, target: &NodeId) -> Option<f64> {
        self.neighbors(source)
            .iter()
            .find(|(t, _)| t == target)
            .map(|(_, w)| *w)
    }
}
