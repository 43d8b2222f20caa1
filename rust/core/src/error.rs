// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for graph loading and lookup.

use crate::node::NodeId;

/// Result type alias for graph operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading or querying a wayfinding graph.
///
/// An unreachable destination is not an error: queries between disconnected
/// nodes resolve to an empty path.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The document is not valid JSON or is missing required structure.
    #[error("malformed graph document: {0}")]
    Malformed(String),

    /// Two node records in the document share the same id.
    #[error("duplicate node id: {0}")]
    DuplicateNode(NodeId),

    /// An edge carries a negative or NaN weight.
    ///
    /// The endpoint fields are deliberately not named `source`: thiserror
    /// treats a field of that name as the error's cause.
    #[error("negative weight {weight} on edge {from} -> {to}")]
    NegativeWeight {
        from: NodeId,
        to: NodeId,
        weight: f64,
    },

    /// A query referenced a node id absent from the graph.
    #[error("unknown node id: {0}")]
    UnknownNode(NodeId),
}
