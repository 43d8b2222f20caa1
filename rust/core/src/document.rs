// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Serde shape of the merged graph document.
//!
//! The survey pipeline merges per-floor graphs into a single JSON file with
//! top-level `nodes` and `edges` arrays. Undirected connections are emitted
//! as two opposing directed edges upstream; this crate takes the document
//! at face value.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::node::{Node, NodeId};

/// One directed weighted edge record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub source: NodeId,
    pub target: NodeId,
    /// Meters for intra-floor edges, or the fixed traversal cost assigned to
    /// an inter-level elevator/stair link.
    pub weight: f64,
}

/// Top-level document: the merged node and edge arrays.
///
/// Both keys are required; a document without them is malformed rather than
/// an empty graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument {
    pub nodes: Vec<Node>,
    pub edges: Vec<EdgeRecord>,
}

impl GraphDocument {
    /// Parses a document from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Malformed(e.to_string()))
    }
}
