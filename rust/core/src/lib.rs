// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # FloorPath Core
//!
//! Graph model for indoor wayfinding across multi-floor, multi-building
//! venues.
//!
//! A venue is surveyed as a set of typed location nodes (rooms, corridors,
//! stairs, elevators, outdoor connectors) joined by directed weighted edges.
//! This crate owns the document format those surveys are merged into, the
//! validated in-memory [`Graph`] built from it, and the id/type vocabulary
//! shared by every consumer. The graph is loaded once and read-only
//! afterwards; routing and rendering live in `floorpath-route`.

pub mod document;
pub mod error;
pub mod graph;
pub mod node;

pub use document::{EdgeRecord, GraphDocument};
pub use error::{Error, Result};
pub use graph::Graph;
pub use node::{Node, NodeId, NodeType};
