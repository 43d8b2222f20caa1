// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # FloorPath Route
//!
//! Routing layer over the `floorpath-core` graph model.
//!
//! A query runs in four stages: Dijkstra search ([`solver`]) produces the
//! full node path, the stop compressor ([`stops`]) collapses it to decision
//! waypoints using geometric turn classification ([`turn`]), and one of two
//! renderers turns the stops into output — a human-readable itinerary
//! ([`itinerary`]) or the tokenized feature sequence consumed by external
//! sequence models ([`features`]).

pub mod features;
pub mod itinerary;
pub mod solver;
pub mod stops;
pub mod turn;

pub use features::{dataset_lines, encode};
pub use itinerary::format_path;
pub use solver::{shortest_path, shortest_path_with_cost};
pub use stops::compress_stops;
pub use turn::{compute_turn, Turn};

pub use floorpath_core::{Error, Result};
