// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Human-readable itinerary rendering.
//!
//! One line per route: the compressed stops with the walking distance of
//! each leg and the turn to take at each waypoint, e.g.
//!
//! ```text
//! (id: 1f_1, name: 101호, type: Room) -> 24.50m -> (id: 1f_7, name: , type: Corridor) <90도 우회전> -> 8.00m -> (id: 1f_9, name: 엘리베이터, type: Elevator)
//! ```
//!
//! Legs between two stops of the same vertical type (elevator to elevator,
//! stair to stair) are vertical travel; they render as a bare arrow with no
//! distance, since the planar edge weight is a fixed traversal cost rather
//! than meters walked.

use floorpath_core::{Graph, Node, NodeId, Result};

use crate::stops::{leg_distance, stop_indices};
use crate::turn::compute_turn;

fn stop_str(node: &Node) -> String {
    format!(
        "(id: {}, name: {}, type: {})",
        node.id, node.name, node.node_type
    )
}

/// Renders the compressed itinerary for a full solver path.
///
/// Distances sum the stored edge weights along the *full* path between two
/// stops, not the straight-line gap. Turn annotations are recomputed at
/// each stop against its immediate full-path neighbors, so a stop kept for
/// its node type still gets its turn called out.
pub fn format_path(graph: &Graph, path: &[NodeId]) -> Result<String> {
    let indices = stop_indices(graph, path);
    let mut out = String::new();

    for (k, &pos) in indices.iter().enumerate() {
        let node = graph.node(&path[pos])?;

        if k == 0 {
            out.push_str(&stop_str(node));
            continue;
        }

        let prev_stop = graph.node(&path[indices[k - 1]])?;
        let vertical_pair =
            prev_stop.node_type.is_vertical() && prev_stop.node_type == node.node_type;
        if vertical_pair {
            out.push_str(" -> ");
        } else {
            let dist = leg_distance(graph, path, indices[k - 1], pos);
            out.push_str(&format!(" -> {dist:.2}m -> "));
        }
        out.push_str(&stop_str(node));

        let interior = k + 1 < indices.len();
        if interior && !node.node_type.is_vertical() {
            let turn = compute_turn(
                graph.node(&path[pos - 1])?,
                node,
                graph.node(&path[pos + 1])?,
            );
            if !turn.is_straight() {
                out.push_str(&format!(" <{turn}>"));
            }
        }
    }

    Ok(out)
}
