// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Stop compression: collapse a full node path to decision waypoints.
//!
//! A raw shortest path visits every survey node along the way, most of them
//! corridor points that exist only to shape the polyline. The compressor
//! keeps the endpoints, every vertical transition (elevator/stair), every
//! non-corridor location, and the corridor nodes where the walker actually
//! has to turn. Both renderers consume the result through [`stop_indices`],
//! so the policy lives in exactly one place.

use floorpath_core::{Graph, NodeId};

use crate::turn::{compute_turn, Turn};

/// Bends at or under this magnitude between corridor nodes are drift
/// between parallel corridor runs, not turns worth announcing.
const CORRIDOR_DRIFT_MAX_DEG: u16 = 15;

/// Reduces a full path to its stops. Always a subsequence of `path` that
/// keeps the first and last elements; a path shorter than two nodes is
/// returned as-is.
pub fn compress_stops(graph: &Graph, path: &[NodeId]) -> Vec<NodeId> {
    stop_indices(graph, path)
        .into_iter()
        .map(|i| path[i].clone())
        .collect()
}

/// Positions within `path` of the kept stops, strictly increasing.
pub(crate) fn stop_indices(graph: &Graph, path: &[NodeId]) -> Vec<usize> {
    if path.len() < 2 {
        return (0..path.len()).collect();
    }

    let mut keep = vec![0];
    for i in 1..path.len() - 1 {
        if keep_interior(graph, path, i) {
            keep.push(i);
        }
    }
    keep.push(path.len() - 1);
    keep
}

fn keep_interior(graph: &Graph, path: &[NodeId], i: usize) -> bool {
    let Some(curr) = graph.get(&path[i]) else {
        // Paths normally come from the solver, whose nodes all exist; an
        // id we cannot classify is kept rather than silently dropped.
        return true;
    };

    // Vertical transitions and proper locations are always stops.
    if curr.node_type.is_vertical() || !curr.node_type.is_corridor() {
        return true;
    }

    let (Some(prev), Some(next)) = (graph.get(&path[i - 1]), graph.get(&path[i + 1])) else {
        return true;
    };

    match compute_turn(prev, curr, next) {
        Turn::Straight => false,
        Turn::Left(angle) | Turn::Right(angle) => {
            !(angle <= CORRIDOR_DRIFT_MAX_DEG
                && prev.node_type.is_corridor()
                && next.node_type.is_corridor())
        }
    }
}

/// Summed stored edge weight along `path[from..=to]`.
///
/// Consecutive solver-path nodes are always edge-connected; a missing edge
/// on a hand-built path contributes zero rather than failing the render.
pub(crate) fn leg_distance(graph: &Graph, path: &[NodeId], from: usize, to: usize) -> f64 {
    path[from..to]
        .iter()
        .zip(&path[from + 1..=to])
        .map(|(a, b)| graph.edge_weight(a, b).unwrap_or(0.0))
        .sum()
}
