// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Dijkstra shortest-path search over the wayfinding graph.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use rustc_hash::{FxHashMap, FxHashSet};

use floorpath_core::{Graph, NodeId, Result};

/// Shortest node sequence from `start` to `end`, inclusive of both.
///
/// Unknown endpoint ids are an error. An unreachable `end` is not: the
/// query resolves to an empty path. `start == end` resolves to the
/// singleton path.
pub fn shortest_path(graph: &Graph, start: &NodeId, end: &NodeId) -> Result<Vec<NodeId>> {
    shortest_path_with_cost(graph, start, end).map(|(path, _)| path)
}

/// Like [`shortest_path`], also returning the summed edge weight of the
/// found path. The no-route result carries an infinite cost.
pub fn shortest_path_with_cost(
    graph: &Graph,
    start: &NodeId,
    end: &NodeId,
) -> Result<(Vec<NodeId>, f64)> {
    graph.node(start)?;
    graph.node(end)?;

    let mut dist: FxHashMap<&NodeId, f64> = FxHashMap::default();
    let mut prev: FxHashMap<&NodeId, &NodeId> = FxHashMap::default();
    let mut visited: FxHashSet<&NodeId> = FxHashSet::default();
    let mut heap = BinaryHeap::new();

    dist.insert(start, 0.0);
    heap.push(DijkstraState {
        cost: 0.0,
        node: start,
    });

    while let Some(DijkstraState { cost, node }) = heap.pop() {
        if !visited.insert(node) {
            // Stale duplicate queue entry for an already-settled node.
            continue;
        }
        if node == end {
            break;
        }

        for (target, weight) in graph.neighbors(node) {
            // Stale connector edges may point at ids that were never
            // surveyed as nodes; they are unreachable, not a failure.
            if visited.contains(target) || !graph.contains(target) {
                continue;
            }
            let next_cost = cost + *weight;
            if dist.get(target).map_or(true, |&d| next_cost < d) {
                dist.insert(target, next_cost);
                prev.insert(target, node);
                heap.push(DijkstraState {
                    cost: next_cost,
                    node: target,
                });
            }
        }
    }

    let Some(&total) = dist.get(end) else {
        return Ok((Vec::new(), f64::INFINITY));
    };

    let mut path = vec![end.clone()];
    let mut current = end;
    while current != start {
        match prev.get(current) {
            Some(&parent) => {
                path.push(parent.clone());
                current = parent;
            }
            // Inconsistent predecessor chain: report no route rather
            // than panic.
            None => return Ok((Vec::new(), f64::INFINITY)),
        }
    }
    path.reverse();

    Ok((path, total))
}

/// Internal state for Dijkstra's priority queue (min-heap by cost).
#[derive(Debug, Clone, PartialEq)]
struct DijkstraState<'a> {
    cost: f64,
    node: &'a NodeId,
}

impl Eq for DijkstraState<'_> {}

impl PartialOrd for DijkstraState<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DijkstraState<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap
        other
            .cost
            .partial_cmp(&self.cost)
            .unwrap_or(Ordering::Equal)
    }
}
