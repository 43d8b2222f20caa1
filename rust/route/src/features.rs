// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Feature-sequence encoding: tokenized route descriptions.
//!
//! The second consumer of stop compression. Where the itinerary renderer
//! writes for people, this one writes the compact token stream an external
//! sequence model is trained on: a distance bucket and node type per leg,
//! a bare direction token where a corridor stop turns, and a terminal
//! `END`. Token text is part of the trained vocabulary; changing it
//! invalidates existing model checkpoints.

use floorpath_core::{Graph, Node, NodeId, NodeType, Result};

use crate::solver::shortest_path;
use crate::stops::{leg_distance, stop_indices};
use crate::turn::{compute_turn, Turn};

/// Leg distances snap to multiples of this many meters.
const DISTANCE_BUCKET_M: f64 = 5.0;

/// Terminal token of every encoded sequence.
pub const END_TOKEN: &str = "END";

/// Encodes a full solver path as feature tokens.
///
/// Per consecutive stop pair: `D={bucketed distance}`, `TYPE={stop type}`,
/// then `TURN_LEFT`/`TURN_RIGHT` when the arrived-at stop is a corridor
/// (not the overall last) with a genuine turn against its full-path
/// neighbors. The first stop emits nothing; its type is implied by the
/// query.
pub fn encode(graph: &Graph, path: &[NodeId]) -> Result<Vec<String>> {
    let indices = stop_indices(graph, path);
    let mut tokens = Vec::new();

    for k in 1..indices.len() {
        let pos = indices[k];
        let node = graph.node(&path[pos])?;

        let dist = leg_distance(graph, path, indices[k - 1], pos);
        let bucket = (dist / DISTANCE_BUCKET_M).round() * DISTANCE_BUCKET_M;
        tokens.push(format!("D={}", bucket as i64));
        tokens.push(format!("TYPE={}", node.node_type));

        if k + 1 < indices.len() && node.node_type.is_corridor() {
            let turn = compute_turn(
                graph.node(&path[pos - 1])?,
                node,
                graph.node(&path[pos + 1])?,
            );
            match turn {
                Turn::Left(_) => tokens.push("TURN_LEFT".to_owned()),
                Turn::Right(_) => tokens.push("TURN_RIGHT".to_owned()),
                Turn::Straight => {}
            }
        }
    }

    tokens.push(END_TOKEN.to_owned());
    Ok(tokens)
}

/// One training line per ordered pair of distinct rooms with a route:
/// `{start name} {end name} | {tokens joined by spaces}`.
///
/// Pairs with no route are skipped, not errors. Rooms iterate in document
/// order, so the emitted lines are stable across runs of the same graph.
pub fn dataset_lines(graph: &Graph) -> Result<Vec<String>> {
    let rooms: Vec<&Node> = graph
        .nodes()
        .filter(|n| n.node_type == NodeType::Room)
        .collect();

    let mut lines = Vec::new();
    for start in &rooms {
        for end in &rooms {
            if start.id == end.id {
                continue;
            }
            let path = shortest_path(graph, &start.id, &end.id)?;
            if path.is_empty() {
                continue;
            }
            let tokens = encode(graph, &path)?;
            lines.push(format!("{} {} | {}", start.name, end.name, tokens.join(" ")));
        }
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use floorpath_core::{EdgeRecord, GraphDocument};

    fn node(id: &str, name: &str, ty: &str, x: f64, y: f64) -> Node {
        Node {
            id: NodeId::new(id),
            name: name.to_owned(),
            node_type: NodeType::from(ty),
            x,
            y,
        }
    }

    fn both_ways(source: &str, target: &str, weight: f64) -> Vec<EdgeRecord> {
        vec![
            EdgeRecord {
                source: NodeId::new(source),
                target: NodeId::new(target),
                weight,
            },
            EdgeRecord {
                source: NodeId::new(target),
                target: NodeId::new(source),
                weight,
            },
        ]
    }

    fn graph(nodes: Vec<Node>, edges: Vec<Vec<EdgeRecord>>) -> Graph {
        Graph::from_document(GraphDocument {
            nodes,
            edges: edges.into_iter().flatten().collect(),
        })
        .unwrap()
    }

    fn ids(raw: &[&str]) -> Vec<NodeId> {
        raw.iter().map(|s| NodeId::new(*s)).collect()
    }

    /// L-shaped walk: room, corridor corner, room below it.
    fn make_corner_graph() -> Graph {
        graph(
            vec![
                node("1f_1", "원무과", "Room", 0.0, 0.0),
                node("1f_2", "", "Corridor", 12.0, 0.0),
                node("1f_3", "검사실", "Room", 12.0, 9.0),
            ],
            vec![both_ways("1f_1", "1f_2", 12.0), both_ways("1f_2", "1f_3", 9.0)],
        )
    }

    #[test]
    fn straight_leg_encodes_distance_and_type() {
        let g = graph(
            vec![
                node("1f_1", "A", "Room", 0.0, 0.0),
                node("1f_2", "", "Corridor", 14.0, 0.0),
                node("1f_3", "B", "Room", 28.0, 0.0),
            ],
            vec![both_ways("1f_1", "1f_2", 14.0), both_ways("1f_2", "1f_3", 14.0)],
        );
        let tokens = encode(&g, &ids(&["1f_1", "1f_2", "1f_3"])).unwrap();
        // 28m rounds to the 30 bucket; the straight corridor point is gone.
        assert_eq!(tokens, vec!["D=30", "TYPE=Room", "END"]);
    }

    #[test]
    fn corner_corridor_emits_turn_token() {
        let g = make_corner_graph();
        let tokens = encode(&g, &ids(&["1f_1", "1f_2", "1f_3"])).unwrap();
        assert_eq!(
            tokens,
            vec!["D=10", "TYPE=Corridor", "TURN_RIGHT", "D=10", "TYPE=Room", "END"]
        );
    }

    #[test]
    fn terminal_room_gets_no_turn_token() {
        // Same corner walked in reverse: the corridor still turns (left
        // now), the final room never does.
        let g = make_corner_graph();
        let tokens = encode(&g, &ids(&["1f_3", "1f_2", "1f_1"])).unwrap();
        assert_eq!(
            tokens,
            vec!["D=10", "TYPE=Corridor", "TURN_LEFT", "D=10", "TYPE=Room", "END"]
        );
    }

    #[test]
    fn trivial_path_is_just_end() {
        let g = make_corner_graph();
        assert_eq!(encode(&g, &ids(&["1f_1"])).unwrap(), vec!["END"]);
        assert_eq!(encode(&g, &[]).unwrap(), vec!["END"]);
    }

    #[test]
    fn type_tokens_match_compressed_stops() {
        let g = make_corner_graph();
        let path = ids(&["1f_1", "1f_2", "1f_3"]);
        let stops = crate::stops::compress_stops(&g, &path);
        let tokens = encode(&g, &path).unwrap();
        let type_tokens: Vec<&str> = tokens
            .iter()
            .filter(|t| t.starts_with("TYPE="))
            .map(|t| &t["TYPE=".len()..])
            .collect();
        let stop_types: Vec<&str> = stops[1..]
            .iter()
            .map(|id| g.node(id).unwrap().node_type.as_str())
            .collect();
        assert_eq!(type_tokens, stop_types);
    }

    #[test]
    fn dataset_covers_connected_room_pairs_in_order() {
        let g = graph(
            vec![
                node("1f_1", "보안실", "Room", 0.0, 0.0),
                node("1f_2", "", "Corridor", 10.0, 0.0),
                node("1f_3", "기계실", "Room", 20.0, 0.0),
                node("9f_9", "외딴방", "Room", 500.0, 500.0),
            ],
            vec![both_ways("1f_1", "1f_2", 10.0), both_ways("1f_2", "1f_3", 10.0)],
        );
        let lines = dataset_lines(&g).unwrap();
        // The isolated room reaches nothing and nothing reaches it.
        assert_eq!(
            lines,
            vec![
                "보안실 기계실 | D=20 TYPE=Room END",
                "기계실 보안실 | D=20 TYPE=Room END",
            ]
        );
    }
}
