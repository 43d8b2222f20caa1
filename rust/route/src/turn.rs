// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Geometric turn classification between consecutive route nodes.
//!
//! Walking `prev -> curr -> next`, the bend at `curr` is measured as the
//! deviation of the outgoing segment from the incoming heading: 0° is
//! straight-through continuation, 180° a full reversal. Survey coordinates
//! are screen-space (y grows downward), which fixes the cross-product sign
//! convention below; it matches the deployed floor plans and must not be
//! flipped without re-validating against them.

use floorpath_core::Node;
use nalgebra::Vector2;

/// Deviation (degrees) under which a bend still counts as walking straight.
const STRAIGHT_TOLERANCE_DEG: f64 = 10.0;

/// Classification of the bend at one route node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// Within tolerance of straight-through, or a transition with no
    /// meaningful planar geometry (floor change, coincident points).
    Straight,
    /// Turn left by the given magnitude in degrees, in (0, 180].
    Left(u16),
    /// Turn right by the given magnitude in degrees, in (0, 180].
    Right(u16),
}

impl Turn {
    /// True for the straight classification.
    pub fn is_straight(&self) -> bool {
        matches!(self, Turn::Straight)
    }

    /// Turn magnitude in degrees; `None` when straight.
    pub fn angle(&self) -> Option<u16> {
        match self {
            Turn::Straight => None,
            Turn::Left(angle) | Turn::Right(angle) => Some(*angle),
        }
    }
}

impl std::fmt::Display for Turn {
    /// Survey-notation rendering: `직진`, `45도 좌회전`, `90도 우회전`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Turn::Straight => f.write_str("직진"),
            Turn::Left(angle) => write!(f, "{angle}도 좌회전"),
            Turn::Right(angle) => write!(f, "{angle}도 우회전"),
        }
    }
}

/// Classifies the bend at `curr` on the walk `prev -> curr -> next`.
///
/// Transitions that cross a floor/building boundary are `Straight`: the
/// planar coordinates of different floors share no frame, so no turn can
/// be announced there.
pub fn compute_turn(prev: &Node, curr: &Node, next: &Node) -> Turn {
    if prev.floor() != curr.floor() || curr.floor() != next.floor() {
        return Turn::Straight;
    }

    let v1: Vector2<f64> = curr.position() - prev.position();
    let v2: Vector2<f64> = next.position() - curr.position();

    let n1 = v1.norm();
    let n2 = v2.norm();
    if n1 == 0.0 || n2 == 0.0 {
        return Turn::Straight;
    }

    // Clamp guards acos against float drift outside [-1, 1].
    let cos = (v1.dot(&v2) / (n1 * n2)).clamp(-1.0, 1.0);
    let deviation = cos.acos().to_degrees();
    if deviation < STRAIGHT_TOLERANCE_DEG {
        return Turn::Straight;
    }

    let angle = deviation.round() as u16;
    // In y-down coordinates a positive perp product bends rightward. An
    // exact reversal (perp = 0) falls into the left branch, as deployed.
    if v1.perp(&v2) > 0.0 {
        Turn::Right(angle)
    } else {
        Turn::Left(angle)
    }
}
