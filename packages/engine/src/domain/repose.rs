//! Offsets, neighbourhoods and angle-of-repose direction tables.
//!
//! Row 0 is the top of the grid, so "down" is `dy = +1`.

use std::sync::Arc;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Offset {
    pub dx: i32,
    pub dy: i32,
}

impl Offset {
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }
}

/// Candidate offsets considered equally preferable.
pub type DirectionGroup = Vec<Offset>;

/// Ordered groups, shared read-only by every particle of one type.
pub type DirectionTable = Arc<[DirectionGroup]>;

pub const MOORE_NEIGHBORS: [Offset; 8] = [
    Offset::new(-1, -1),
    Offset::new(0, -1),
    Offset::new(1, -1),
    Offset::new(-1, 0),
    Offset::new(1, 0),
    Offset::new(-1, 1),
    Offset::new(0, 1),
    Offset::new(1, 1),
];

pub const VON_NEUMANN_NEIGHBORS: [Offset; 4] = [
    Offset::new(0, -1),
    Offset::new(-1, 0),
    Offset::new(1, 0),
    Offset::new(0, 1),
];

pub const MIN_REPOSE_ANGLE: f32 = 10.0;
pub const MAX_REPOSE_ANGLE: f32 = 80.0;

/// At or above this angle piles are steep: one lateral group with extra fall depth.
const STEEP_REPOSE_ANGLE: f32 = 50.0;

/// Direction groups for a granular material with the given repose angle (degrees).
///
/// Shallow angles reach further sideways (`round(cot θ)`) and build flat piles;
/// steep angles drop `round(tan θ)` rows next to the particle and build narrow ones.
pub fn repose_directions(angle_deg: f32) -> Vec<DirectionGroup> {
    let angle = if angle_deg.is_finite() {
        angle_deg.clamp(MIN_REPOSE_ANGLE, MAX_REPOSE_ANGLE)
    } else {
        MIN_REPOSE_ANGLE
    };
    let theta = angle.to_radians();

    let mut groups = vec![vec![Offset::new(0, 1)]];

    if angle < STEEP_REPOSE_ANGLE {
        groups.push(vec![Offset::new(1, 1), Offset::new(-1, 1)]);

        let reach = (1.0 / theta.tan()).round() as i32;
        groups.push(vec![Offset::new(reach, 1), Offset::new(-reach, 1)]);
    } else {
        let depth = theta.tan().round() as i32;
        groups.push(vec![Offset::new(1, depth), Offset::new(-1, depth)]);
    }

    groups
}

pub fn repose_table(angle_deg: f32) -> DirectionTable {
    repose_directions(angle_deg).into()
}
