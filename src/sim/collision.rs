//! Swept time-of-impact between axis-aligned boxes
//!
//! The solver works one axis at a time: along x (then y) it finds when the
//! moving box's leading face reaches the other box, and accepts that time only
//! if the two boxes overlap on the other axis at that moment. Knowing which
//! face was hit is what picks the reflection normal during response.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::sprite::{Sprite, SpriteId};

const AXIS_X: usize = 0;
const AXIS_Y: usize = 1;

/// Face of a box taking part in a collision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Face {
    /// Maximum x face
    Right,
    /// Minimum x face
    Left,
    /// Maximum y face
    Top,
    /// Minimum y face
    Bottom,
}

impl Face {
    /// Reflection normal for a hit on this face (points back into the box)
    #[inline]
    pub fn normal(self) -> Vec3 {
        match self {
            Face::Right => Vec3::NEG_X,
            Face::Left => Vec3::X,
            Face::Top => Vec3::NEG_Y,
            Face::Bottom => Vec3::Y,
        }
    }

    /// The face that meets this one
    #[inline]
    pub fn opposite(self) -> Face {
        match self {
            Face::Right => Face::Left,
            Face::Left => Face::Right,
            Face::Top => Face::Bottom,
            Face::Bottom => Face::Top,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Face::Right => "a right",
            Face::Left => "a left",
            Face::Top => "a top",
            Face::Bottom => "a bottom",
        }
    }
}

/// Earliest contact between two sprites, as seen from the first
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Impact {
    /// Time from now until the boxes touch
    pub time: f32,
    /// Face of the first sprite that is hit
    pub face_a: Face,
    /// Face of the second sprite that is hit
    pub face_b: Face,
}

/// A detected collision between two registered sprites
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collision {
    pub time: f32,
    pub face_a: Face,
    pub face_b: Face,
    /// The sprite the detection was computed from
    pub sprite_a: SpriteId,
    pub sprite_b: SpriteId,
}

impl Collision {
    pub fn new(impact: Impact, sprite_a: SpriteId, sprite_b: SpriteId) -> Self {
        Self {
            time: impact.time,
            face_a: impact.face_a,
            face_b: impact.face_b,
            sprite_a,
            sprite_b,
        }
    }
}

/// Strict overlap of both boxes on `axis` after each moves for `time`
#[inline]
pub fn overlaps_on_axis(a: &Sprite, b: &Sprite, time: f32, axis: usize) -> bool {
    let a_min = a.pos[axis] + a.vel[axis] * time;
    let b_min = b.pos[axis] + b.vel[axis] * time;
    let a_max = a_min + a.size[axis];
    let b_max = b_min + b.size[axis];
    a_min < b_max && b_min < a_max
}

/// Earliest time `a`'s swept box touches `b`'s, if `a` is moving into it.
///
/// Only `a`'s own motion opens a case: a resting `a` reports nothing, the
/// impact is found from the other sprite's side instead.
pub fn intersection_time(a: &Sprite, b: &Sprite) -> Option<Impact> {
    let (a_min, a_max) = (a.pos, a.max());
    let (b_min, b_max) = (b.pos, b.max());
    let mut best: Option<Impact> = None;

    // gap / closing speed; infinite or negative times fall out of the comparison
    let mut consider = |gap: f32, closing: f32, cross_axis: usize, face_a: Face| {
        let time = gap / closing;
        let best_time = best.map_or(f32::MAX, |impact| impact.time);
        if time >= 0.0 && time < best_time && overlaps_on_axis(a, b, time, cross_axis) {
            best = Some(Impact {
                time,
                face_a,
                face_b: face_a.opposite(),
            });
        }
    };

    if a.vel.x > 0.0 && a_max.x < b_min.x {
        consider(b_min.x - a_max.x, a.vel.x - b.vel.x, AXIS_Y, Face::Right);
    }
    if a.vel.x < 0.0 && a_min.x > b_max.x {
        consider(b_max.x - a_min.x, a.vel.x - b.vel.x, AXIS_Y, Face::Left);
    }
    if a.vel.y > 0.0 && a_max.y < b_min.y {
        consider(b_min.y - a_max.y, a.vel.y - b.vel.y, AXIS_X, Face::Top);
    }
    if a.vel.y < 0.0 && a_min.y > b_max.y {
        consider(b_max.y - a_min.y, a.vel.y - b.vel.y, AXIS_X, Face::Bottom);
    }

    best
}

/// Reflect velocity off a surface
///
/// Standard reflection: v' = v - 2(v·n)n
#[inline]
pub fn reflect_velocity(velocity: Vec3, normal: Vec3) -> Vec3 {
    velocity - 2.0 * velocity.dot(normal) * normal
}
