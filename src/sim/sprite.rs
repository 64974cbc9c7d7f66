//! Sprite (axis-aligned box) data
//!
//! A sprite's box spans `[pos, pos + size]` on every axis. Only x and y take
//! part in collision tests; z is integrated along with the rest.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Stable handle to a sprite registered in a [`World`](super::World)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SpriteId(pub(crate) u32);

impl SpriteId {
    /// Index into the world's sprite list
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A moving (or static) axis-aligned box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sprite {
    /// Minimum corner
    pub pos: Vec3,
    pub vel: Vec3,
    /// Extent along each axis (non-negative)
    pub size: Vec3,
    /// Static sprites collide but never have their velocity changed
    #[serde(default)]
    pub is_static: bool,
}

impl Sprite {
    pub fn new(pos: Vec3, size: Vec3, vel: Vec3) -> Self {
        Self {
            pos,
            vel,
            size,
            is_static: false,
        }
    }

    /// An immovable sprite with zero velocity
    pub fn fixed(pos: Vec3, size: Vec3) -> Self {
        Self {
            pos,
            vel: Vec3::ZERO,
            size,
            is_static: true,
        }
    }

    /// Maximum corner
    #[inline]
    pub fn max(&self) -> Vec3 {
        self.pos + self.size
    }

    /// Position after moving for `time` at the current velocity
    #[inline]
    pub fn pos_at(&self, time: f32) -> Vec3 {
        self.pos + self.vel * time
    }

    /// Move by `time` worth of velocity on all three axes
    #[inline]
    pub fn advance(&mut self, time: f32) {
        self.pos += self.vel * time;
    }
}
