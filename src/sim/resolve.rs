//! Collision response
//!
//! Every sprite in a tied collision group bounces off the face it was hit on.
//! Its new speed is the combined speed of both participants, halved when the
//! other participant can move too. Static sprites never change velocity.

use arrayvec::ArrayVec;
use glam::Vec3;

use super::collision::{Collision, Face, reflect_velocity};
use super::sprite::{Sprite, SpriteId};
use crate::consts::COLLISIONS_MAX;

/// Sprites already updated during one resolution pass (two per collision at most)
pub type ResolvedSet = ArrayVec<SpriteId, { COLLISIONS_MAX * 2 }>;

/// New velocity for a sprite hit on `face`, given the pair's combined speed.
///
/// A sprite at rest has nothing to reflect and is pushed along the face normal.
pub fn bounce_velocity(velocity: Vec3, face: Face, speed: f32, other_is_static: bool) -> Vec3 {
    let factor = if other_is_static { 1.0 } else { 2.0 };
    let direction = reflect_velocity(velocity, face.normal()).normalize_or_zero();
    let direction = if direction == Vec3::ZERO {
        face.normal()
    } else {
        direction
    };
    direction * (speed / factor)
}

/// Apply response for a group of simultaneous collisions.
///
/// Each sprite is updated at most once per call, even when it appears in
/// several records. Returns the number of velocities changed.
pub fn resolve_collisions(
    sprites: &mut [Sprite],
    collisions: &[Collision],
    resolved: &mut ResolvedSet,
) -> usize {
    resolved.clear();
    let mut updated = 0;

    for collision in collisions {
        let (Some(&a), Some(&b)) = (
            sprites.get(collision.sprite_a.index()),
            sprites.get(collision.sprite_b.index()),
        ) else {
            continue;
        };
        let speed = a.vel.length() + b.vel.length();

        let participants = [
            (collision.sprite_a, a, collision.face_a, b.is_static),
            (collision.sprite_b, b, collision.face_b, a.is_static),
        ];
        for (id, sprite, face, other_is_static) in participants {
            if sprite.is_static || resolved.contains(&id) {
                continue;
            }
            let vel = bounce_velocity(sprite.vel, face, speed, other_is_static);
            log::debug!(
                "{:?} bounced off {} face: {} -> {}",
                id,
                face.label(),
                sprite.vel,
                vel
            );
            sprites[id.index()].vel = vel;
            if resolved.try_push(id).is_err() {
                log::warn!("Resolved set full, {:?} may be updated twice", id);
            }
            updated += 1;
        }
    }

    resolved.clear();
    updated
}
