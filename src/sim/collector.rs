//! Simultaneous-collision collection
//!
//! Scans one sprite against every other registered sprite and keeps the
//! earliest impacts. Impacts that tie the earliest time exactly are grouped
//! so they can be resolved together.

use arrayvec::ArrayVec;

use super::collision::{Collision, intersection_time};
use super::sprite::{Sprite, SpriteId};
use crate::consts::COLLISIONS_MAX;

/// Fixed-capacity buffer of tied collisions
pub type CollisionSet = ArrayVec<Collision, COLLISIONS_MAX>;

/// Add `sprite`'s earliest impacts within `look_ahead` to `collisions`.
///
/// `collisions` may already hold a group from earlier scans: an impact equal
/// to the group's time joins it, a strictly earlier one replaces it. Ties past
/// the buffer capacity are dropped with a warning. Returns how many were dropped.
pub fn find_collision_time(
    sprites: &[Sprite],
    sprite: SpriteId,
    look_ahead: f32,
    collisions: &mut CollisionSet,
) -> usize {
    let Some(a) = sprites.get(sprite.index()) else {
        return 0;
    };
    let mut dropped = 0;

    for (index, b) in sprites.iter().enumerate() {
        if index == sprite.index() {
            continue;
        }
        let Some(impact) = intersection_time(a, b) else {
            continue;
        };
        if impact.time > look_ahead {
            continue;
        }

        let collision = Collision::new(impact, sprite, SpriteId(index as u32));
        log::trace!(
            "{:?} hits {:?} with {} face at t={}",
            collision.sprite_a,
            collision.sprite_b,
            collision.face_a.label(),
            collision.time
        );

        match collisions.first() {
            Some(earliest) if collision.time == earliest.time => {
                if collisions.try_push(collision).is_err() {
                    log::warn!("Maximum simultaneous collisions exceeded {}", COLLISIONS_MAX);
                    dropped += 1;
                }
            }
            Some(earliest) if collision.time < earliest.time => {
                collisions.clear();
                collisions.push(collision);
            }
            Some(_) => {}
            None => collisions.push(collision),
        }
    }

    dropped
}
