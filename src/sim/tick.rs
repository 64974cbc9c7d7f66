//! Frame stepper
//!
//! Consumes a frame's delta time in sub-steps. Each sub-step finds the
//! earliest collision group among all sprites, moves everything up to just
//! before that moment, bounces the sprites involved and goes again. When no
//! collision lands inside the remaining time, everything moves to the end of
//! the frame.

use super::collector::find_collision_time;
use super::resolve::resolve_collisions;
use super::sprite::{Sprite, SpriteId};
use super::state::{FrameStats, World};

/// Advance the world by `dt`. Always succeeds.
pub fn process_frame(world: &mut World, dt: f32) -> bool {
    let settings = world.settings;
    let mut stats = FrameStats::default();
    let mut processed_time = 0.0f32;

    while processed_time < dt {
        let remaining = dt - processed_time;

        if stats.substeps >= settings.max_substeps {
            log::warn!(
                "Sub-step limit {} reached with {} of {} remaining, skipping collision checks",
                settings.max_substeps,
                remaining,
                dt
            );
            stats.hit_substep_cap = true;
            integrate(world.registry.as_mut_slice(), settings.advance_time(remaining));
            break;
        }
        stats.substeps += 1;

        stats.dropped_ties += find_earliest_collisions(world, remaining);

        match world.collisions.first().map(|c| c.time) {
            Some(time) => {
                integrate(world.registry.as_mut_slice(), settings.advance_time(time));
                stats.collisions_resolved += resolve_collisions(
                    world.registry.as_mut_slice(),
                    &world.collisions,
                    &mut world.resolved,
                );
                log::trace!(
                    "Resolved {} collisions at t={}",
                    world.collisions.len(),
                    processed_time + time
                );
                if stats.first_impact.is_none() {
                    stats.first_impact = Some(processed_time + time);
                }
                processed_time += time;
            }
            None => {
                integrate(world.registry.as_mut_slice(), settings.advance_time(remaining));
                processed_time = dt;
            }
        }

        world.candidates.clear();
        world.collisions.clear();
    }

    world.stats = stats;
    true
}

/// Fill `world.collisions` with the earliest group landing before `look_ahead`.
///
/// With `merge_scan_ties` the candidate buffer carries across every sprite's
/// scan, so equal-time impacts found from different sprites end up in one
/// group. Without it each scan starts empty and a later scan's group replaces
/// the current one when it is no later. Returns the number of dropped ties.
pub(crate) fn find_earliest_collisions(world: &mut World, look_ahead: f32) -> usize {
    let merge = world.settings.merge_scan_ties;
    let sprites = world.registry.as_slice();
    let mut dropped = 0;

    world.candidates.clear();
    world.collisions.clear();

    for index in 0..sprites.len() {
        if !merge {
            world.candidates.clear();
        }
        dropped += find_collision_time(
            sprites,
            SpriteId(index as u32),
            look_ahead,
            &mut world.candidates,
        );

        let Some(earliest) = world.candidates.first() else {
            continue;
        };
        if earliest.time >= 0.0 && earliest.time < look_ahead {
            let adopt = merge
                || world
                    .collisions
                    .first()
                    .is_none_or(|current| earliest.time <= current.time);
            if adopt {
                world.collisions.clear();
                world
                    .collisions
                    .extend(world.candidates.iter().copied());
            }
        }
    }

    dropped
}

fn integrate(sprites: &mut [Sprite], time: f32) {
    for sprite in sprites {
        sprite.advance(time);
    }
}

impl World {
    /// Advance every sprite by `dt`, resolving collisions along the way
    pub fn process_frame(&mut self, dt: f32) -> bool {
        process_frame(self, dt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use glam::Vec3;

    /// Two independent mover/wall pairs that both collide at t=2
    fn twin_lanes(settings: Settings) -> World {
        let mut world = World::with_settings(settings);
        world
            .add_sprites(&[
                Sprite::new(Vec3::ZERO, Vec3::ONE, Vec3::X),
                Sprite::fixed(Vec3::new(3.0, 0.0, 0.0), Vec3::ONE),
                Sprite::new(Vec3::new(0.0, 10.0, 0.0), Vec3::ONE, Vec3::X),
                Sprite::fixed(Vec3::new(3.0, 10.0, 0.0), Vec3::ONE),
            ])
            .unwrap();
        world
    }

    #[test]
    fn test_tick_bounce_off_static() {
        let mut world = World::new();
        let ids = world
            .add_sprites(&[
                Sprite::new(Vec3::ZERO, Vec3::ONE, Vec3::X),
                Sprite::fixed(Vec3::new(3.0, 0.0, 0.0), Vec3::ONE),
            ])
            .unwrap();

        assert!(world.process_frame(5.0));

        let stats = world.last_frame_stats();
        assert!((stats.first_impact.unwrap() - 2.0).abs() < 1e-5);
        assert_eq!(stats.collisions_resolved, 1);
        assert!((world[ids[0]].vel - Vec3::NEG_X).length() < 1e-6);
        // Two seconds in, three seconds back
        assert!((world[ids[0]].pos.x - (-1.0)).abs() < 1e-4);
        assert_eq!(world[ids[1]].pos, Vec3::new(3.0, 0.0, 0.0));
    }

    #[test]
    fn test_tick_no_premature_resolution() {
        let mut world = World::new();
        let ids = world
            .add_sprites(&[
                Sprite::new(Vec3::ZERO, Vec3::ONE, Vec3::X),
                Sprite::fixed(Vec3::new(3.0, 0.0, 0.0), Vec3::ONE),
            ])
            .unwrap();

        world.process_frame(1.5);
        assert!(world.last_frame_stats().first_impact.is_none());
        assert_eq!(world[ids[0]].vel, Vec3::X);
        assert!((world[ids[0]].pos.x - 1.5).abs() < 1e-5);

        // The rest of the approach happens next frame
        world.process_frame(1.0);
        assert!(world.last_frame_stats().first_impact.is_some());
        assert!(world[ids[0]].vel.x < 0.0);
    }

    #[test]
    fn test_tick_empty_world_and_zero_dt() {
        let mut world = World::new();
        assert!(world.process_frame(1.0));
        assert_eq!(world.last_frame_stats().substeps, 1);

        let mut world = twin_lanes(Settings::default());
        let before: Vec<Sprite> = world.sprites().to_vec();
        assert!(world.process_frame(0.0));
        assert_eq!(world.sprites(), before.as_slice());
        assert_eq!(world.last_frame_stats().substeps, 0);
    }

    #[test]
    fn test_cross_scan_ties_merge() {
        let mut world = twin_lanes(Settings::default());
        find_earliest_collisions(&mut world, 5.0);

        assert_eq!(world.collisions.len(), 2);
        assert_eq!(world.collisions[0].sprite_a, SpriteId(0));
        assert_eq!(world.collisions[1].sprite_a, SpriteId(2));
    }

    #[test]
    fn test_cross_scan_ties_isolated() {
        let settings = Settings {
            merge_scan_ties: false,
            ..Settings::default()
        };
        let mut world = twin_lanes(settings);
        find_earliest_collisions(&mut world, 5.0);

        // Only the last scan's group survives
        assert_eq!(world.collisions.len(), 1);
        assert_eq!(world.collisions[0].sprite_a, SpriteId(2));
    }

    #[test]
    fn test_isolated_scans_keep_earlier_winner() {
        let settings = Settings {
            merge_scan_ties: false,
            ..Settings::default()
        };
        let mut world = World::with_settings(settings);
        world
            .add_sprites(&[
                Sprite::new(Vec3::ZERO, Vec3::ONE, Vec3::X),
                Sprite::fixed(Vec3::new(2.0, 0.0, 0.0), Vec3::ONE),
                Sprite::new(Vec3::new(0.0, 10.0, 0.0), Vec3::ONE, Vec3::X),
                Sprite::fixed(Vec3::new(3.0, 10.0, 0.0), Vec3::ONE),
            ])
            .unwrap();
        find_earliest_collisions(&mut world, 5.0);

        assert_eq!(world.collisions.len(), 1);
        assert_eq!(world.collisions[0].sprite_a, SpriteId(0));
    }

    #[test]
    fn test_merged_lanes_bounce_in_one_substep() {
        let mut world = twin_lanes(Settings::default());
        world.process_frame(5.0);

        let stats = world.last_frame_stats();
        assert_eq!(stats.substeps, 2);
        assert_eq!(stats.collisions_resolved, 2);
        assert!(world.sprites()[0].vel.x < 0.0);
        assert!(world.sprites()[2].vel.x < 0.0);
    }

    #[test]
    fn test_isolated_lanes_resolve_last_scan_first() {
        let settings = Settings {
            merge_scan_ties: false,
            ..Settings::default()
        };
        let mut world = twin_lanes(settings);
        world.process_frame(5.0);

        assert!(world.sprites()[2].vel.x < 0.0);
        assert!(world.last_frame_stats().substeps >= 2);
    }

    #[test]
    fn test_substep_cap() {
        let settings = Settings {
            max_substeps: 1,
            ..Settings::default()
        };
        let mut world = twin_lanes(settings);
        assert!(world.process_frame(5.0));

        let stats = world.last_frame_stats();
        assert!(stats.hit_substep_cap);
        assert_eq!(stats.substeps, 1);
        // Bounced once, then carried blindly to the end of the frame
        assert!((world.sprites()[0].pos.x - (-1.0)).abs() < 1e-4);
    }
}
