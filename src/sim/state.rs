//! Simulation world
//!
//! The world owns the registered sprites plus the scratch buffers the stepper
//! reuses every frame, so a frame never allocates and independent worlds never
//! share state.

use std::ops::{Index, IndexMut};

use super::collector::CollisionSet;
use super::registry::SpriteRegistry;
use super::resolve::ResolvedSet;
use super::sprite::{Sprite, SpriteId};
use crate::error::RegistryError;
use crate::settings::Settings;

/// Counters from the most recent frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameStats {
    /// Loop iterations, including the final collision-free advance
    pub substeps: u32,
    /// Velocity updates applied by collision response
    pub collisions_resolved: usize,
    /// Tied collisions that did not fit in the buffer
    pub dropped_ties: usize,
    /// Frame time at which the first collision group was resolved
    pub first_impact: Option<f32>,
    /// The sub-step cap cut the frame short
    pub hit_substep_cap: bool,
}

#[derive(Debug, Default)]
pub struct World {
    pub(crate) registry: SpriteRegistry,
    pub(crate) settings: Settings,
    /// Earliest collisions found so far in the current sub-step
    pub(crate) candidates: CollisionSet,
    /// Group chosen for response in the current sub-step
    pub(crate) collisions: CollisionSet,
    pub(crate) resolved: ResolvedSet,
    pub(crate) stats: FrameStats,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn set_settings(&mut self, settings: Settings) {
        self.settings = settings;
    }

    /// Register sprites; all or nothing
    pub fn add_sprites(&mut self, sprites: &[Sprite]) -> Result<Vec<SpriteId>, RegistryError> {
        self.registry.add(sprites)
    }

    /// Remove every sprite and release storage. Safe to call when empty.
    pub fn remove_sprites(&mut self) {
        self.registry.clear();
        self.candidates.clear();
        self.collisions.clear();
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    pub fn sprite(&self, id: SpriteId) -> Option<&Sprite> {
        self.registry.get(id)
    }

    pub fn sprite_mut(&mut self, id: SpriteId) -> Option<&mut Sprite> {
        self.registry.get_mut(id)
    }

    pub fn sprites(&self) -> &[Sprite] {
        self.registry.as_slice()
    }

    pub fn sprites_mut(&mut self) -> &mut [Sprite] {
        self.registry.as_mut_slice()
    }

    pub fn ids(&self) -> impl Iterator<Item = SpriteId> + '_ {
        self.registry.ids()
    }

    pub fn last_frame_stats(&self) -> &FrameStats {
        &self.stats
    }
}

impl Index<SpriteId> for World {
    type Output = Sprite;

    fn index(&self, id: SpriteId) -> &Sprite {
        &self.registry.as_slice()[id.index()]
    }
}

impl IndexMut<SpriteId> for World {
    fn index_mut(&mut self, id: SpriteId) -> &mut Sprite {
        &mut self.registry.as_mut_slice()[id.index()]
    }
}
