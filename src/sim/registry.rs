//! Bounded sprite registry
//!
//! Holds every sprite that takes part in collision tests, in insertion order.
//! Storage for the full capacity is reserved on the first add so frames never
//! allocate, and released again when the registry is cleared.

use crate::consts::SPRITES_MAX;
use crate::error::RegistryError;

use super::sprite::{Sprite, SpriteId};

#[derive(Debug, Clone, Default)]
pub struct SpriteRegistry {
    sprites: Vec<Sprite>,
}

impl SpriteRegistry {
    pub fn new() -> Self {
        Self {
            sprites: Vec::new(),
        }
    }

    /// Append sprites, returning their handles in order.
    ///
    /// Fails without touching the registry if the total would exceed
    /// [`SPRITES_MAX`] or the backing storage cannot be reserved.
    pub fn add(&mut self, sprites: &[Sprite]) -> Result<Vec<SpriteId>, RegistryError> {
        let current = self.sprites.len();
        if current + sprites.len() > SPRITES_MAX {
            return Err(RegistryError::CapacityExceeded {
                requested: sprites.len(),
                current,
                max: SPRITES_MAX,
            });
        }
        if self.sprites.capacity() < SPRITES_MAX {
            self.sprites
                .try_reserve_exact(SPRITES_MAX - current)
                .map_err(|_| RegistryError::Allocation)?;
        }

        self.sprites.extend_from_slice(sprites);
        log::info!(
            "Registered {} sprites ({} total)",
            sprites.len(),
            self.sprites.len()
        );
        Ok((current..self.sprites.len())
            .map(|i| SpriteId(i as u32))
            .collect())
    }

    /// Drop every sprite and release the backing storage. Safe when empty.
    pub fn clear(&mut self) {
        if !self.sprites.is_empty() {
            log::info!("Removed {} sprites", self.sprites.len());
        }
        self.sprites = Vec::new();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    /// Reserved storage, in sprites
    pub fn capacity(&self) -> usize {
        self.sprites.capacity()
    }

    #[inline]
    pub fn get(&self, id: SpriteId) -> Option<&Sprite> {
        self.sprites.get(id.index())
    }

    #[inline]
    pub fn get_mut(&mut self, id: SpriteId) -> Option<&mut Sprite> {
        self.sprites.get_mut(id.index())
    }

    #[inline]
    pub fn as_slice(&self) -> &[Sprite] {
        &self.sprites
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [Sprite] {
        &mut self.sprites
    }

    /// Handles of every registered sprite, in insertion order
    pub fn ids(&self) -> impl Iterator<Item = SpriteId> + '_ {
        (0..self.sprites.len()).map(|i| SpriteId(i as u32))
    }
}
