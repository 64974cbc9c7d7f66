//! Simulation settings and scene files
//!
//! Settings are plain data with sensible defaults; scenes bundle settings with
//! an initial sprite population and load from JSON.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{CONTACT_EPSILON, MAX_SUBSTEPS};
use crate::error::SceneError;
use crate::sim::{Sprite, World};

/// Tunable simulation parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Time subtracted from every advance so boxes stop just short of contact
    pub contact_epsilon: f32,
    /// Sub-step cap per frame (guards against zero-length sub-steps looping forever)
    pub max_substeps: u32,
    /// Keep one candidate set for the whole sub-step so equal-time hits found
    /// while scanning different sprites are resolved together
    pub merge_scan_ties: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            contact_epsilon: CONTACT_EPSILON,
            max_substeps: MAX_SUBSTEPS,
            merge_scan_ties: true,
        }
    }
}

impl Settings {
    /// Time to advance by when `time` is available, never negative
    #[inline]
    pub fn advance_time(&self, time: f32) -> f32 {
        (time - self.contact_epsilon).max(0.0)
    }

    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// A serialized starting population plus the settings to simulate it with
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scene {
    #[serde(default)]
    pub settings: Settings,
    pub sprites: Vec<Sprite>,
}

impl Scene {
    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a scene from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SceneError> {
        let json = fs::read_to_string(path.as_ref())?;
        let scene = Self::from_json(&json)?;
        log::info!(
            "Loaded scene {} ({} sprites)",
            path.as_ref().display(),
            scene.sprites.len()
        );
        Ok(scene)
    }

    pub fn to_json(&self) -> Result<String, SceneError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Build a world populated with this scene's sprites
    pub fn into_world(self) -> Result<World, SceneError> {
        let mut world = World::with_settings(self.settings);
        world.add_sprites(&self.sprites)?;
        Ok(world)
    }
}
