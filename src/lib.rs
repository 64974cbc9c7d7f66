//! Sprite Collider - swept collision detection and response for box sprites
//!
//! Core modules:
//! - `sim`: Simulation world, time-of-impact solver, collision resolution and the frame stepper
//! - `settings`: Tunable simulation parameters (JSON loadable)
//! - `error`: Error types for registry and scene loading

pub mod error;
pub mod settings;
pub mod sim;

pub use error::{RegistryError, SceneError};
pub use settings::{Scene, Settings};
pub use sim::{Collision, Face, FrameStats, Sprite, SpriteId, World};

/// Simulation capacity constants
pub mod consts {
    /// Maximum number of sprites a world can hold
    pub const SPRITES_MAX: usize = 1000;
    /// Maximum number of simultaneous (tied) collisions resolved per sub-step
    pub const COLLISIONS_MAX: usize = 20;
    /// Time backed off when advancing to an impact, so boxes stop just short of touching
    pub const CONTACT_EPSILON: f32 = 0.000_000_1;
    /// Maximum sub-steps per frame before the remaining time is integrated blindly
    pub const MAX_SUBSTEPS: u32 = 4096;
}
