//! Collision simulation module
//!
//! All physics lives here. Single-threaded and allocation free per frame:
//! - Sprites live in a bounded registry owned by the `World`
//! - Scratch buffers are fixed capacity and reused across frames
//! - Brute-force all-pairs testing (no broad phase)

pub mod collector;
pub mod collision;
pub mod registry;
pub mod resolve;
pub mod sprite;
pub mod state;
pub mod tick;

pub use collector::{CollisionSet, find_collision_time};
pub use collision::{Collision, Face, Impact, intersection_time, overlaps_on_axis, reflect_velocity};
pub use registry::SpriteRegistry;
pub use resolve::{ResolvedSet, bounce_velocity, resolve_collisions};
pub use sprite::{Sprite, SpriteId};
pub use state::{FrameStats, World};
pub use tick::process_frame;
