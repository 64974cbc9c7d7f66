//! Error types
//!
//! Only two things can go wrong at runtime: the registry refuses sprites it
//! has no room for, and a scene file fails to load.

use thiserror::Error;

/// Errors raised when adding sprites to a world
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("cannot add {requested} sprites to {current} registered (maximum {max})")]
    CapacityExceeded {
        requested: usize,
        current: usize,
        max: usize,
    },
    #[error("failed to allocate sprite storage")]
    Allocation,
}

/// Errors raised while loading a scene file
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("failed to read scene: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid scene JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Registry(#[from] RegistryError),
}
