//! Sprite Collider demo runner
//!
//! Loads a scene file, steps it for a number of frames and prints the final
//! sprite states as JSON.
//!
//! Usage: `sprite-collider <scene.json> [frames] [dt]`

use std::process::ExitCode;

use sprite_collider::{Scene, SceneError};

const DEFAULT_FRAMES: u32 = 60;
const DEFAULT_DT: f32 = 1.0 / 60.0;

fn run(path: &str, frames: u32, dt: f32) -> Result<(), SceneError> {
    let mut world = Scene::load(path)?.into_world()?;
    log::info!("Running {} frames at dt={}", frames, dt);

    let mut collisions = 0;
    for _ in 0..frames {
        world.process_frame(dt);
        let stats = world.last_frame_stats();
        collisions += stats.collisions_resolved;
        if stats.dropped_ties > 0 {
            log::warn!("Dropped {} simultaneous collisions", stats.dropped_ties);
        }
    }
    log::info!("Resolved {} collisions", collisions);

    let scene = Scene {
        settings: *world.settings(),
        sprites: world.sprites().to_vec(),
    };
    println!("{}", scene.to_json()?);
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let Some(path) = args.get(1) else {
        eprintln!("usage: {} <scene.json> [frames] [dt]", args[0]);
        return ExitCode::FAILURE;
    };
    let frames = args
        .get(2)
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_FRAMES);
    let dt = args
        .get(3)
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_DT);

    match run(path, frames, dt) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() -> ExitCode {
    // No demo runner on the web, the library is driven by the host page
    ExitCode::SUCCESS
}
