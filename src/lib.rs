//! Ballpit Engine - 2D ball physics for the canvas toy, compiled to WASM
//!
//! Architecture:
//! - core/         - Vec2, errors, console logging
//! - domain/       - Body, colors, world configuration
//! - spatial/      - Generational body storage
//! - systems/      - Integration and collision passes
//! - simulation/   - PhysicsWorld orchestration + JS facade
//! - interaction/  - Pointer-driven ball creation

// Logging macros (must be first for macro scope!)
#[macro_use]
pub mod core;
pub mod domain;
pub mod spatial;
pub mod systems;
pub mod simulation;
pub mod interaction;

use wasm_bindgen::prelude::*;

// Thread pool initialization for the parallel integration passes
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("Ballpit engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[wasm_bindgen]
pub fn default_restitution() -> f64 {
    domain::DEFAULT_RESTITUTION
}

// Re-export main types
pub use crate::core::{PhysicsError, Vec2};
pub use domain::{Body, Color, ImpulseDirection, PairSweep, WorldConfig};
pub use interaction::BallCreation;
pub use simulation::{BodySnapshot, PerfStats, PhysicsWorld, World};
pub use spatial::BodyHandle;
