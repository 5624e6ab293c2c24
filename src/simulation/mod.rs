//! PhysicsWorld - ball simulation state and the per-tick pipeline
//!
//! The world only orchestrates; the math lives in systems/:
//! - integrate.rs   - position and velocity passes
//! - collision/     - pair test, pair resolution, world bounds
//!
//! Tick order (load-bearing, see step/step.rs):
//! positions -> per-body (pairs, then bounds) -> velocities

use crate::core::{PhysicsError, Vec2};
use crate::domain::{Body, Color, ColorPicker, ImpulseDirection, PairSweep, WorldConfig};
use crate::spatial::{BodyArena, BodyHandle};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::World;
pub use perf_stats::PerfStats;
pub use render_extract::{BodySnapshot, RENDER_STRIDE};

use perf_timer::PerfTimer;

/// The simulation world
#[derive(Clone, Debug)]
pub struct PhysicsWorld {
    bodies: BodyArena<Body>,
    config: WorldConfig,
    colors: ColorPicker,

    // State
    frame: u64,

    // Render output, refilled by `extract_bodies`
    render_buffer: Vec<f64>,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl PhysicsWorld {
    /// Create a world with the given bounds and default settings.
    pub fn new(width: f64, height: f64) -> Result<Self, PhysicsError> {
        init::create_world(WorldConfig::new(width, height))
    }

    pub fn with_config(config: WorldConfig) -> Result<Self, PhysicsError> {
        init::create_world(config)
    }

    pub fn from_config_json(json: &str) -> Result<Self, PhysicsError> {
        init::create_world(WorldConfig::from_json(json)?)
    }

    pub fn config(&self) -> &WorldConfig { &self.config }

    pub fn width(&self) -> f64 { self.config.width }

    pub fn height(&self) -> f64 { self.config.height }

    pub fn frame(&self) -> u64 { self.frame }

    // === SETTINGS ===

    pub fn restitution(&self) -> f64 {
        settings::restitution(self)
    }

    pub fn set_restitution(&mut self, restitution: f64) -> Result<(), PhysicsError> {
        settings::set_restitution(self, restitution)
    }

    pub fn gravity(&self) -> Vec2 {
        settings::gravity(self)
    }

    /// Set the acceleration of every current body and of bodies created later
    pub fn set_gravity(&mut self, gravity: Vec2) -> Result<(), PhysicsError> {
        settings::set_gravity(self, gravity)
    }

    pub fn set_pair_sweep(&mut self, sweep: PairSweep) {
        settings::set_pair_sweep(self, sweep);
    }

    pub fn set_impulse_direction(&mut self, impulse: ImpulseDirection) {
        settings::set_impulse_direction(self, impulse);
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    // === BODY API ===

    /// Build a body for this world without inserting it.
    ///
    /// Without a color one is drawn from the palette. The body starts with
    /// the world's gravity as its acceleration.
    pub fn create_body(&mut self, position: Vec2, radius: f64, color: Option<Color>) -> Result<Body, PhysicsError> {
        commands::create_body(self, position, radius, color)
    }

    /// Append a body. No duplicate check.
    pub fn add_body(&mut self, body: Body) -> BodyHandle {
        commands::add_body(self, body)
    }

    /// `create_body` followed by `add_body`
    pub fn spawn_body(&mut self, position: Vec2, radius: f64, color: Option<Color>) -> Result<BodyHandle, PhysicsError> {
        commands::spawn_body(self, position, radius, color)
    }

    /// Overwrite a body's velocity. `Ok(false)` when the handle is stale.
    pub fn set_body_velocity(&mut self, handle: BodyHandle, velocity: Vec2) -> Result<bool, PhysicsError> {
        commands::set_body_velocity(self, handle, velocity)
    }

    /// Remove a body. `None` when the handle is stale or unknown.
    pub fn remove_body(&mut self, handle: BodyHandle) -> Option<Body> {
        commands::remove_body(self, handle)
    }

    /// Remove all bodies
    pub fn clear(&mut self) {
        commands::clear(self)
    }

    pub fn body(&self, handle: BodyHandle) -> Option<&Body> {
        self.bodies.get(handle)
    }

    pub fn body_mut(&mut self, handle: BodyHandle) -> Option<&mut Body> {
        self.bodies.get_mut(handle)
    }

    pub fn contains(&self, handle: BodyHandle) -> bool {
        self.bodies.contains(handle)
    }

    /// Live bodies in insertion order
    pub fn bodies(&self) -> impl Iterator<Item = (BodyHandle, &Body)> + '_ {
        self.bodies.iter()
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Advance the simulation by one tick
    pub fn step(&mut self) {
        step::step(self);
    }

    // === RENDER API ===

    /// Pack live bodies into the render buffer, `RENDER_STRIDE` floats each.
    /// Returns the number of bodies written.
    pub fn extract_bodies(&mut self) -> usize {
        render_extract::extract_bodies(self)
    }

    pub fn render_buffer(&self) -> &[f64] {
        &self.render_buffer
    }

    pub fn snapshot(&self) -> Vec<BodySnapshot> {
        render_extract::snapshot(self)
    }

    pub fn snapshot_json(&self) -> Result<String, PhysicsError> {
        render_extract::snapshot_json(self)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
