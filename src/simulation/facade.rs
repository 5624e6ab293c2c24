use wasm_bindgen::prelude::*;

use crate::core::{PhysicsError, Vec2};
use crate::domain::Color;
use crate::interaction::{BallCreation, DEFAULT_BALL_RADIUS};
use crate::spatial::BodyHandle;

use super::perf_stats::PerfStats;
use super::PhysicsWorld;

fn to_js(err: PhysicsError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn parse_color(color: Option<String>) -> Result<Option<Color>, JsValue> {
    color.as_deref().map(Color::from_hex).transpose().map_err(to_js)
}

/// JS-facing world: the physics core plus the pointer-driven ball creation
#[wasm_bindgen]
pub struct World {
    core: PhysicsWorld,
    creation: BallCreation,
}

#[wasm_bindgen]
impl World {
    /// Create a new world with given dimensions
    #[wasm_bindgen(constructor)]
    pub fn new(width: f64, height: f64) -> Result<World, JsValue> {
        Ok(Self {
            core: PhysicsWorld::new(width, height).map_err(to_js)?,
            creation: BallCreation::Idle,
        })
    }

    #[wasm_bindgen(js_name = fromConfigJson)]
    pub fn from_config_json(json: &str) -> Result<World, JsValue> {
        Ok(Self {
            core: PhysicsWorld::from_config_json(json).map_err(to_js)?,
            creation: BallCreation::Idle,
        })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f64 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f64 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> usize { self.core.body_count() }

    #[wasm_bindgen(getter)]
    pub fn restitution(&self) -> f64 { self.core.restitution() }

    pub fn set_restitution(&mut self, restitution: f64) -> Result<(), JsValue> {
        self.core.set_restitution(restitution).map_err(to_js)
    }

    pub fn set_gravity(&mut self, x: f64, y: f64) -> Result<(), JsValue> {
        self.core.set_gravity(Vec2::new(x, y)).map_err(to_js)
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    // === BODY API ===

    /// Spawn a ball at rest. `color` is `#RRGGBB`; omitted picks from the palette.
    pub fn spawn_body(&mut self, x: f64, y: f64, radius: f64, color: Option<String>) -> Result<BodyHandle, JsValue> {
        let color = parse_color(color)?;
        self.core
            .spawn_body(Vec2::new(x, y), radius, color)
            .map_err(to_js)
    }

    /// Returns `false` for a stale handle; throws on a non-finite velocity.
    pub fn set_body_velocity(&mut self, handle: &BodyHandle, vx: f64, vy: f64) -> Result<bool, JsValue> {
        self.core
            .set_body_velocity(*handle, Vec2::new(vx, vy))
            .map_err(to_js)
    }

    /// Remove a body. Returns `false` if it was already gone.
    pub fn remove_body(&mut self, handle: &BodyHandle) -> bool {
        self.core.remove_body(*handle).is_some()
    }

    pub fn body_x(&self, handle: &BodyHandle) -> Option<f64> {
        self.core.body(*handle).map(|b| b.position.x)
    }

    pub fn body_y(&self, handle: &BodyHandle) -> Option<f64> {
        self.core.body(*handle).map(|b| b.position.y)
    }

    pub fn body_radius(&self, handle: &BodyHandle) -> Option<f64> {
        self.core.body(*handle).map(|b| b.radius())
    }

    pub fn body_color(&self, handle: &BodyHandle) -> Option<String> {
        self.core.body(*handle).map(|b| b.color.to_css())
    }

    /// Remove all bodies and abandon any ball in progress
    pub fn clear(&mut self) {
        self.creation = BallCreation::Idle;
        self.core.clear();
    }

    /// Step the simulation forward one tick
    pub fn step(&mut self) {
        self.core.step();
    }

    // === POINTER BALL CREATION ===

    /// Pointer pressed: start a ball at (x, y)
    pub fn begin_ball(&mut self, x: f64, y: f64) -> Result<(), JsValue> {
        let body = self
            .core
            .create_body(Vec2::new(x, y), DEFAULT_BALL_RADIUS, None)
            .map_err(to_js)?;
        self.creation.begin(body);
        Ok(())
    }

    /// Pointer moved while creating
    pub fn aim_ball(&mut self, x: f64, y: f64) -> bool {
        self.creation.aim(Vec2::new(x, y))
    }

    /// Pointer released: launch the pending ball into the world
    pub fn release_ball(&mut self) -> Option<BodyHandle> {
        let body = self.creation.release()?;
        Some(self.core.add_body(body))
    }

    pub fn cancel_ball(&mut self) {
        self.creation.cancel();
    }

    #[wasm_bindgen(getter)]
    pub fn is_creating(&self) -> bool {
        self.creation.is_creating()
    }

    /// `[start_x, start_y, target_x, target_y]` of the aim line, if creating
    pub fn aim_line(&self) -> Option<Vec<f64>> {
        self.creation
            .aim_line()
            .map(|(start, target)| vec![start.x, start.y, target.x, target.y])
    }

    pub fn pending_color(&self) -> Option<String> {
        self.creation.pending().map(|b| b.color.to_css())
    }

    // === RENDER API ===

    /// Pack bodies into the render buffer; returns the body count
    pub fn extract_bodies(&mut self) -> usize {
        self.core.extract_bodies()
    }

    /// Get pointer to the render buffer (`[x, y, radius, color]` per body)
    pub fn render_buffer_ptr(&self) -> *const f64 {
        self.core.render_buffer().as_ptr()
    }

    /// Render buffer length in f64 elements
    pub fn render_buffer_len(&self) -> usize {
        self.core.render_buffer().len()
    }

    pub fn snapshot_json(&self) -> Result<String, JsValue> {
        self.core.snapshot_json().map_err(to_js)
    }
}
