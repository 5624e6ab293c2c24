use serde::Serialize;

use crate::core::PhysicsError;
use crate::domain::Color;

use super::PhysicsWorld;

/// Floats per body in the render buffer: `[x, y, radius, color]`
pub const RENDER_STRIDE: usize = 4;

/// Read-only view of one body, as handed to the renderer
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BodySnapshot {
    pub index: u32,
    pub generation: u32,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub color: Color,
}

/// Refill the render buffer in insertion order; returns the body count.
///
/// The color is the packed `0xRRGGBB` value widened to f64 (exact).
pub(super) fn extract_bodies(world: &mut PhysicsWorld) -> usize {
    let buffer = &mut world.render_buffer;
    buffer.clear();
    buffer.reserve(world.bodies.len() * RENDER_STRIDE);

    for body in world.bodies.values() {
        buffer.extend_from_slice(&[
            body.position.x,
            body.position.y,
            body.radius(),
            f64::from(body.color.0),
        ]);
    }
    buffer.len() / RENDER_STRIDE
}

pub(super) fn snapshot(world: &PhysicsWorld) -> Vec<BodySnapshot> {
    world
        .bodies
        .iter()
        .map(|(handle, body)| BodySnapshot {
            index: handle.index(),
            generation: handle.generation(),
            x: body.position.x,
            y: body.position.y,
            radius: body.radius(),
            color: body.color,
        })
        .collect()
}

pub(super) fn snapshot_json(world: &PhysicsWorld) -> Result<String, PhysicsError> {
    Ok(serde_json::to_string(&snapshot(world))?)
}
