use crate::core::{PhysicsError, Vec2};
use crate::domain::config::validate_finite;
use crate::domain::{Body, Color};
use crate::spatial::BodyHandle;

use super::PhysicsWorld;

pub(super) fn create_body(
    world: &mut PhysicsWorld,
    position: Vec2,
    radius: f64,
    color: Option<Color>,
) -> Result<Body, PhysicsError> {
    let color = color.unwrap_or_else(|| world.colors.next_color());
    let body = Body::new(position, radius, color)?.with_acceleration(world.config.gravity);
    Ok(body)
}

pub(super) fn add_body(world: &mut PhysicsWorld, body: Body) -> BodyHandle {
    world.bodies.insert(body)
}

pub(super) fn spawn_body(
    world: &mut PhysicsWorld,
    position: Vec2,
    radius: f64,
    color: Option<Color>,
) -> Result<BodyHandle, PhysicsError> {
    let body = create_body(world, position, radius, color)?;
    Ok(add_body(world, body))
}

pub(super) fn set_body_velocity(
    world: &mut PhysicsWorld,
    handle: BodyHandle,
    velocity: Vec2,
) -> Result<bool, PhysicsError> {
    let velocity = validate_finite("velocity", velocity)?;
    Ok(match world.bodies.get_mut(handle) {
        Some(body) => {
            body.velocity = velocity;
            true
        }
        None => false,
    })
}

pub(super) fn remove_body(world: &mut PhysicsWorld, handle: BodyHandle) -> Option<Body> {
    let removed = world.bodies.remove(handle);
    if removed.is_none() {
        console_warn!(
            "remove_body: no body for handle {}/{}",
            handle.index(),
            handle.generation()
        );
    }
    removed
}

pub(super) fn clear(world: &mut PhysicsWorld) {
    world.bodies.clear();
    world.render_buffer.clear();
    world.frame = 0;
}
