use crate::core::{PhysicsError, Vec2};
use crate::domain::config::{validate_finite, validate_restitution};
use crate::domain::{ImpulseDirection, PairSweep};

use super::perf_stats::PerfStats;
use super::PhysicsWorld;

pub(super) fn enable_perf_metrics(world: &mut PhysicsWorld, enabled: bool) {
    world.perf_enabled = enabled;
    if !enabled {
        world.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(world: &PhysicsWorld) -> PerfStats {
    world.perf_stats.clone()
}

pub(super) fn restitution(world: &PhysicsWorld) -> f64 {
    world.config.restitution
}

pub(super) fn set_restitution(world: &mut PhysicsWorld, restitution: f64) -> Result<(), PhysicsError> {
    world.config.restitution = validate_restitution(restitution)?;
    Ok(())
}

pub(super) fn gravity(world: &PhysicsWorld) -> Vec2 {
    world.config.gravity
}

pub(super) fn set_gravity(world: &mut PhysicsWorld, gravity: Vec2) -> Result<(), PhysicsError> {
    let gravity = validate_finite("gravity", gravity)?;
    world.config.gravity = gravity;
    for body in world.bodies.values_mut() {
        body.acceleration = gravity;
    }
    Ok(())
}

pub(super) fn set_pair_sweep(world: &mut PhysicsWorld, sweep: PairSweep) {
    world.config.pair_sweep = sweep;
}

pub(super) fn set_impulse_direction(world: &mut PhysicsWorld, impulse: ImpulseDirection) {
    world.config.impulse = impulse;
}
