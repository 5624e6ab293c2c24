use crate::systems::collision::{resolve_collisions, Bounds, ContactParams};
use crate::systems::integrate::{integrate_positions, integrate_velocities};

use super::{PerfTimer, PhysicsWorld};

pub(super) fn step(world: &mut PhysicsWorld) {
    let mut clock = if world.perf_enabled {
        world.perf_stats.reset();
        world.perf_stats.body_count = u32::try_from(world.bodies.len()).unwrap_or(u32::MAX);
        Some(PerfTimer::start())
    } else {
        None
    };

    // === PASS 1: POSITIONS ===
    // Acceleration is not applied here; it lands in pass 3.
    integrate_positions(&mut world.bodies);
    if let Some(clock) = clock.as_mut() {
        world.perf_stats.integrate_ms += clock.lap();
    }

    // === PASS 2: COLLISIONS ===
    // Each body: every overlapping partner first, then its own bounds.
    let bounds = Bounds { width: world.config.width, height: world.config.height };
    let params = ContactParams {
        restitution: world.config.restitution,
        impulse: world.config.impulse,
    };
    let counters = resolve_collisions(&mut world.bodies, bounds, params, world.config.pair_sweep);
    if let Some(clock) = clock.as_mut() {
        world.perf_stats.collide_ms = clock.lap();
        world.perf_stats.pairs_tested = counters.pairs_tested;
        world.perf_stats.contacts = counters.contacts;
        world.perf_stats.impulses = counters.impulses;
        world.perf_stats.boundary_hits = counters.boundary_hits;
    }

    // === PASS 3: VELOCITIES ===
    integrate_velocities(&mut world.bodies);
    if let Some(clock) = clock.as_mut() {
        world.perf_stats.integrate_ms += clock.lap();
    }

    world.frame += 1;

    if let Some(clock) = clock {
        world.perf_stats.step_ms = clock.total_ms();
    }
}
