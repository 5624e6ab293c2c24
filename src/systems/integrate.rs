//! Integration passes
//!
//! Each body is independent here, so with `parallel` the passes fan out
//! over rayon. Per-body arithmetic is identical either way.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::domain::Body;
use crate::spatial::BodyArena;

/// position += velocity, for every body
pub fn integrate_positions(bodies: &mut BodyArena<Body>) {
    #[cfg(feature = "parallel")]
    bodies.par_values_mut().for_each(Body::step_position);

    #[cfg(not(feature = "parallel"))]
    bodies.values_mut().for_each(Body::step_position);
}

/// velocity += acceleration, for every body
pub fn integrate_velocities(bodies: &mut BodyArena<Body>) {
    #[cfg(feature = "parallel")]
    bodies.par_values_mut().for_each(Body::step_velocity);

    #[cfg(not(feature = "parallel"))]
    bodies.values_mut().for_each(Body::step_velocity);
}
