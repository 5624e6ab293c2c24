use serde::Serialize;

use crate::core::{PhysicsError, Vec2};

use super::color::Color;
use super::config::validate_finite;

/// A ball: a point-mass circle.
///
/// `position`, `velocity` and `acceleration` are plain fields the world (or
/// the host) may overwrite wholesale. Radius and mass are fixed at
/// construction so they stay positive.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Body {
    /// Center
    pub position: Vec2,
    /// Distance per tick
    pub velocity: Vec2,
    /// Added to velocity at the end of every tick
    pub acceleration: Vec2,
    radius: f64,
    mass: f64,
    pub color: Color,
}

impl Body {
    /// Create a body at rest with unit mass.
    pub fn new(position: Vec2, radius: f64, color: Color) -> Result<Self, PhysicsError> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(PhysicsError::InvalidRadius(radius));
        }
        let position = validate_finite("position", position)?;
        Ok(Self {
            position,
            velocity: Vec2::zero(),
            acceleration: Vec2::zero(),
            radius,
            mass: 1.0,
            color,
        })
    }

    pub fn with_mass(mut self, mass: f64) -> Result<Self, PhysicsError> {
        if !(mass.is_finite() && mass > 0.0) {
            return Err(PhysicsError::InvalidMass(mass));
        }
        self.mass = mass;
        Ok(self)
    }

    // Builders below do not validate; callers pass finite vectors.

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_acceleration(mut self, acceleration: Vec2) -> Self {
        self.acceleration = acceleration;
        self
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[inline]
    pub fn mass(&self) -> f64 {
        self.mass
    }

    #[inline]
    pub fn inverse_mass(&self) -> f64 {
        1.0 / self.mass
    }

    /// position += velocity
    #[inline]
    pub fn step_position(&mut self) {
        self.position = self.position + self.velocity;
    }

    /// velocity += acceleration
    #[inline]
    pub fn step_velocity(&mut self) {
        self.velocity = self.velocity + self.acceleration;
    }

    /// Apply impulse at center of mass
    pub fn apply_impulse(&mut self, impulse: Vec2) {
        self.velocity = self.velocity + impulse * self.inverse_mass();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_body_defaults() {
        let body = Body::new(Vec2::new(3.0, 4.0), 10.0, Color(0xFF0000)).unwrap();
        assert_eq!(body.position, Vec2::new(3.0, 4.0));
        assert_eq!(body.velocity, Vec2::zero());
        assert_eq!(body.acceleration, Vec2::zero());
        assert_eq!(body.mass(), 1.0);
        assert_eq!(body.radius(), 10.0);
    }

    #[test]
    fn rejects_non_positive_radius_and_mass() {
        let at = Vec2::zero();
        assert!(matches!(Body::new(at, 0.0, Color(0)), Err(PhysicsError::InvalidRadius(_))));
        assert!(matches!(Body::new(at, -1.0, Color(0)), Err(PhysicsError::InvalidRadius(_))));
        assert!(matches!(Body::new(at, f64::NAN, Color(0)), Err(PhysicsError::InvalidRadius(_))));

        let body = Body::new(at, 1.0, Color(0)).unwrap();
        assert!(matches!(body.clone().with_mass(0.0), Err(PhysicsError::InvalidMass(_))));
        assert!(matches!(body.clone().with_mass(f64::INFINITY), Err(PhysicsError::InvalidMass(_))));
        assert_eq!(body.with_mass(4.0).unwrap().inverse_mass(), 0.25);
    }

    #[test]
    fn rejects_non_finite_position() {
        for bad in [Vec2::new(f64::NAN, 1.0), Vec2::new(0.0, f64::NEG_INFINITY)] {
            assert!(matches!(
                Body::new(bad, 10.0, Color(0)),
                Err(PhysicsError::NonFinite { what: "position", .. })
            ));
        }
    }

    #[test]
    fn integration_steps_are_separate() {
        let mut body = Body::new(Vec2::zero(), 1.0, Color(0))
            .unwrap()
            .with_velocity(Vec2::new(2.0, -1.0))
            .with_acceleration(Vec2::new(0.0, 0.5));

        body.step_position();
        assert_eq!(body.position, Vec2::new(2.0, -1.0));
        assert_eq!(body.velocity, Vec2::new(2.0, -1.0));

        body.step_velocity();
        assert_eq!(body.velocity, Vec2::new(2.0, -0.5));
    }

    #[test]
    fn impulse_scales_by_inverse_mass() {
        let mut body = Body::new(Vec2::zero(), 1.0, Color(0)).unwrap().with_mass(2.0).unwrap();
        body.apply_impulse(Vec2::new(4.0, 0.0));
        assert_eq!(body.velocity, Vec2::new(2.0, 0.0));
    }
}
