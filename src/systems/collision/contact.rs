use crate::core::Vec2;
use crate::domain::{Body, ImpulseDirection};

/// Separation axis used when two centers coincide exactly
const COINCIDENT_AXIS: Vec2 = Vec2::new(1.0, 0.0);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContactParams {
    pub restitution: f64,
    pub impulse: ImpulseDirection,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactOutcome {
    /// Already moving apart along the normal: only pushed out of overlap
    Separating,
    /// Pushed apart and an impulse exchanged
    Impulse,
}

/// Overlap test. A body never collides with itself; touching counts.
pub fn is_colliding(a: &Body, b: &Body) -> bool {
    if std::ptr::eq(a, b) {
        return false;
    }
    a.position.distance(b.position) <= a.radius() + b.radius()
}

/// Resolve an overlapping pair: positional correction, then impulse.
///
/// The normal points from `b` toward `a`. Bodies sharing a center are split
/// along +x (`a` toward +x) with the full radius sum as penetration.
pub fn collide(a: &mut Body, b: &mut Body, params: ContactParams) -> ContactOutcome {
    let delta = a.position - b.position;
    let d = delta.length();
    let range = a.radius() + b.radius();

    // Minimum translation distance, pointing from b toward a
    let (normal, mtd) = if d > 0.0 {
        (delta.scale(1.0 / d), delta.scale((range - d) / d))
    } else {
        (COINCIDENT_AXIS, COINCIDENT_AXIS.scale(range))
    };

    let im_a = a.inverse_mass();
    let im_b = b.inverse_mass();
    let im_sum = im_a + im_b;

    // Heavier bodies move less
    a.position = a.position + mtd * (im_a / im_sum);
    b.position = b.position - mtd * (im_b / im_sum);

    let vn = (a.velocity - b.velocity).dot(normal);
    if vn > 0.0 {
        return ContactOutcome::Separating;
    }

    let j = -(1.0 + params.restitution) * vn / im_sum;
    let impulse = match params.impulse {
        ImpulseDirection::Normal => normal * j,
        ImpulseDirection::Penetration => mtd * j,
    };

    a.velocity = a.velocity + impulse * im_a;
    b.velocity = b.velocity - impulse * im_b;
    ContactOutcome::Impulse
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Color;

    const EPS: f64 = 1e-9;

    fn ball(x: f64, y: f64, radius: f64, vx: f64, vy: f64) -> Body {
        Body::new(Vec2::new(x, y), radius, Color(0))
            .unwrap()
            .with_velocity(Vec2::new(vx, vy))
    }

    fn elastic() -> ContactParams {
        ContactParams { restitution: 1.0, impulse: ImpulseDirection::Normal }
    }

    fn close(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < EPS
    }

    #[test]
    fn detection_is_symmetric_and_inclusive() {
        let a = ball(0.0, 0.0, 10.0, 0.0, 0.0);
        let touching = ball(20.0, 0.0, 10.0, 0.0, 0.0);
        let apart = ball(20.5, 0.0, 10.0, 0.0, 0.0);

        assert!(is_colliding(&a, &touching));
        assert!(is_colliding(&touching, &a));
        assert!(!is_colliding(&a, &apart));
        assert!(!is_colliding(&apart, &a));
        assert!(!is_colliding(&a, &a));
    }

    #[test]
    fn identical_copies_are_distinct_bodies() {
        let a = ball(5.0, 5.0, 1.0, 0.0, 0.0);
        let b = a.clone();
        assert!(is_colliding(&a, &b));
    }

    #[test]
    fn head_on_equal_mass_swaps_velocities() {
        let mut a = ball(0.0, 0.0, 10.0, 1.0, 0.0);
        let mut b = ball(19.0, 0.0, 10.0, -1.0, 0.0);

        assert_eq!(collide(&mut a, &mut b, elastic()), ContactOutcome::Impulse);
        assert!(close(a.velocity, Vec2::new(-1.0, 0.0)));
        assert!(close(b.velocity, Vec2::new(1.0, 0.0)));
        // Overlap of 1 split evenly
        assert!(close(a.position, Vec2::new(-0.5, 0.0)));
        assert!(close(b.position, Vec2::new(19.5, 0.0)));
    }

    #[test]
    fn elastic_exchange_along_oblique_normal() {
        // Deep overlap (4) along a diagonal, with tangential motion.
        let mut a = ball(0.0, 0.0, 5.0, 2.0, 1.0);
        let mut b = ball(4.0, 4.0, 5.0, -1.0, 0.5);
        let n = Vec2::new(-1.0, -1.0).normalized();

        let (va, vb) = (a.velocity, b.velocity);
        collide(&mut a, &mut b, elastic());

        // Normal components swap, tangential components are untouched.
        assert!((a.velocity.dot(n) - vb.dot(n)).abs() < EPS);
        assert!((b.velocity.dot(n) - va.dot(n)).abs() < EPS);
        let t = Vec2::new(-n.y, n.x);
        assert!((a.velocity.dot(t) - va.dot(t)).abs() < EPS);
        assert!((b.velocity.dot(t) - vb.dot(t)).abs() < EPS);
        // Momentum conserved
        assert!(close(a.velocity + b.velocity, va + vb));
    }

    #[test]
    fn penetration_impulse_scales_with_overlap() {
        // Overlap of 4 along x: literal impulse is 4x the unit-normal one.
        let params = ContactParams { restitution: 1.0, impulse: ImpulseDirection::Penetration };
        let mut a = ball(0.0, 0.0, 10.0, 1.0, 0.0);
        let mut b = ball(16.0, 0.0, 10.0, -1.0, 0.0);

        collide(&mut a, &mut b, params);
        // vn = -2, j = 2, mtd = (-4, 0): impulse (-8, 0)
        assert!(close(a.velocity, Vec2::new(-7.0, 0.0)));
        assert!(close(b.velocity, Vec2::new(7.0, 0.0)));
    }

    #[test]
    fn separating_pair_only_gets_positional_correction() {
        let mut a = ball(0.0, 0.0, 10.0, -1.0, 0.0);
        let mut b = ball(18.0, 0.0, 10.0, 1.0, 0.0);

        assert_eq!(collide(&mut a, &mut b, elastic()), ContactOutcome::Separating);
        assert_eq!(a.velocity, Vec2::new(-1.0, 0.0));
        assert_eq!(b.velocity, Vec2::new(1.0, 0.0));
        assert!((a.position.distance(b.position) - 20.0).abs() < EPS);
    }

    #[test]
    fn resolved_pair_is_idempotent() {
        let mut a = ball(0.0, 0.0, 10.0, 1.0, 0.0);
        let mut b = ball(19.0, 0.0, 10.0, -1.0, 0.0);
        collide(&mut a, &mut b, elastic());
        let (va, vb) = (a.velocity, b.velocity);

        // Now exactly touching and separating: a second pass changes nothing.
        assert!(is_colliding(&a, &b));
        assert_eq!(collide(&mut a, &mut b, elastic()), ContactOutcome::Separating);
        assert_eq!(a.velocity, va);
        assert_eq!(b.velocity, vb);
        assert!(a.velocity.is_finite() && b.velocity.is_finite());
    }

    #[test]
    fn heavier_body_moves_less() {
        let mut light = ball(0.0, 0.0, 10.0, 0.0, 0.0);
        let mut heavy = ball(17.0, 0.0, 10.0, 0.0, 0.0).with_mass(2.0).unwrap();

        collide(&mut light, &mut heavy, elastic());
        // invA/(invA+invB) = 2/3 of the overlap of 3
        assert!(close(light.position, Vec2::new(-2.0, 0.0)));
        assert!(close(heavy.position, Vec2::new(18.0, 0.0)));
    }

    #[test]
    fn coincident_centers_split_along_x() {
        let mut a = ball(50.0, 50.0, 10.0, 0.0, 0.0);
        let mut b = ball(50.0, 50.0, 10.0, 0.0, 0.0);

        collide(&mut a, &mut b, elastic());
        assert!(close(a.position, Vec2::new(60.0, 50.0)));
        assert!(close(b.position, Vec2::new(40.0, 50.0)));
        assert!(a.velocity.is_finite() && b.velocity.is_finite());
    }

    #[test]
    fn inelastic_collision_stops_equal_masses_relative_motion() {
        let params = ContactParams { restitution: 0.0, impulse: ImpulseDirection::Normal };
        let mut a = ball(0.0, 0.0, 10.0, 3.0, 0.0);
        let mut b = ball(19.0, 0.0, 10.0, -1.0, 0.0);

        collide(&mut a, &mut b, params);
        assert!(close(a.velocity, Vec2::new(1.0, 0.0)));
        assert!(close(b.velocity, Vec2::new(1.0, 0.0)));
    }
}
