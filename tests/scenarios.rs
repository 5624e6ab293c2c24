use ballpit_engine::{
    BallCreation, Body, Color, ImpulseDirection, PairSweep, PhysicsWorld, Vec2, WorldConfig,
};
use ballpit_engine::interaction::DEFAULT_BALL_RADIUS;
use ballpit_engine::systems::collision::{collide, is_colliding, ContactParams};

const EPS: f64 = 1e-9;

fn ball(x: f64, y: f64, vx: f64, vy: f64) -> Body {
    Body::new(Vec2::new(x, y), 10.0, Color(0))
        .unwrap()
        .with_velocity(Vec2::new(vx, vy))
}

#[test]
fn head_on_collision_swaps_velocities() {
    let params = ContactParams { restitution: 1.0, impulse: ImpulseDirection::Normal };
    let mut a = ball(0.0, 0.0, 1.0, 0.0);
    let mut b = ball(19.0, 0.0, -1.0, 0.0);

    assert!(is_colliding(&a, &b));
    collide(&mut a, &mut b, params);

    assert!((a.velocity - Vec2::new(-1.0, 0.0)).length() < EPS);
    assert!((b.velocity - Vec2::new(1.0, 0.0)).length() < EPS);
}

#[test]
fn literal_impulse_matches_normal_at_unit_overlap() {
    // With an overlap of exactly 1 the penetration vector is a unit vector,
    // so both impulse directions agree.
    for impulse in [ImpulseDirection::Normal, ImpulseDirection::Penetration] {
        let params = ContactParams { restitution: 1.0, impulse };
        let mut a = ball(0.0, 0.0, 1.0, 0.0);
        let mut b = ball(19.0, 0.0, -1.0, 0.0);
        collide(&mut a, &mut b, params);
        assert!((a.velocity.x + 1.0).abs() < EPS, "{impulse:?}");
        assert!((b.velocity.x - 1.0).abs() < EPS, "{impulse:?}");
    }
}

#[test]
fn boundary_bounce_from_config() {
    let config = WorldConfig::from_json(r#"{"width": 500, "height": 500}"#).unwrap();
    let mut world = PhysicsWorld::with_config(config).unwrap();
    let h = world.add_body(ball(5.0, 50.0, -3.0, 0.0));

    world.step();

    let body = world.body(h).unwrap();
    assert_eq!(body.position.x, 10.0);
    assert!((body.velocity.x - 3.0 * 0.55).abs() < EPS);
}

#[test]
fn removal_keeps_remaining_order() {
    let mut world = PhysicsWorld::new(500.0, 500.0).unwrap();
    let first = world.add_body(ball(50.0, 50.0, 0.0, 0.0));
    let second = world.add_body(ball(150.0, 50.0, 0.0, 0.0));
    let third = world.add_body(ball(250.0, 50.0, 0.0, 0.0));

    assert!(world.remove_body(second).is_some());
    assert!(world.remove_body(second).is_none());

    let order: Vec<_> = world.bodies().map(|(h, _)| h).collect();
    assert_eq!(order, vec![first, third]);
    assert_eq!(world.body_count(), 2);

    // A new body lands after the survivors even if it reuses storage.
    let fourth = world.add_body(ball(350.0, 50.0, 0.0, 0.0));
    let order: Vec<_> = world.bodies().map(|(h, _)| h).collect();
    assert_eq!(order, vec![first, third, fourth]);
    assert!(world.body(second).is_none());
}

#[test]
fn many_removals_keep_handles_valid() {
    let mut world = PhysicsWorld::new(2000.0, 2000.0).unwrap();
    let handles: Vec<_> = (0..64)
        .map(|i| world.add_body(ball(20.0 + 30.0 * (i % 60) as f64, 20.0 + 30.0 * (i / 60) as f64, 0.0, 0.0)))
        .collect();

    for h in handles.iter().skip(1).step_by(2) {
        world.remove_body(*h).unwrap();
    }
    for (i, h) in handles.iter().enumerate() {
        assert_eq!(world.contains(*h), i % 2 == 0);
    }
    // Survivors of the first row come first, left to right.
    let x_order: Vec<f64> = world.bodies().map(|(_, b)| b.position.x).collect();
    assert_eq!(x_order.len(), 32);
    assert!(x_order[..30].windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn elastic_pair_in_world_conserves_momentum() {
    let config = WorldConfig {
        restitution: 1.0,
        pair_sweep: PairSweep::Unordered,
        ..WorldConfig::new(1000.0, 1000.0)
    };
    let mut world = PhysicsWorld::with_config(config).unwrap();
    world.add_body(ball(480.0, 500.0, 2.0, 0.5));
    world.add_body(ball(500.0, 506.0, -1.0, -0.5));

    let before: Vec2 = world.bodies().fold(Vec2::zero(), |acc, (_, b)| acc + b.velocity);
    for _ in 0..10 {
        world.step();
    }
    let after: Vec2 = world.bodies().fold(Vec2::zero(), |acc, (_, b)| acc + b.velocity);
    assert!((after - before).length() < EPS);
}

#[test]
fn pointer_created_ball_enters_world_on_release() {
    let mut world = PhysicsWorld::new(500.0, 500.0).unwrap();
    let mut creation = BallCreation::default();

    let pending = world.create_body(Vec2::new(100.0, 100.0), DEFAULT_BALL_RADIUS, None).unwrap();
    creation.begin(pending);
    creation.aim(Vec2::new(160.0, 70.0));
    world.step();
    assert_eq!(world.body_count(), 0);

    let h = world.add_body(creation.release().unwrap());
    assert_eq!(world.body(h).unwrap().velocity, Vec2::new(20.0, -10.0));

    world.step();
    assert_eq!(world.body(h).unwrap().position, Vec2::new(120.0, 90.0));
}
