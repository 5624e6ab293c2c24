//! Facade tests, run in a JS host with `wasm-pack test`
#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use ballpit_engine::World;

#[wasm_bindgen_test]
fn spawn_step_and_read_back() {
    let mut world = World::new(500.0, 500.0).unwrap();
    let h = world.spawn_body(5.0, 50.0, 10.0, Some("#FF0000".to_string())).unwrap();
    assert!(world.set_body_velocity(&h, -3.0, 0.0).unwrap());

    world.step();

    assert_eq!(world.body_x(&h), Some(10.0));
    assert_eq!(world.body_radius(&h), Some(10.0));
    assert_eq!(world.body_color(&h).as_deref(), Some("#FF0000"));
    assert!(world.remove_body(&h));
    assert!(!world.remove_body(&h));
    assert_eq!(world.body_x(&h), None);
}

#[wasm_bindgen_test]
fn pointer_drag_launches_ball() {
    let mut world = World::new(500.0, 500.0).unwrap();
    world.begin_ball(100.0, 100.0).unwrap();
    assert!(world.is_creating());
    assert!(world.aim_ball(130.0, 100.0));
    assert_eq!(world.aim_line(), Some(vec![100.0, 100.0, 130.0, 100.0]));
    assert_eq!(world.body_count(), 0);

    let h = world.release_ball().unwrap();
    assert_eq!(world.body_count(), 1);
    world.step();
    assert_eq!(world.body_x(&h), Some(110.0));
    assert!(world.release_ball().is_none());
}

#[wasm_bindgen_test]
fn invalid_input_throws() {
    assert!(World::new(0.0, 10.0).is_err());
    let mut world = World::new(100.0, 100.0).unwrap();
    assert!(world.spawn_body(1.0, 1.0, 0.0, None).is_err());
    assert!(world.spawn_body(1.0, 1.0, 5.0, Some("teal".to_string())).is_err());
    assert!(world.set_restitution(-1.0).is_err());
}
