pub mod drag;

pub use drag::{launch_velocity, BallCreation, DEFAULT_BALL_RADIUS, LAUNCH_DIVISOR};
