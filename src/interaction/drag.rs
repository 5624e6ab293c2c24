//! Press-drag-release ball creation
//!
//! Pressing places a ball, dragging aims it, releasing launches it with a
//! velocity proportional to the drag. The pending ball is not part of any
//! world until it is released.

use crate::core::Vec2;
use crate::domain::Body;

/// Radius of balls created by pointer
pub const DEFAULT_BALL_RADIUS: f64 = 10.0;

/// Drag distance divided by this gives the launch velocity (per tick)
pub const LAUNCH_DIVISOR: f64 = 3.0;

#[derive(Clone, Debug, Default, PartialEq)]
pub enum BallCreation {
    #[default]
    Idle,
    Creating {
        body: Body,
        /// Current pointer position
        target: Vec2,
    },
}

pub fn launch_velocity(start: Vec2, target: Vec2) -> Vec2 {
    let drag = target - start;
    Vec2::new(drag.x / LAUNCH_DIVISOR, drag.y / LAUNCH_DIVISOR)
}

impl BallCreation {
    /// Start creating `body`, aimed at its own center.
    ///
    /// A ball already in progress is discarded.
    pub fn begin(&mut self, body: Body) {
        let target = body.position;
        *self = BallCreation::Creating { body, target };
    }

    /// Move the aim point. Returns `false` when idle or when `point` is not
    /// finite, leaving the previous aim in place.
    pub fn aim(&mut self, point: Vec2) -> bool {
        match self {
            BallCreation::Creating { target, .. } if point.is_finite() => {
                *target = point;
                true
            }
            _ => false,
        }
    }

    /// Finish creation: the body gets its launch velocity and is handed back
    /// for insertion into a world.
    pub fn release(&mut self) -> Option<Body> {
        match std::mem::take(self) {
            BallCreation::Creating { mut body, target } => {
                body.velocity = launch_velocity(body.position, target);
                Some(body)
            }
            BallCreation::Idle => None,
        }
    }

    /// Abandon creation, returning the pending body untouched.
    pub fn cancel(&mut self) -> Option<Body> {
        match std::mem::take(self) {
            BallCreation::Creating { body, .. } => Some(body),
            BallCreation::Idle => None,
        }
    }

    pub fn is_creating(&self) -> bool {
        matches!(self, BallCreation::Creating { .. })
    }

    pub fn pending(&self) -> Option<&Body> {
        match self {
            BallCreation::Creating { body, .. } => Some(body),
            BallCreation::Idle => None,
        }
    }

    /// Segment from the pending ball's center to the aim point
    pub fn aim_line(&self) -> Option<(Vec2, Vec2)> {
        match self {
            BallCreation::Creating { body, target } => Some((body.position, *target)),
            BallCreation::Idle => None,
        }
    }
}
