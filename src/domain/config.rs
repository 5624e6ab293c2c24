use serde::{Deserialize, Serialize};

use crate::core::{PhysicsError, Vec2};

pub const DEFAULT_RESTITUTION: f64 = 0.55;
pub const DEFAULT_PALETTE_SEED: u32 = 12345;

/// Which body pairs the collision pass visits each tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PairSweep {
    /// Every ordered pair (A, B) and (B, A): an overlapping pair is resolved
    /// twice per tick.
    #[default]
    Ordered,
    /// Each unordered pair once.
    Unordered,
}

/// Direction of the collision impulse.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImpulseDirection {
    /// Along the unit collision normal.
    #[default]
    Normal,
    /// Along the unnormalized penetration vector, so overlap depth also
    /// scales the impulse. Kept for behavioral parity with the canvas toy.
    Penetration,
}

/// World construction parameters.
///
/// Every field has a default, so a JSON config may name only what it
/// changes: `{"width": 800, "height": 600}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub width: f64,
    pub height: f64,
    pub restitution: f64,
    /// Initial acceleration of bodies the world creates
    pub gravity: Vec2,
    pub pair_sweep: PairSweep,
    pub impulse: ImpulseDirection,
    pub palette_seed: u32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 480.0,
            restitution: DEFAULT_RESTITUTION,
            gravity: Vec2::zero(),
            pair_sweep: PairSweep::default(),
            impulse: ImpulseDirection::default(),
            palette_seed: DEFAULT_PALETTE_SEED,
        }
    }
}

impl WorldConfig {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height, ..Self::default() }
    }

    pub fn from_json(json: &str) -> Result<Self, PhysicsError> {
        let config: WorldConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, PhysicsError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), PhysicsError> {
        validate_bounds(self.width, self.height)?;
        validate_restitution(self.restitution)?;
        validate_finite("gravity", self.gravity)?;
        Ok(())
    }
}

/// Positions, velocities and accelerations must have finite components
pub fn validate_finite(what: &'static str, v: Vec2) -> Result<Vec2, PhysicsError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(PhysicsError::NonFinite { what, x: v.x, y: v.y })
    }
}

pub fn validate_restitution(restitution: f64) -> Result<f64, PhysicsError> {
    if (0.0..=1.0).contains(&restitution) {
        Ok(restitution)
    } else {
        Err(PhysicsError::InvalidRestitution(restitution))
    }
}

pub fn validate_bounds(width: f64, height: f64) -> Result<(), PhysicsError> {
    let ok = |v: f64| v.is_finite() && v > 0.0;
    if ok(width) && ok(height) {
        Ok(())
    } else {
        Err(PhysicsError::InvalidBounds { width, height })
    }
}
