use thiserror::Error;

/// Errors raised when building bodies or worlds from invalid input.
///
/// Stepping never fails; every error here comes from a constructor,
/// a setter or a config loader.
#[derive(Debug, Error)]
pub enum PhysicsError {
    #[error("radius must be finite and positive, got {0}")]
    InvalidRadius(f64),

    #[error("mass must be finite and positive, got {0}")]
    InvalidMass(f64),

    #[error("restitution must be within 0..=1, got {0}")]
    InvalidRestitution(f64),

    #[error("world bounds must be finite and positive, got {width}x{height}")]
    InvalidBounds { width: f64, height: f64 },

    #[error("{what} must have finite components, got ({x}, {y})")]
    NonFinite { what: &'static str, x: f64, y: f64 },

    #[error("invalid color {0:?}, expected #RRGGBB")]
    InvalidColor(String),

    #[error("world config: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = PhysicsError> = std::result::Result<T, E>;
