pub mod body;
pub mod color;
pub mod config;

pub use body::Body;
pub use color::{Color, ColorPicker, PALETTE};
pub use config::{ImpulseDirection, PairSweep, WorldConfig, DEFAULT_RESTITUTION};
