//! Core value types shared by every layer of the engine.

#[macro_use]
pub mod utils;
pub mod error;
pub mod vec2;

pub use error::PhysicsError;
pub use vec2::Vec2;
