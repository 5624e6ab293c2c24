pub mod arena;
pub mod handle;

pub use arena::BodyArena;
pub use handle::BodyHandle;
