use crate::core::PhysicsError;
use crate::domain::{ColorPicker, WorldConfig};
use crate::spatial::BodyArena;

use super::perf_stats::PerfStats;
use super::PhysicsWorld;

pub(super) fn create_world(config: WorldConfig) -> Result<PhysicsWorld, PhysicsError> {
    config.validate()?;

    console_log!(
        "world {}x{} (restitution {}, {:?} sweep, {:?} impulse)",
        config.width,
        config.height,
        config.restitution,
        config.pair_sweep,
        config.impulse
    );

    Ok(PhysicsWorld {
        bodies: BodyArena::new(),
        colors: ColorPicker::new(config.palette_seed),
        config,
        frame: 0,
        render_buffer: Vec::with_capacity(256),
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    })
}
