use bevy::prelude::*;

use super::state::SpawnerPhase;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SpawnerError {
    #[error("spawn area size must be finite and non-negative, got {size}")]
    InvalidAreaSize { size: Vec3 },
    #[error("spawn cooldown must be finite and non-negative, got {secs}s")]
    InvalidCooldown { secs: f32 },
    #[error("no item to pick up (spawner is {phase:?})")]
    NothingActive { phase: SpawnerPhase },
}
