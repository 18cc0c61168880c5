use std::time::Duration;

use avian3d::prelude::*;
use bevy::prelude::*;

use super::error::SpawnerError;
use super::region::SpawnRegion;

/// Spawner configuration. Its children are the candidate items.
///
/// The entity's `Transform` translation is the bottom-centre of the spawn area.
/// Spawners are expected at the root of the hierarchy.
#[derive(Component, Debug, Clone)]
#[require(Transform, Visibility)]
pub struct Spawner {
    /// Debug overlay colour, per spawner.
    pub draw_color: Color,
    /// Only children that fit fully inside this box are ever spawned.
    pub area_size: Vec3,
    /// Delay before the next spawn, after an item is picked up.
    pub cooldown_secs: f32,
    /// When set, colliders in these layers overlapping the area block the first spawn.
    pub obstruction_layers: Option<LayerMask>,
    /// Fixed RNG seed; otherwise derived from `Tunables::rng_seed` and the entity.
    pub seed: Option<u64>,
}

impl Default for Spawner {
    fn default() -> Self {
        Self {
            draw_color: Color::WHITE,
            area_size: Vec3::ONE,
            cooldown_secs: 1.0,
            obstruction_layers: None,
            seed: None,
        }
    }
}

impl Spawner {
    pub fn region(&self, anchor: Vec3) -> Result<SpawnRegion, SpawnerError> {
        SpawnRegion::from_anchor(anchor, self.area_size)
    }

    /// Respawn delay; negative or non-finite seconds are a configuration error.
    pub fn delay(&self) -> Result<Duration, SpawnerError> {
        let secs = self.cooldown_secs;
        Duration::try_from_secs_f32(secs).map_err(|_| SpawnerError::InvalidCooldown { secs })
    }

    pub fn seed_for(&self, global_seed: u64, entity: Entity) -> u64 {
        self.seed.unwrap_or_else(|| mix_seed(global_seed, entity))
    }
}

/// Marks a spawner whose configuration was rejected; it is never initialized.
#[derive(Component, Debug, Clone)]
pub struct SpawnerFaulted(pub SpawnerError);

/// Stable per (global seed, spawner entity).
fn mix_seed(global_seed: u64, entity: Entity) -> u64 {
    global_seed ^ entity.to_bits().rotate_left(17) ^ 0xA5A5_5A5A_D3F0_1234u64
}
