//! Tunable gameplay constants.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone)]
pub struct Tunables {
    /// Global seed mixed into every spawner's RNG that has no seed of its own.
    pub rng_seed: u64,
    pub draw_spawn_regions: bool,
    pub player_speed: f32,
    /// Max distance between the player and a spawner anchor for a pickup.
    pub pickup_reach: f32,
}

impl Default for Tunables {
    fn default() -> Self {
        Self { rng_seed: 0x5EED_1007, draw_spawn_regions: true, player_speed: 5.0, pickup_reach: 2.5 }
    }
}
