//! Collision layers.

use avian3d::prelude::*;

#[derive(PhysicsLayer, Default, Clone, Copy, Debug)]
pub enum Layer {
    #[default]
    Default,
    World,
    Player,
    /// Spawnable items owned by a spawner.
    Loot,
    /// Scene geometry that can block a spawn region.
    Obstacle,
}
