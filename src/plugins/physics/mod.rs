//! Physics plugin: avian3d with default gravity. Loot and obstacles are plain
//! colliders without rigid bodies; only the player moves.

use avian3d::prelude::*;
use bevy::prelude::*;

pub fn plugin(app: &mut App) {
    app.add_plugins(PhysicsPlugins::default());
}
