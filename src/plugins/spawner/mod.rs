//! Spawner plugin: region-bound loot that rotates after every pickup.
//!
//! ---------------------------
//! MODEL
//! ---------------------------
//! A `Spawner` entity owns its candidate items as children. On its first frame it
//! is initialized:
//!
//! 1) the spawn area is a box whose bottom-centre is the spawner translation;
//! 2) children whose collider AABB lies fully inside the box become *eligible*;
//! 3) every child is hidden, then one eligible item is activated at random.
//!
//! Gameplay sends `PickupItem { spawner }`. The current item is hidden and a
//! cooldown starts; when it runs out another eligible item (possibly the same
//! one) is activated. Each spawner has its own seeded RNG.
//!
//! Optional obstruction: with `obstruction_layers` set, any collider in those
//! layers overlapping the area at initialization blocks the first spawn. The
//! spawner then stays `Obstructed` until a `ResetSpawner` re-initializes it.
//!
//! ---------------------------
//! ACTIVE FLAG
//! ---------------------------
//! Active items are `Visibility::Inherited`; inactive items are
//! `Visibility::Hidden` and carry `ColliderDisabled` so they cannot be touched.

use bevy::prelude::*;

pub mod components;
pub mod error;
pub mod gizmos;
pub mod messages;
pub mod obstruction;
pub mod region;
pub mod state;
pub mod systems;

pub use components::{Spawner, SpawnerFaulted};
pub use error::SpawnerError;
pub use messages::{LootPickedUp, LootSpawned, PickupItem, ResetSpawner, SpawnBlocked};
pub use region::{Bounds, SpawnRegion};
pub use state::{SpawnerPhase, SpawnerState};

pub fn plugin(app: &mut App) {
    app.add_message::<PickupItem>()
        .add_message::<ResetSpawner>()
        .add_message::<LootSpawned>()
        .add_message::<LootPickedUp>()
        .add_message::<SpawnBlocked>()
        .add_systems(
            Update,
            (
                systems::handle_resets,
                systems::initialize_spawners,
                systems::tick_cooldowns,
                systems::handle_pickups,
            )
                .chain(),
        );
}
