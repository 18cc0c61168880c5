//! Spawner traffic.
//!
//! Gameplay writes *requests* (`PickupItem`, `ResetSpawner`); the spawner systems
//! consume them and publish what actually happened (`LootSpawned`, `LootPickedUp`,
//! `SpawnBlocked`) for anything that wants to react: sound, UI, scoring.

use bevy::prelude::*;

/// Take the current item of `spawner` and start its respawn cooldown.
#[derive(Message, Clone, Copy, Debug)]
pub struct PickupItem {
    pub spawner: Entity,
}

/// Drop the runtime state of `spawner` so it is initialized again.
#[derive(Message, Clone, Copy, Debug)]
pub struct ResetSpawner {
    pub spawner: Entity,
}

#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub struct LootSpawned {
    pub spawner: Entity,
    pub item: Entity,
}

#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub struct LootPickedUp {
    pub spawner: Entity,
    pub item: Entity,
}

/// The spawn area was occupied at initialization; nothing was activated.
#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpawnBlocked {
    pub spawner: Entity,
}
