//! Spawner systems.
//!
//! Frame order (chained, so command sync points fall between them):
//!
//! ```text
//! handle_resets -> initialize_spawners -> tick_cooldowns -> handle_pickups
//! ```
//!
//! `tick_cooldowns` runs before `handle_pickups`, so a cooldown scheduled this
//! frame starts counting on the next one.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::common::tunables::Tunables;

use super::components::{Spawner, SpawnerFaulted};
use super::error::SpawnerError;
use super::messages::{LootPickedUp, LootSpawned, PickupItem, ResetSpawner, SpawnBlocked};
use super::obstruction::{ObstructionProbe, SceneColliders};
use super::region::Bounds;
use super::state::{SpawnerPhase, SpawnerState};

/// Candidate item as seen at initialization.
pub type Candidate = (Entity, Option<Bounds>);

/// Build the runtime state for one spawner and make its first selection.
pub fn build_state(
    spawner_entity: Entity,
    spawner: &Spawner,
    anchor: Vec3,
    candidates: &[Candidate],
    probe: &impl ObstructionProbe,
    global_seed: u64,
) -> Result<(SpawnerState, Option<Entity>), SpawnerError> {
    let region = spawner.region(anchor)?;
    let delay = spawner.delay()?;

    let obstructed = spawner.obstruction_layers.is_some_and(|layers| {
        let own: Vec<Entity> = candidates.iter().map(|(e, _)| *e).collect();
        probe.is_obstructed(&region, layers, &own)
    });

    let mut state = SpawnerState::new(region, delay, spawner.seed_for(global_seed, spawner_entity));
    let first = state.initialize(candidates.iter().copied(), obstructed);
    Ok((state, first))
}

/// World-space bounds of a child placed under `anchor`, scale included.
pub fn item_bounds(anchor: &Transform, local: &Transform, collider: &Collider) -> Bounds {
    Bounds::from_collider(collider, &anchor.mul_transform(*local))
}

pub fn set_item_active(commands: &mut Commands, item: Entity, active: bool) {
    let Ok(mut ec) = commands.get_entity(item) else {
        warn!("Spawner item {item:?} no longer exists; skipping");
        return;
    };
    if active {
        ec.try_insert(Visibility::Inherited).try_remove::<ColliderDisabled>();
    } else {
        ec.try_insert((Visibility::Hidden, ColliderDisabled));
    }
}

pub(super) fn handle_resets(mut commands: Commands, mut requests: MessageReader<ResetSpawner>) {
    for req in requests.read() {
        let Ok(mut ec) = commands.get_entity(req.spawner) else {
            debug!("Reset for missing spawner {:?} ignored", req.spawner);
            continue;
        };
        // Dropping the state drops any pending cooldown with it.
        ec.try_remove::<(SpawnerState, SpawnerFaulted)>();
        info!("Spawner {:?} reset", req.spawner);
    }
}

pub(super) fn initialize_spawners(
    mut commands: Commands,
    tunables: Res<Tunables>,
    scene: SceneColliders,
    q_spawners: Query<
        (Entity, &Spawner, &Transform, Option<&Children>),
        (Without<SpawnerState>, Without<SpawnerFaulted>),
    >,
    q_items: Query<(&Transform, Option<&Collider>)>,
    mut spawned: MessageWriter<LootSpawned>,
    mut blocked: MessageWriter<SpawnBlocked>,
) {
    for (entity, spawner, anchor, children) in &q_spawners {
        let kids: Vec<Entity> = children.map(|c| c.to_vec()).unwrap_or_default();
        let candidates: Vec<Candidate> = kids
            .iter()
            .map(|&child| {
                let bounds = q_items
                    .get(child)
                    .ok()
                    .and_then(|(local, collider)| collider.map(|c| item_bounds(anchor, local, c)));
                (child, bounds)
            })
            .collect();

        let (state, first) =
            match build_state(entity, spawner, anchor.translation, &candidates, &scene, tunables.rng_seed) {
                Ok(built) => built,
                Err(e) => {
                    error!("Spawner {entity:?} has invalid configuration: {e}");
                    commands.entity(entity).insert(SpawnerFaulted(e));
                    continue;
                }
            };

        for &child in &kids {
            set_item_active(&mut commands, child, false);
        }

        match state.phase() {
            SpawnerPhase::Obstructed => {
                warn!(
                    "Spawner {entity:?}: spawn area at {} is obstructed, nothing spawned until reset",
                    state.region().center()
                );
                blocked.write(SpawnBlocked { spawner: entity });
            }
            SpawnerPhase::Empty => {
                info!("Spawner {entity:?}: none of {} children fit the spawn area", kids.len());
            }
            _ => {
                debug!(
                    "Spawner {entity:?}: {} of {} children eligible",
                    state.eligible().len(),
                    kids.len()
                );
            }
        }

        if let Some(item) = first {
            set_item_active(&mut commands, item, true);
            spawned.write(LootSpawned { spawner: entity, item });
        }

        commands.entity(entity).insert(state);
    }
}

pub(super) fn tick_cooldowns(
    mut commands: Commands,
    time: Res<Time>,
    mut q_state: Query<(Entity, &mut SpawnerState)>,
    mut spawned: MessageWriter<LootSpawned>,
) {
    let dt = time.delta();
    for (spawner, mut state) in &mut q_state {
        if state.phase() != SpawnerPhase::CoolingDown {
            continue;
        }
        if let Some(item) = state.tick(dt) {
            set_item_active(&mut commands, item, true);
            spawned.write(LootSpawned { spawner, item });
        }
    }
}

pub(super) fn handle_pickups(
    mut commands: Commands,
    mut requests: MessageReader<PickupItem>,
    mut q_state: Query<&mut SpawnerState>,
    mut picked: MessageWriter<LootPickedUp>,
) {
    for req in requests.read() {
        let Ok(mut state) = q_state.get_mut(req.spawner) else {
            warn!("Pickup for {:?} ignored: not an initialized spawner", req.spawner);
            continue;
        };
        match state.pickup_item() {
            Ok(item) => {
                set_item_active(&mut commands, item, false);
                picked.write(LootPickedUp { spawner: req.spawner, item });
            }
            Err(e) => warn!("Pickup on spawner {:?} rejected: {e}", req.spawner),
        }
    }
}
