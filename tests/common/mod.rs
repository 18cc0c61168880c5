//! Integration test harness.
//!
//! Keep integration tests headless:
//! - `MinimalPlugins` provides core ECS runtime.
//! - we then call `loot_spawner::game::configure_headless` to install gameplay plugins.
//! - time advances by a fixed step per `app.update()`, so cooldowns are deterministic.

#![allow(dead_code)]

use std::time::Duration;

use avian3d::prelude::*;
use bevy::asset::AssetPlugin;
use bevy::prelude::*;
use bevy::scene::ScenePlugin;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;

use loot_spawner::plugins::spawner::Spawner;

pub const FRAME: Duration = Duration::from_millis(100);

pub fn app_headless() -> App {
    let mut app = App::new();

    // Add AssetPlugin + ScenePlugin so the physics collider backend finds its assets.
    app.add_plugins((
        MinimalPlugins,
        StatesPlugin,
        AssetPlugin::default(),
        ScenePlugin,
    ));
    app.init_asset::<Mesh>();
    app.insert_resource(TimeUpdateStrategy::ManualDuration(FRAME));

    loot_spawner::game::configure_headless(&mut app);
    // `App::run` normally does this; plugins (avian) insert resources in `finish`.
    app.finish();
    app.cleanup();
    app
}

/// Spawn a spawner at `anchor` with one cuboid child per entry of `sizes`,
/// each resting on the anchor. Returns the spawner and its children in order.
pub fn spawn_spawner(app: &mut App, spawner: Spawner, anchor: Vec3, sizes: &[Vec3]) -> (Entity, Vec<Entity>) {
    let world = app.world_mut();
    let spawner_e = world.spawn((spawner, Transform::from_translation(anchor))).id();
    let items = sizes
        .iter()
        .map(|size| {
            world
                .spawn((
                    Transform::from_xyz(0.0, size.y * 0.5, 0.0),
                    Collider::cuboid(size.x, size.y, size.z),
                    ChildOf(spawner_e),
                ))
                .id()
        })
        .collect();
    (spawner_e, items)
}

pub fn is_active(app: &App, item: Entity) -> bool {
    app.world().get::<Visibility>(item) == Some(&Visibility::Inherited)
}

pub fn active_items(app: &App, items: &[Entity]) -> Vec<Entity> {
    items.iter().copied().filter(|&e| is_active(app, e)).collect()
}
