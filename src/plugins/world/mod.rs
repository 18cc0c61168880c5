//! World plugin (render-only): floor, three demo spawners and one obstacle.
//!
//! - "Crates": roomy area, one child too tall to ever appear.
//! - "Gems": tight 1m area, one child straddles the boundary.
//! - "Blocked": guarded by the Obstacle layer with a rock inside its area, so it
//!   starts `Obstructed` and its outline is drawn red.

use avian3d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::layers::Layer;
use crate::common::state::GameState;
use crate::plugins::spawner::Spawner;

const FLOOR_SIZE: f32 = 24.0;

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), (spawn_floor, spawn_spawners));
}

fn spawn_floor(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Name::new("Floor"),
        Mesh3d(meshes.add(Cuboid::new(FLOOR_SIZE, 0.2, FLOOR_SIZE))),
        MeshMaterial3d(materials.add(Color::srgb(0.25, 0.27, 0.3))),
        Transform::from_xyz(0.0, -0.1, 0.0),
        RigidBody::Static,
        Collider::cuboid(FLOOR_SIZE, 0.2, FLOOR_SIZE),
        CollisionLayers::new(Layer::World, [Layer::Player]),
        DespawnOnExit(GameState::InGame),
    ));
}

/// One candidate item: a coloured box resting on the spawner anchor.
struct Loot {
    name: &'static str,
    size: Vec3,
    color: Color,
}

impl Loot {
    const fn new(name: &'static str, size: Vec3, color: Color) -> Self {
        Self { name, size, color }
    }
}

fn spawn_spawners(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let layouts = [
        (
            "Crates",
            Vec3::new(-5.0, 0.0, 0.0),
            Spawner {
                draw_color: Color::srgb(0.3, 0.9, 0.4),
                area_size: Vec3::splat(2.0),
                cooldown_secs: 1.0,
                ..default()
            },
            vec![
                Loot::new("SmallCrate", Vec3::splat(0.8), Color::srgb(0.6, 0.4, 0.2)),
                Loot::new("LongCrate", Vec3::new(1.8, 0.6, 0.6), Color::srgb(0.5, 0.35, 0.2)),
                Loot::new("Pillar", Vec3::new(0.5, 3.0, 0.5), Color::srgb(0.8, 0.8, 0.8)),
            ],
        ),
        (
            "Gems",
            Vec3::ZERO,
            Spawner {
                draw_color: Color::srgb(0.4, 0.6, 1.0),
                area_size: Vec3::ONE,
                cooldown_secs: 2.0,
                ..default()
            },
            vec![
                Loot::new("Ruby", Vec3::splat(0.3), Color::srgb(0.9, 0.1, 0.2)),
                Loot::new("Sapphire", Vec3::splat(0.4), Color::srgb(0.1, 0.2, 0.9)),
                Loot::new("Slab", Vec3::new(1.2, 0.2, 0.4), Color::srgb(0.5, 0.5, 0.5)),
            ],
        ),
        (
            "Blocked",
            Vec3::new(5.0, 0.0, 0.0),
            Spawner {
                draw_color: Color::srgb(1.0, 0.85, 0.2),
                area_size: Vec3::splat(2.0),
                obstruction_layers: Some(Layer::Obstacle.into()),
                ..default()
            },
            vec![Loot::new("Barrel", Vec3::new(0.6, 1.0, 0.6), Color::srgb(0.4, 0.25, 0.1))],
        ),
    ];

    for (name, anchor, spawner, loot) in layouts {
        commands
            .spawn((
                Name::new(format!("{name}Spawner")),
                spawner,
                Transform::from_translation(anchor),
                DespawnOnExit(GameState::InGame),
            ))
            .with_children(|parent| {
                for item in loot {
                    parent.spawn((
                        Name::new(item.name),
                        Mesh3d(meshes.add(Cuboid::from_size(item.size))),
                        MeshMaterial3d(materials.add(item.color)),
                        // Resting on the anchor: local y is half the height.
                        Transform::from_xyz(0.0, item.size.y * 0.5, 0.0),
                        Collider::cuboid(item.size.x, item.size.y, item.size.z),
                        CollisionLayers::new(Layer::Loot, [Layer::Player]),
                    ));
                }
            });
    }

    commands.spawn((
        Name::new("Rock"),
        Mesh3d(meshes.add(Cuboid::new(0.8, 0.8, 0.8))),
        MeshMaterial3d(materials.add(Color::srgb(0.35, 0.35, 0.38))),
        Transform::from_xyz(5.6, 0.4, 0.4),
        RigidBody::Static,
        Collider::cuboid(0.8, 0.8, 0.8),
        CollisionLayers::new(Layer::Obstacle, [Layer::Player]),
        DespawnOnExit(GameState::InGame),
    ));
}
