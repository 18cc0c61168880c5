//! Player plugin (render-only, needs keyboard input).
//!
//! Pipeline:
//! - Update: sample input, write PlayerInput resource; `E` / `R` turn into spawner requests
//! - FixedUpdate: apply velocity to kinematic rigid body
//!
//! The player is the "interaction system" of the demo: it never touches items
//! directly, it only asks the nearest spawner to give up its current one.

use avian3d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::{layers::Layer, state::GameState, tunables::Tunables};
use crate::plugins::spawner::{PickupItem, ResetSpawner, Spawner, SpawnerPhase, SpawnerState};

#[derive(Component)]
pub struct Player;

#[derive(Resource, Default, Debug)]
struct PlayerInput {
    move_axis: Vec2,
}

pub fn plugin(app: &mut App) {
    app.insert_resource(PlayerInput::default())
        .add_systems(OnEnter(GameState::InGame), spawn)
        .add_systems(Update, (gather_input, request_pickup, request_reset))
        .add_systems(FixedUpdate, apply_movement);
}

fn spawn(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let layers = CollisionLayers::new(Layer::Player, [Layer::World, Layer::Obstacle]);

    commands.spawn((
        Name::new("Player"),
        Player,
        Mesh3d(meshes.add(Capsule3d::new(0.3, 1.0))),
        MeshMaterial3d(materials.add(Color::srgb(0.2, 0.75, 0.9))),
        Transform::from_xyz(0.0, 0.8, 4.0),
        RigidBody::Kinematic,
        Collider::capsule(0.3, 1.0),
        layers,
        LinearVelocity::ZERO,
        DespawnOnExit(GameState::InGame),
    ));
}

fn gather_input(keys: Res<ButtonInput<KeyCode>>, mut input: ResMut<PlayerInput>) {
    let mut axis = Vec2::ZERO;

    if keys.pressed(KeyCode::KeyW) {
        axis.y -= 1.0;
    }
    if keys.pressed(KeyCode::KeyS) {
        axis.y += 1.0;
    }
    if keys.pressed(KeyCode::KeyA) {
        axis.x -= 1.0;
    }
    if keys.pressed(KeyCode::KeyD) {
        axis.x += 1.0;
    }

    input.move_axis = axis.normalize_or_zero();
}

fn apply_movement(
    tunables: Res<Tunables>,
    input: Res<PlayerInput>,
    mut q_player: Query<&mut LinearVelocity, With<Player>>,
) {
    let Ok(mut vel) = q_player.single_mut() else {
        return;
    };
    let planar = input.move_axis * tunables.player_speed;
    vel.0 = Vec3::new(planar.x, 0.0, planar.y);
}

/// Nearest spawner with an item up for grabs within `reach` of `from`.
fn nearest_active_spawner<'a>(
    from: Vec3,
    reach: f32,
    spawners: impl Iterator<Item = (Entity, &'a Transform, &'a SpawnerState)>,
) -> Option<Entity> {
    spawners
        .filter(|(_, _, state)| state.phase() == SpawnerPhase::Active)
        .map(|(e, tf, _)| (e, tf.translation.xz().distance(from.xz())))
        .filter(|(_, d)| *d <= reach)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(e, _)| e)
}

fn request_pickup(
    keys: Res<ButtonInput<KeyCode>>,
    tunables: Res<Tunables>,
    q_player: Query<&Transform, With<Player>>,
    q_spawners: Query<(Entity, &Transform, &SpawnerState), Without<Player>>,
    mut pickups: MessageWriter<PickupItem>,
) {
    if !keys.just_pressed(KeyCode::KeyE) {
        return;
    }
    let Ok(tf_player) = q_player.single() else {
        return;
    };
    match nearest_active_spawner(tf_player.translation, tunables.pickup_reach, q_spawners.iter()) {
        Some(spawner) => {
            pickups.write(PickupItem { spawner });
        }
        None => debug!("Nothing to pick up within reach"),
    }
}

fn request_reset(
    keys: Res<ButtonInput<KeyCode>>,
    q_spawners: Query<Entity, With<Spawner>>,
    mut resets: MessageWriter<ResetSpawner>,
) {
    if !keys.just_pressed(KeyCode::KeyR) {
        return;
    }
    resets.write_batch(q_spawners.iter().map(|spawner| ResetSpawner { spawner }));
}

#[cfg(test)]
mod tests;
