use std::time::Duration;

use avian3d::prelude::*;
use bevy::ecs::message::Messages;
use bevy::prelude::*;

use crate::common::test_utils::run_system_once;
use crate::common::tunables::Tunables;
use crate::plugins::spawner::{Bounds, PickupItem, SpawnRegion, SpawnerState};

fn active_state(world: &mut World) -> SpawnerState {
    let item = world.spawn_empty().id();
    let region = SpawnRegion::from_anchor(Vec3::ZERO, Vec3::splat(2.0)).unwrap();
    let mut state = SpawnerState::new(region, Duration::ZERO, 1);
    state.initialize([(item, Some(Bounds::from_center_size(Vec3::Y, Vec3::splat(0.5))))], false);
    state
}

#[test]
fn apply_movement_sets_planar_velocity() {
    let mut world = World::new();
    world.insert_resource(Tunables { player_speed: 4.0, ..default() });
    world.insert_resource(super::PlayerInput { move_axis: Vec2::new(1.0, 0.0) });
    world.spawn((super::Player, LinearVelocity::ZERO));

    run_system_once(&mut world, super::apply_movement);

    let v = world.query::<&LinearVelocity>().iter(&world).next().unwrap();
    assert_eq!(v.0, Vec3::new(4.0, 0.0, 0.0));
}

#[test]
fn nearest_spawner_must_be_active_and_in_reach() {
    let mut world = World::new();
    let near = world.spawn_empty().id();
    let far = world.spawn_empty().id();
    let cooling = world.spawn_empty().id();

    let near_state = active_state(&mut world);
    let far_state = active_state(&mut world);
    let mut cooling_state = active_state(&mut world);
    cooling_state.pickup_item().unwrap();

    let near_tf = Transform::from_xyz(1.0, 0.0, 0.0);
    let far_tf = Transform::from_xyz(8.0, 0.0, 0.0);
    let cooling_tf = Transform::from_xyz(0.5, 0.0, 0.0);

    let spawners = [
        (far, &far_tf, &far_state),
        (cooling, &cooling_tf, &cooling_state),
        (near, &near_tf, &near_state),
    ];

    assert_eq!(super::nearest_active_spawner(Vec3::ZERO, 2.5, spawners.into_iter()), Some(near));
    assert_eq!(super::nearest_active_spawner(Vec3::new(20.0, 0.0, 0.0), 2.5, spawners.into_iter()), None);
}

#[test]
fn pressing_e_requests_pickup_from_nearest_spawner() {
    let mut world = World::new();
    world.init_resource::<Tunables>();
    world.init_resource::<Messages<PickupItem>>();
    let mut keys = ButtonInput::<KeyCode>::default();
    keys.press(KeyCode::KeyE);
    world.insert_resource(keys);

    world.spawn((super::Player, Transform::from_xyz(0.0, 0.8, 1.0)));
    let state = active_state(&mut world);
    let spawner = world.spawn((Transform::default(), state)).id();

    run_system_once(&mut world, super::request_pickup);

    let sent = run_system_once(&mut world, |mut r: MessageReader<PickupItem>| {
        r.read().map(|m| m.spawner).collect::<Vec<_>>()
    });
    assert_eq!(sent, vec![spawner]);
}
