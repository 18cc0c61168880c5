//! Camera plugin (render-only): a 3D camera trailing the player at a fixed offset.
//!
//! A system cannot have `Query<&Transform>` and `Query<&mut Transform>` at the same
//! time unless Bevy can prove those queries are disjoint, so both queries carry
//! `Without<...>` filters.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::state::GameState;
use crate::plugins::player::Player;

const OFFSET: Vec3 = Vec3::new(0.0, 9.0, 11.0);

#[derive(Component)]
pub struct MainCamera {
    pub responsiveness: f32,
}

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_camera)
        .add_systems(
            PostUpdate,
            follow_player
                .before(TransformSystems::Propagate)
                .run_if(in_state(GameState::InGame)),
        );
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Name::new("MainCamera"),
        Camera3d::default(),
        MainCamera { responsiveness: 4.0 },
        Transform::from_translation(OFFSET).looking_at(Vec3::ZERO, Vec3::Y),
        DespawnOnExit(GameState::InGame),
    ));
}

fn follow_player(
    time: Res<Time>,
    q_player: Query<&Transform, (With<Player>, Without<MainCamera>)>,
    mut q_cam: Query<(&mut Transform, &MainCamera), Without<Player>>,
) {
    let Ok(tf_player) = q_player.single() else {
        return;
    };
    let Ok((mut tf_cam, main_cam)) = q_cam.single_mut() else {
        return;
    };

    let dt = time.delta_secs();
    let alpha = 1.0 - (-main_cam.responsiveness * dt).exp();

    let target = tf_player.translation + OFFSET;
    tf_cam.translation = tf_cam.translation.lerp(target, alpha);
    tf_cam.look_at(tf_player.translation, Vec3::Y);
}
