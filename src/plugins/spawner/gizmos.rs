//! Debug overlay (render-only): wireframe of every spawn area in its draw colour.

use bevy::prelude::*;

use crate::common::tunables::Tunables;

use super::components::Spawner;
use super::state::{SpawnerPhase, SpawnerState};

const BLOCKED_COLOR: Color = Color::srgb(0.95, 0.2, 0.2);

pub fn plugin(app: &mut App) {
    app.add_systems(Update, draw_spawn_regions);
}

/// Follows the live transform, so moving a spawner in the scene moves its outline too.
fn draw_spawn_regions(
    mut gizmos: Gizmos,
    tunables: Res<Tunables>,
    q_spawners: Query<(&Spawner, &Transform, Option<&SpawnerState>)>,
) {
    if !tunables.draw_spawn_regions {
        return;
    }
    for (spawner, tf, state) in &q_spawners {
        let Ok(region) = spawner.region(tf.translation) else {
            continue;
        };
        let color = match state.map(SpawnerState::phase) {
            Some(SpawnerPhase::Obstructed) => BLOCKED_COLOR,
            _ => spawner.draw_color,
        };
        // Unit cube stretched over the area.
        let outline = Transform::from_translation(region.center()).with_scale(region.size());
        gizmos.cube(outline, color);
    }
}
