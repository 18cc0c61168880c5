//! Occupancy check for a spawn region.
//!
//! Works directly on collider AABBs built from `Transform`, not on the physics
//! BVH: a spawner and the obstacle blocking it are often spawned on the same
//! frame, before the first physics step has indexed anything.

use avian3d::prelude::*;
use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use super::region::{Bounds, SpawnRegion};

pub trait ObstructionProbe {
    /// Whether any collider in `layers`, other than `ignore`, overlaps `region`.
    fn is_obstructed(&self, region: &SpawnRegion, layers: LayerMask, ignore: &[Entity]) -> bool;
}

/// Live colliders, with an optional parent for one level of nesting.
#[derive(SystemParam)]
pub struct SceneColliders<'w, 's> {
    colliders: Query<
        'w,
        's,
        (
            Entity,
            &'static Collider,
            &'static Transform,
            Option<&'static CollisionLayers>,
            Option<&'static ChildOf>,
        ),
        Without<ColliderDisabled>,
    >,
    parents: Query<'w, 's, &'static Transform>,
}

impl ObstructionProbe for SceneColliders<'_, '_> {
    fn is_obstructed(&self, region: &SpawnRegion, layers: LayerMask, ignore: &[Entity]) -> bool {
        self.colliders.iter().any(|(entity, collider, local, collision_layers, child_of)| {
            if ignore.contains(&entity) {
                return false;
            }
            let memberships = collision_layers.copied().unwrap_or_default().memberships;
            if memberships.0 & layers.0 == 0 {
                return false;
            }
            let world = child_of
                .and_then(|c| self.parents.get(c.parent()).ok())
                .map_or(*local, |parent| parent.mul_transform(*local));
            overlaps(region, Bounds::from_collider(collider, &world))
        })
    }
}

/// Strict overlap: touching faces do not count, so a floor under the area is not an obstacle.
pub fn overlaps(region: &SpawnRegion, b: Bounds) -> bool {
    b.min.cmplt(region.max()).all() && b.max.cmpgt(region.min()).all()
}
