//! Spawn region geometry: the box a spawner fills, and the containment test
//! that decides which items are allowed to appear in it.

use avian3d::prelude::*;
use bevy::prelude::*;

use super::error::SpawnerError;

/// Subdivisions used when a rounded collider shape must be rescaled.
const SCALE_DETAIL: u32 = 10;

/// World-space axis-aligned bounds of a candidate item.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl Bounds {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
        let half = size * 0.5;
        Self { min: center - half, max: center + half }
    }

    /// AABB of `collider` placed at `placement`, including its scale.
    ///
    /// The scale is applied to a copy and set absolutely, so the result is the
    /// same whether or not physics has already scaled the collider.
    pub fn from_collider(collider: &Collider, placement: &Transform) -> Self {
        let aabb = if collider.scale() == placement.scale {
            collider.aabb(placement.translation, placement.rotation)
        } else {
            let mut scaled = collider.clone();
            scaled.set_scale(placement.scale, SCALE_DETAIL);
            scaled.aabb(placement.translation, placement.rotation)
        };
        Self { min: aabb.min, max: aabb.max }
    }
}

/// Axis-aligned box anchored at its bottom-centre.
///
/// Rotation of the anchor is ignored: the region is always world-axis aligned.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpawnRegion {
    center: Vec3,
    size: Vec3,
}

impl SpawnRegion {
    /// Build the region whose bottom-centre sits on `anchor`.
    pub fn from_anchor(anchor: Vec3, size: Vec3) -> Result<Self, SpawnerError> {
        if !size.is_finite() || size.cmplt(Vec3::ZERO).any() {
            return Err(SpawnerError::InvalidAreaSize { size });
        }
        Ok(Self { center: anchor + Vec3::Y * (size.y * 0.5), size })
    }

    #[inline]
    pub fn center(&self) -> Vec3 {
        self.center
    }

    #[inline]
    pub fn size(&self) -> Vec3 {
        self.size
    }

    #[inline]
    pub fn min(&self) -> Vec3 {
        self.center - self.size * 0.5
    }

    #[inline]
    pub fn max(&self) -> Vec3 {
        self.center + self.size * 0.5
    }

    /// Inclusive point containment.
    #[inline]
    pub fn contains(&self, point: Vec3) -> bool {
        point.cmpge(self.min()).all() && point.cmple(self.max()).all()
    }

    /// Whether an item with these bounds may be spawned here.
    ///
    /// Items without a bounding volume never fit.
    pub fn fits(&self, bounds: Option<Bounds>) -> bool {
        match bounds {
            Some(b) => self.contains(b.min) && self.contains(b.max),
            None => false,
        }
    }
}
