//! Runtime state of one spawner: the eligible items, the current selection,
//! the pending cooldown and the RNG that drives selection.
//!
//! ```text
//!   init ──► Obstructed            (never left automatically)
//!     │
//!     ├────► Empty                 (terminal)
//!     │
//!     └────► Active ──pickup──► CoolingDown ──expiry──► Active
//! ```
//!
//! Nothing here touches the ECS world. Methods return the entity whose active
//! flag must change and the systems apply it, so every transition is testable
//! with plain values.

use std::time::Duration;

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::error::SpawnerError;
use super::region::{Bounds, SpawnRegion};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SpawnerPhase {
    /// No child fits the region.
    Empty,
    /// One item is active and can be picked up.
    Active,
    /// The last item was picked up; waiting for the respawn delay.
    CoolingDown,
    /// Something occupied the region at init; nothing will spawn until reset.
    Obstructed,
}

#[derive(Component, Debug)]
pub struct SpawnerState {
    region: SpawnRegion,
    delay: Duration,
    eligible: Vec<Entity>,
    current: Option<Entity>,
    phase: SpawnerPhase,
    cooldown: Option<Timer>,
    rng: ChaCha8Rng,
}

impl SpawnerState {
    pub fn new(region: SpawnRegion, delay: Duration, seed: u64) -> Self {
        Self {
            region,
            delay,
            eligible: Vec::new(),
            current: None,
            phase: SpawnerPhase::Empty,
            cooldown: None,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Filter `children` down to the items that fit, then try the first spawn.
    ///
    /// The caller deactivates every child before applying the returned selection.
    pub fn initialize<I>(&mut self, children: I, obstructed: bool) -> Option<Entity>
    where
        I: IntoIterator<Item = (Entity, Option<Bounds>)>,
    {
        let region = self.region;
        self.eligible = children
            .into_iter()
            .filter(|(_, bounds)| region.fits(*bounds))
            .map(|(e, _)| e)
            .collect();
        self.current = None;
        self.cancel_cooldown();

        if obstructed {
            self.phase = SpawnerPhase::Obstructed;
            return None;
        }
        self.spawn_random_loot()
    }

    /// Take the current item out of play and start the respawn delay.
    ///
    /// Returns the item that must be deactivated.
    pub fn pickup_item(&mut self) -> Result<Entity, SpawnerError> {
        let Some(item) = self.current.take() else {
            return Err(SpawnerError::NothingActive { phase: self.phase });
        };
        self.phase = SpawnerPhase::CoolingDown;
        self.cooldown = Some(Timer::new(self.delay, TimerMode::Once));
        Ok(item)
    }

    /// Advance the pending cooldown; on expiry pick the next item.
    pub fn tick(&mut self, delta: Duration) -> Option<Entity> {
        let timer = self.cooldown.as_mut()?;
        if !timer.tick(delta).just_finished() {
            return None;
        }
        self.cooldown = None;
        self.spawn_random_loot()
    }

    /// Uniformly pick one eligible item (with replacement) as the current one.
    ///
    /// With no eligible items this leaves the spawner `Empty` and returns `None`.
    /// Any previous selection is replaced; callers only roll when nothing is active.
    pub fn spawn_random_loot(&mut self) -> Option<Entity> {
        if self.eligible.is_empty() {
            self.current = None;
            self.phase = SpawnerPhase::Empty;
            return None;
        }
        let index = self.rng.random_range(0..self.eligible.len());
        let item = self.eligible[index];
        self.current = Some(item);
        self.phase = SpawnerPhase::Active;
        Some(item)
    }

    /// Drop the pending respawn, if any. A dropped timer never fires.
    pub fn cancel_cooldown(&mut self) {
        self.cooldown = None;
    }

    #[inline]
    pub fn region(&self) -> &SpawnRegion {
        &self.region
    }

    #[inline]
    pub fn phase(&self) -> SpawnerPhase {
        self.phase
    }

    #[inline]
    pub fn current(&self) -> Option<Entity> {
        self.current
    }

    #[inline]
    pub fn eligible(&self) -> &[Entity] {
        &self.eligible
    }

    pub fn cooldown_remaining(&self) -> Option<Duration> {
        self.cooldown.as_ref().map(Timer::remaining)
    }
}
