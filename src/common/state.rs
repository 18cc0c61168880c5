//! Global state machine.
//!
//! Scene entities (spawners, player, floor) are scoped to `InGame`.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, States, Default)]
pub enum GameState {
    #[default]
    InGame,
}
