//! Region-bound loot spawners for a Bevy 3D scene.
//!
//! Integration tests in `tests/` are compiled as separate crates;
//! this library is the public surface they import.

pub mod common;
pub mod game;
pub mod plugins;
