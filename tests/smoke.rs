mod common;

use bevy::prelude::*;
use loot_spawner::common::state::GameState;
use loot_spawner::common::tunables::Tunables;

#[test]
fn boots_and_ticks() {
    // Configure your headless game (states + gameplay plugins)
    let mut app = common::app_headless();

    for _ in 0..3 {
        app.update();
    }
}

#[test]
fn headless_app_is_in_game_with_tunables() {
    let mut app = common::app_headless();
    app.update();

    assert_eq!(*app.world().resource::<State<GameState>>().get(), GameState::InGame);
    assert!(app.world().get_resource::<Tunables>().is_some());
}
