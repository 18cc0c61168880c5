fn main() {
    loot_spawner::game::run();
}
