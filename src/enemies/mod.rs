//! Enemies module - enemy kinds, stats, spawning, and patrols.

mod components;
pub mod data;
mod patrol;
mod plugin;
mod spawning;

pub use components::*;
pub use data::{load_enemy_definitions, EnemyDefinition, EnemyRegistry};
pub use patrol::patrol_enemies;
pub use plugin::EnemyPlugin;
pub use spawning::spawn_enemy;
