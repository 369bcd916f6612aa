//! World module - level data, level building, and the encounter controller.

mod builder;
mod components;
pub mod data;
mod encounter;
mod error;
mod plugin;

pub use builder::build_level;
pub use components::*;
pub use data::{EnemySpawnDef, LevelDefinition, LevelRegistry, MovingPlatformDef, TileRect};
pub use encounter::{
    advance_level, claim_checkpoints, cleanup_run, collect_coins, resolve_player_contacts,
    setup_run, ActiveCheckpoint, RunState,
};
pub use error::DataLoadError;
pub use plugin::{DataLoadingPlugin, WorldPlugin};
