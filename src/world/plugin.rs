//! World plugin - level lifecycle and encounter resolution.

use bevy::prelude::*;

use super::data::{load_level_definitions, LevelRegistry};
use super::encounter::*;
use crate::core::{load_tuning, FrameSet, GameState};
use crate::enemies::load_enemy_definitions;

/// World plugin - builds levels and resolves what the player touches.
pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LevelRegistry>()
            .init_resource::<RunState>()
            .init_resource::<ActiveCheckpoint>()
            .add_systems(OnEnter(GameState::InGame), setup_run)
            .add_systems(OnExit(GameState::InGame), cleanup_run)
            .add_systems(Update, resolve_player_contacts.in_set(FrameSet::Contacts))
            .add_systems(Update, advance_level.in_set(FrameSet::Transition))
            .add_systems(Update, collect_coins.in_set(FrameSet::Collectibles))
            .add_systems(Update, claim_checkpoints.in_set(FrameSet::Checkpoints));
    }
}

/// Loads tuning, level and enemy data from `assets/data` at startup.
pub struct DataLoadingPlugin;

impl Plugin for DataLoadingPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Startup,
            (load_tuning, load_level_definitions, load_enemy_definitions),
        );
    }
}
