//! UI plugin - screens and HUD.

use bevy::prelude::*;

use super::hud;
use super::screens::*;
use crate::core::GameState;

/// UI plugin - handles all user interface.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        hud::setup_hud_systems(app);

        app
            .add_systems(OnEnter(GameState::MainMenu), setup_main_menu)
            .add_systems(OnExit(GameState::MainMenu), cleanup_screen)
            .add_systems(OnEnter(GameState::Instructions), setup_instructions)
            .add_systems(OnExit(GameState::Instructions), cleanup_screen)
            .add_systems(OnEnter(GameState::GameComplete), setup_end_screen)
            .add_systems(OnExit(GameState::GameComplete), cleanup_screen)
            .add_systems(
                Update,
                screen_buttons.run_if(not(in_state(GameState::InGame))),
            )
            .add_systems(Update, show_end_screen.run_if(in_state(GameState::InGame)));
    }
}
