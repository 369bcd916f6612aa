//! Player plugin - control state, movement intent, and ladder flags.

use bevy::prelude::*;

use super::controls::*;
use super::input::read_keyboard;
use crate::core::{FrameSet, GameState};
use crate::physics::{move_platforms, step_dynamic_bodies};

/// Player plugin - headless part of player handling.
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app
            .init_resource::<ControlState>()
            .add_systems(OnEnter(GameState::InGame), reset_controls)
            .add_systems(Update, apply_control_events.in_set(FrameSet::Input))
            .add_systems(
                Update,
                (
                    drive_player.before(move_platforms),
                    update_ladder_flags.after(step_dynamic_bodies),
                )
                    .in_set(FrameSet::Physics),
            );
    }
}

/// Keyboard plugin - feeds real key presses into the simulation.
pub struct KeyboardInputPlugin;

impl Plugin for KeyboardInputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            read_keyboard
                .before(FrameSet::Input)
                .run_if(in_state(GameState::InGame)),
        );
    }
}

/// Start every run with no keys held.
fn reset_controls(mut controls: ResMut<ControlState>) {
    *controls = ControlState::default();
}
