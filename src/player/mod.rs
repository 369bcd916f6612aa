//! Player module - player entity, controls, and ladder state.

mod components;
mod controls;
mod input;
mod plugin;

pub use components::*;
pub use controls::{apply_control_events, drive_player, update_ladder_flags, ControlState};
pub use plugin::{KeyboardInputPlugin, PlayerPlugin};
