//! Application and encounter state definitions.
//!
//! `GameState` decides which screen is active and therefore which systems
//! run. `EncounterPhase` is the level controller's own state machine; it is a
//! plain resource so a transition detected mid-frame takes effect for the
//! remaining systems of that same frame.

use bevy::prelude::*;

/// Top-level application flow.
///
/// - Start on the `MainMenu`
/// - `Instructions` explains the controls
/// - `InGame` runs the simulation
/// - `GameComplete` shows the end screen after the final door
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum GameState {
    /// Title screen
    #[default]
    MainMenu,
    /// Controls overview shown before a run
    Instructions,
    /// Active gameplay
    InGame,
    /// Final door cleared
    GameComplete,
}

/// Level/encounter controller state.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EncounterPhase {
    /// Normal play: physics, combat and contacts are resolved each frame.
    #[default]
    Playing,
    /// The door was cleared and the next level is being built.
    LevelTransition,
    /// The door of the final level was cleared. Terminal for this run.
    GameComplete,
}

/// Run condition: the encounter controller is in `Playing`.
pub fn encounter_playing(phase: Res<EncounterPhase>) -> bool {
    *phase == EncounterPhase::Playing
}
