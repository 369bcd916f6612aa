//! Events crossing the boundary between the simulation and its collaborators.
//!
//! Input arrives as `ControlEvent`s. Everything the simulation wants the
//! outside world to do (play a sound, show the end screen, rebuild a level)
//! leaves as an event, so the core never touches audio or UI directly.

use bevy::prelude::*;

use super::error::SimulationError;

/// Logical keys the simulation understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlKey {
    Up,
    Down,
    Left,
    Right,
    /// Behaves like `Up`: jumps on the ground, climbs on a ladder.
    Jump,
    Shoot,
}

/// A key was pressed or released.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlEvent {
    pub key: ControlKey,
    pub pressed: bool,
}

impl ControlEvent {
    pub fn pressed(key: ControlKey) -> Self {
        Self { key, pressed: true }
    }

    pub fn released(key: ControlKey) -> Self {
        Self { key, pressed: false }
    }
}

/// Sound effects the simulation can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    Coin,
    Jump,
    Death,
    Shoot,
    Hit,
}

/// Sent whenever a sound effect should play.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaySound(pub SoundCue);

/// Sent when the door was cleared and the given level must be built.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelReloadRequested {
    /// Index of the level to build (1-based)
    pub level: u32,
}

/// Sent once when the final door is cleared.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShowEndScreen;

/// A recoverable error detected while stepping the simulation.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct SimulationFault(pub SimulationError);
