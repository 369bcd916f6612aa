//! Level entity markers.

use bevy::prelude::*;

/// Marker for everything that belongs to the current level and is cleared
/// when the level is rebuilt.
#[derive(Component, Debug, Default)]
pub struct LevelEntity;

/// Sends the player back to the active checkpoint on contact.
#[derive(Component, Debug, Default)]
pub struct Hazard;

/// Leads to the next level once enough skulls are collected.
#[derive(Component, Debug, Default)]
pub struct Door;

/// Collectible skull.
#[derive(Component, Debug, Default)]
pub struct Coin;

/// Becomes the respawn anchor when touched, then disappears.
#[derive(Component, Debug, Default)]
pub struct Checkpoint;
