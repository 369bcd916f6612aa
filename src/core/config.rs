//! Gameplay tuning loaded from an external RON file.
//!
//! All speeds are in pixels per frame and all timers are frame counts, so the
//! simulation behaves the same regardless of how long a frame took.

use bevy::prelude::*;
use serde::Deserialize;
use std::fs;

/// Where `Tuning::load` looks for overrides.
pub const TUNING_PATH: &str = "assets/data/tuning.ron";

/// Gameplay constants. Missing fields in the RON file keep their defaults.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // Player movement
    pub move_speed: f32,
    pub climb_speed: f32,
    pub jump_speed: f32,
    pub gravity: f32,
    /// Distance below the feet that still counts as ground for jumping
    pub jump_tolerance: f32,
    /// Distance below the feet that counts as ground for the climbing decision
    pub ground_probe: f32,
    pub player_half_size: (f32, f32),
    // Shooting
    pub bullet_speed: f32,
    pub bullet_damage: i32,
    /// Frames between two shots
    pub shoot_cooldown: u32,
    /// Frames a projectile lives before it is discarded
    pub projectile_lifetime: u32,
    pub projectile_half_size: (f32, f32),
    // Level flow
    pub skulls_to_open_door: u32,
    pub final_level: u32,
    // Camera
    /// Fraction of the remaining distance the camera covers each frame
    pub camera_smoothing: f32,
    pub viewport: (f32, f32),
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            move_speed: 7.0,
            climb_speed: 7.0,
            jump_speed: 15.0,
            gravity: 1.2,
            jump_tolerance: 10.0,
            ground_probe: 5.0,
            player_half_size: (20.0, 32.0),
            bullet_speed: 30.0,
            bullet_damage: 5,
            shoot_cooldown: 15,
            projectile_lifetime: 120,
            projectile_half_size: (10.0, 4.0),
            skulls_to_open_door: 3,
            final_level: 3,
            camera_smoothing: 0.2,
            viewport: (1110.0, 550.0),
        }
    }
}

impl Tuning {
    pub fn player_extents(&self) -> Vec2 {
        Vec2::new(self.player_half_size.0, self.player_half_size.1)
    }

    pub fn projectile_extents(&self) -> Vec2 {
        Vec2::new(self.projectile_half_size.0, self.projectile_half_size.1)
    }

    pub fn viewport_size(&self) -> Vec2 {
        Vec2::new(self.viewport.0, self.viewport.1)
    }

    /// Parse tuning from RON text.
    pub fn from_ron(contents: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(contents)
    }

    /// Load tuning from `TUNING_PATH`, falling back to defaults.
    pub fn load() -> Self {
        match fs::read_to_string(TUNING_PATH) {
            Ok(contents) => match Self::from_ron(&contents) {
                Ok(tuning) => {
                    info!("Loaded tuning from {}", TUNING_PATH);
                    tuning
                }
                Err(e) => {
                    error!("Failed to parse {}: {}. Using defaults.", TUNING_PATH, e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Could not read {}: {}. Using defaults.", TUNING_PATH, e);
                Self::default()
            }
        }
    }
}

/// System to load tuning at startup.
pub fn load_tuning(mut commands: Commands) {
    commands.insert_resource(Tuning::load());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let tuning = Tuning::from_ron("(gravity: 2.0, final_level: 5)").unwrap();
        assert_eq!(tuning.gravity, 2.0);
        assert_eq!(tuning.final_level, 5);
        assert_eq!(tuning.jump_speed, 15.0);
        assert_eq!(tuning.shoot_cooldown, 15);
    }

    #[test]
    fn shipped_tuning_file_parses() {
        let contents = include_str!("../../assets/data/tuning.ron");
        let tuning = Tuning::from_ron(contents).unwrap();
        assert_eq!(tuning.skulls_to_open_door, 3);
        assert_eq!(tuning.viewport_size(), Vec2::new(1110.0, 550.0));
    }
}
