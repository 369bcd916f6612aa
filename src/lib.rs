//! Skull Realm - a 2D side-scrolling platformer built on Bevy.
//!
//! Collect three skulls to open the door of each level, dodge guardians and
//! hazards, and shoot your way through three levels.
//!
//! # Architecture
//!
//! The game is organized into plugins, each handling a specific aspect:
//!
//! - **Core**: Game states, boundary events, tuning, frame ordering
//! - **Player**: Control state, movement intent, ladder flags
//! - **Physics**: Gravity, box collision, ladders, moving platforms
//! - **Animation**: Facing and pose selection
//! - **Combat**: Shooting, projectiles, damage
//! - **Enemies**: Enemy kinds, stats, patrols
//! - **World**: Level data, level building, encounter resolution
//! - **Camera**: Smoothed viewport follow
//! - **Rendering**: Sprites and the 2D camera
//! - **Audio**: Music and sound effects
//! - **UI**: Menus, instructions, end screen, HUD
//!
//! `SimulationPlugin` holds everything that runs without a window, so the
//! game can be stepped frame by frame in tests.

pub mod animation;
pub mod audio;
pub mod camera;
pub mod combat;
pub mod core;
pub mod enemies;
pub mod physics;
pub mod player;
pub mod rendering;
pub mod ui;
pub mod world;

use bevy::prelude::*;

/// The game's rules and state, without input devices, rendering or audio.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app
            // Core systems (must be first)
            .add_plugins(core::CorePlugin)
            .add_plugins(player::PlayerPlugin)
            .add_plugins(physics::PhysicsPlugin)
            .add_plugins(animation::AnimationPlugin)
            .add_plugins(combat::CombatPlugin)
            .add_plugins(enemies::EnemyPlugin)
            .add_plugins(world::WorldPlugin)
            .add_plugins(camera::CameraPlugin);
    }
}

/// Main game plugin that adds all sub-plugins.
pub struct SkullRealmPlugin;

impl Plugin for SkullRealmPlugin {
    fn build(&self, app: &mut App) {
        app
            .add_plugins(SimulationPlugin)
            .add_plugins(world::DataLoadingPlugin)
            .add_plugins(player::KeyboardInputPlugin)
            .add_plugins(rendering::RenderingPlugin)
            .add_plugins(audio::AudioPlugin)
            .add_plugins(ui::UiPlugin);
    }
}
