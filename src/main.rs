//! Skull Realm - Entry Point
//!
//! Controls:
//! - A/D or Left/Right: Walk
//! - W, Up or Space: Jump, climb up
//! - S or Down: Climb down
//! - Q: Shoot

use bevy::prelude::*;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Skull Realm".to_string(),
                resolution: (1110.0, 550.0).into(),
                resizable: false,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(skull_realm::SkullRealmPlugin)
        .run();
}
