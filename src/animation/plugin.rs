//! Animation plugin - pose selection after physics has settled.

use bevy::prelude::*;

use super::systems::*;
use crate::core::FrameSet;

/// Animation plugin - runs once per frame in `FrameSet::Animation`.
pub struct AnimationPlugin;

impl Plugin for AnimationPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (animate_player, animate_enemies).in_set(FrameSet::Animation),
        );
    }
}
