//! Camera plugin - viewport follow.

use bevy::prelude::*;

use super::rig::{track_player, CameraRig};
use crate::core::FrameSet;

/// Camera plugin - keeps `CameraRig` following the player.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraRig>()
            .add_systems(Update, track_player.in_set(FrameSet::Camera));
    }
}
