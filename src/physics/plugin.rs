//! Physics plugin - platform motion and body integration.

use bevy::prelude::*;

use super::systems::*;
use crate::core::FrameSet;

/// Physics plugin - steps platforms, dynamic bodies and kinematic bodies.
pub struct PhysicsPlugin;

impl Plugin for PhysicsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (move_platforms, step_dynamic_bodies, integrate_kinematic)
                .chain()
                .in_set(FrameSet::Physics),
        );
    }
}
