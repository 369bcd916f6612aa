//! Viewport follow.
//!
//! The offset is the world position of the viewport's bottom-left corner.
//! It never goes below the level origin, so the view stops at the left and
//! bottom edges of the level.

use bevy::prelude::*;

use crate::core::Tuning;
use crate::player::Player;

/// Current camera offset.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct CameraRig {
    pub offset: Vec2,
}

impl CameraRig {
    /// Jump straight to the offset that centers `focus`.
    pub fn snap_to(&mut self, focus: Vec2, viewport: Vec2) {
        self.offset = camera_target(focus, viewport);
    }

    /// Move a fraction of the way toward the offset that centers `focus`.
    pub fn follow(&mut self, focus: Vec2, viewport: Vec2, smoothing: f32) {
        self.offset = ease(self.offset, camera_target(focus, viewport), smoothing);
    }

    /// World-space center of the view.
    pub fn view_center(&self, viewport: Vec2) -> Vec2 {
        self.offset + viewport / 2.0
    }
}

/// Offset that puts `focus` in the middle of the view, clamped at the origin.
pub fn camera_target(focus: Vec2, viewport: Vec2) -> Vec2 {
    (focus - viewport / 2.0).max(Vec2::ZERO)
}

pub fn ease(from: Vec2, to: Vec2, fraction: f32) -> Vec2 {
    from + (to - from) * fraction
}

/// Ease the camera toward the player.
pub fn track_player(
    tuning: Res<Tuning>,
    mut rig: ResMut<CameraRig>,
    player: Query<&Transform, With<Player>>,
) {
    let Ok(transform) = player.get_single() else {
        return;
    };
    rig.follow(
        transform.translation.truncate(),
        tuning.viewport_size(),
        tuning.camera_smoothing,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Vec2 = Vec2::new(1110.0, 550.0);

    #[test]
    fn target_clamps_near_origin() {
        assert_eq!(camera_target(Vec2::new(100.0, 50.0), VIEWPORT), Vec2::ZERO);
        assert_eq!(
            camera_target(Vec2::new(1000.0, 50.0), VIEWPORT),
            Vec2::new(445.0, 0.0)
        );
    }

    #[test]
    fn follow_covers_a_fifth_per_frame() {
        let mut rig = CameraRig::default();
        rig.follow(Vec2::new(1555.0, 1275.0), VIEWPORT, 0.2);
        assert_eq!(rig.offset, Vec2::new(200.0, 200.0));
        rig.follow(Vec2::new(1555.0, 1275.0), VIEWPORT, 0.2);
        assert_eq!(rig.offset, Vec2::new(360.0, 360.0));
    }

    #[test]
    fn snap_lands_on_target() {
        let mut rig = CameraRig {
            offset: Vec2::new(900.0, 900.0),
        };
        rig.snap_to(Vec2::new(610.0, 100.0), VIEWPORT);
        assert_eq!(rig.offset, Vec2::new(55.0, 0.0));
        assert_eq!(rig.view_center(VIEWPORT), Vec2::new(610.0, 275.0));
    }
}
