//! Rendering plugin - 2D camera and sprites.

use bevy::prelude::*;

use super::sprites::*;
use crate::camera::CameraRig;
use crate::core::{FrameSet, GameState, Tuning};

/// Rendering plugin - draws the level and actors and moves the view.
pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PoseTextures>()
            .insert_resource(ClearColor(Color::srgb(0.08, 0.07, 0.1)))
            .add_systems(Startup, spawn_camera)
            .add_systems(
                Update,
                (
                    decorate_geometry,
                    decorate_actors,
                    update_actor_sprites,
                    apply_camera_rig,
                )
                    .chain()
                    .after(FrameSet::Camera)
                    .run_if(in_state(GameState::InGame)),
            )
            .add_systems(Update, report_missing_images)
            .add_systems(OnExit(GameState::InGame), reset_camera);
    }
}

/// Marker for the one camera the game renders through.
#[derive(Component)]
pub struct GameCamera;

fn spawn_camera(mut commands: Commands) {
    commands.spawn((Camera2d, GameCamera));
}

/// Center the camera on the rig's view.
fn apply_camera_rig(
    rig: Res<CameraRig>,
    tuning: Res<Tuning>,
    mut cameras: Query<&mut Transform, With<GameCamera>>,
) {
    let center = rig.view_center(tuning.viewport_size());
    for mut transform in cameras.iter_mut() {
        transform.translation.x = center.x;
        transform.translation.y = center.y;
    }
}

/// Menus are laid out around the origin.
fn reset_camera(mut cameras: Query<&mut Transform, With<GameCamera>>) {
    for mut transform in cameras.iter_mut() {
        transform.translation.x = 0.0;
        transform.translation.y = 0.0;
    }
}
