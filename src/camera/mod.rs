//! Camera module - smoothed viewport follow clamped at the level origin.

mod plugin;
mod rig;

pub use plugin::CameraPlugin;
pub use rig::{camera_target, ease, track_player, CameraRig};
