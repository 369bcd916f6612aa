//! Physics module - gravity, box collision, ladders, and moving platforms.

pub mod collision;
mod components;
mod plugin;
mod systems;

pub use components::*;
pub use plugin::PhysicsPlugin;
pub use systems::{collect_boxes, integrate_kinematic, move_platforms, step_dynamic_bodies};
