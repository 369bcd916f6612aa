//! UI module - menus, instructions, end screen and HUD.

mod hud;
mod plugin;
mod screens;

pub use hud::{death_label, skull_label};
pub use plugin::UiPlugin;
