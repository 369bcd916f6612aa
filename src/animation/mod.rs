//! Animation module - facing and pose selection for animated actors.

mod plugin;
mod state;
mod systems;

pub use plugin::AnimationPlugin;
pub use state::*;
pub use systems::{animate_enemies, animate_player};
