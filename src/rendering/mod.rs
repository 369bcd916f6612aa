//! Rendering module - camera placement and sprites.

mod plugin;
mod sprites;

pub use plugin::{GameCamera, RenderingPlugin};
pub use sprites::{PoseTextures, SpriteSet, TileStyle};
