//! Audio module - music and sound effects.

mod plugin;

pub use plugin::{cue_volume, AudioPlugin, MusicChannel, SoundLibrary};
