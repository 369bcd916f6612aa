//! Core module - states, events, tuning, and the per-frame system ordering.
//!
//! Everything else in the simulation builds on these definitions.

mod config;
mod error;
mod events;
mod plugin;
mod states;

pub use config::*;
pub use error::*;
pub use events::*;
pub use plugin::{CorePlugin, FrameSet};
pub use states::*;
