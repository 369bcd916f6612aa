//! Combat plugin - projectile lifecycle.

use bevy::prelude::*;

use super::systems::*;
use crate::core::FrameSet;

/// Combat plugin - fires, moves and resolves projectiles in order.
pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (fire_projectiles, advance_projectiles, resolve_projectile_hits)
                .chain()
                .in_set(FrameSet::Projectiles),
        );
    }
}
