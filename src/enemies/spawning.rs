//! Enemy spawning from level spawn descriptors.

use bevy::prelude::*;

use super::components::{Enemy, PatrolBounds};
use super::data::EnemyRegistry;
use crate::animation::{Animator, Facing};
use crate::combat::Health;
use crate::core::SimulationError;
use crate::physics::{Collider, Kinematic, Velocity};
use crate::world::{EnemySpawnDef, LevelEntity};

/// Spawn one enemy described by level data.
///
/// The enemy stands on the bottom edge of its tile, horizontally centered.
/// Descriptors naming a kind without stats are rejected and nothing is
/// spawned.
pub fn spawn_enemy(
    commands: &mut Commands,
    registry: &EnemyRegistry,
    spawn: &EnemySpawnDef,
    tile_size: f32,
) -> Result<Entity, SimulationError> {
    let (kind, definition) = registry.resolve(&spawn.kind)?;
    let half_size = definition.extents();

    let position = Vec2::new(
        (spawn.tile.0 as f32 + 0.5) * tile_size,
        spawn.tile.1 as f32 * tile_size + half_size.y,
    );
    let velocity = Vec2::new(spawn.change_x.unwrap_or(0.0), 0.0);

    let entity = commands
        .spawn((
            Enemy,
            kind,
            Name::new(definition.name.clone()),
            Health::new(definition.max_health),
            PatrolBounds {
                left: spawn.boundary_left,
                right: spawn.boundary_right,
            },
            Transform::from_translation(position.extend(1.0)),
            Velocity(velocity),
            Collider::new(half_size),
            Kinematic,
            Facing::default().after(velocity.x),
            Animator::with_throttle(definition.walk_throttle),
            LevelEntity,
        ))
        .id();

    Ok(entity)
}
