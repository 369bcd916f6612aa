//! Level construction from data definitions.

use bevy::prelude::*;

use super::components::*;
use super::data::{LevelDefinition, TileRect};
use crate::core::{report_fault, SimulationFault};
use crate::enemies::{spawn_enemy, EnemyRegistry};
use crate::physics::{Collider, Ladder, MovingPlatform, Solid, Velocity};

/// Build a level from a level definition and return the player start.
///
/// Enemies whose kind can't be resolved are skipped and reported.
pub fn build_level(
    commands: &mut Commands,
    level: &LevelDefinition,
    enemy_registry: &EnemyRegistry,
    faults: &mut EventWriter<SimulationFault>,
) -> Vec2 {
    let tile_size = level.tile_size;

    for rect in &level.solids {
        spawn_tile_box(commands, rect, tile_size, (Solid, Name::new("Solid")));
    }
    for rect in &level.ladders {
        spawn_tile_box(commands, rect, tile_size, (Ladder, Name::new("Ladder")));
    }
    for rect in &level.hazards {
        spawn_tile_box(commands, rect, tile_size, (Hazard, Name::new("Hazard")));
    }
    for rect in &level.doors {
        spawn_tile_box(commands, rect, tile_size, (Door, Name::new("Door")));
    }
    for rect in &level.coins {
        spawn_tile_box(commands, rect, tile_size, (Coin, Name::new("Skull")));
    }
    for rect in &level.checkpoints {
        spawn_tile_box(commands, rect, tile_size, (Checkpoint, Name::new("Checkpoint")));
    }

    for platform in &level.moving_platforms {
        spawn_tile_box(
            commands,
            &platform.rect,
            tile_size,
            (
                MovingPlatform {
                    bounds: platform.bounds(),
                },
                Velocity(Vec2::new(platform.velocity.0, platform.velocity.1)),
                Name::new("Moving Platform"),
            ),
        );
    }

    let mut spawned = 0;
    for spawn in &level.enemies {
        match spawn_enemy(commands, enemy_registry, spawn, tile_size) {
            Ok(_) => spawned += 1,
            Err(e) => report_fault(faults, e),
        }
    }

    info!(
        "Built level: {} solids, {} platforms, {} ladders, {} skulls, {}/{} enemies",
        level.solids.len(),
        level.moving_platforms.len(),
        level.ladders.len(),
        level.coins.len(),
        spawned,
        level.enemies.len()
    );

    level.start_position()
}

/// Spawn a box covering `rect` with the given role components.
fn spawn_tile_box(commands: &mut Commands, rect: &TileRect, tile_size: f32, role: impl Bundle) {
    let (center, half_size) = rect.world_box(tile_size);
    commands.spawn((
        role,
        Transform::from_translation(center.extend(0.0)),
        Collider::new(half_size),
        LevelEntity,
    ));
}
