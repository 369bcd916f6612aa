//! Level/encounter controller.
//!
//! Resolves what the player touched this frame: enemies and hazards send the
//! player back to the checkpoint, the door advances the run, skulls score and
//! checkpoints move the respawn anchor.

use bevy::ecs::query::QueryFilter;
use bevy::math::bounding::Aabb2d;
use bevy::prelude::*;

use super::builder::build_level;
use super::components::*;
use super::data::LevelRegistry;
use crate::camera::CameraRig;
use crate::core::*;
use crate::enemies::{Enemy, EnemyRegistry};
use crate::physics::collision::overlaps;
use crate::physics::{Collider, Velocity};
use crate::player::{player_bundle, spawn_player, Player};

/// Progress of the current run.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunState {
    /// Skulls collected on the current level
    pub score: u32,
    /// Deaths over the whole session
    pub deaths: u32,
    /// 1-based index of the current level
    pub level: u32,
}

impl Default for RunState {
    fn default() -> Self {
        Self {
            score: 0,
            deaths: 0,
            level: 1,
        }
    }
}

/// Where the player respawns after a death.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct ActiveCheckpoint(pub Vec2);

/// Entities of `query` whose box overlaps `body`, with their centers.
fn touched<F: QueryFilter>(
    body: &Aabb2d,
    query: &Query<(Entity, &Transform, &Collider), F>,
) -> Vec<(Entity, Vec2)> {
    query
        .iter()
        .filter_map(|(entity, transform, collider)| {
            let center = transform.translation.truncate();
            overlaps(body, &collider.aabb(center)).then_some((entity, center))
        })
        .collect()
}

/// Build level `index` and put the player at its start.
///
/// Everything tagged `LevelEntity` is cleared first. The player is spawned
/// if there is none yet and reset in place otherwise.
#[allow(clippy::too_many_arguments)]
fn enter_level(
    commands: &mut Commands,
    index: u32,
    levels: &LevelRegistry,
    enemies: &EnemyRegistry,
    tuning: &Tuning,
    level_entities: &Query<Entity, With<LevelEntity>>,
    player: Option<Entity>,
    faults: &mut EventWriter<SimulationFault>,
) -> Result<Vec2, SimulationError> {
    let level = levels
        .get(index)
        .ok_or(SimulationError::InvalidLevelIndex(index))?;

    for entity in level_entities.iter() {
        commands.entity(entity).despawn_recursive();
    }

    info!("Building level {}", index);
    let start = build_level(commands, level, enemies, faults);

    match player {
        Some(player) => {
            commands.entity(player).insert(player_bundle(start, tuning));
        }
        None => {
            spawn_player(commands, start, tuning);
        }
    }

    Ok(start)
}

/// Start a fresh run at level 1. Deaths carry over from earlier runs.
#[allow(clippy::too_many_arguments)]
pub fn setup_run(
    mut commands: Commands,
    tuning: Res<Tuning>,
    levels: Res<LevelRegistry>,
    enemies: Res<EnemyRegistry>,
    mut run: ResMut<RunState>,
    mut checkpoint: ResMut<ActiveCheckpoint>,
    mut rig: ResMut<CameraRig>,
    mut phase: ResMut<EncounterPhase>,
    level_entities: Query<Entity, With<LevelEntity>>,
    player: Query<Entity, With<Player>>,
    mut faults: EventWriter<SimulationFault>,
) {
    run.level = 1;
    run.score = 0;

    match enter_level(
        &mut commands,
        run.level,
        &levels,
        &enemies,
        &tuning,
        &level_entities,
        player.get_single().ok(),
        &mut faults,
    ) {
        Ok(start) => {
            checkpoint.0 = start;
            rig.snap_to(start, tuning.viewport_size());
            *phase = EncounterPhase::Playing;
        }
        Err(e) => {
            report_fault(&mut faults, e);
            *phase = EncounterPhase::LevelTransition;
        }
    }
}

/// Remove the level and the player when leaving the game.
pub fn cleanup_run(
    mut commands: Commands,
    level_entities: Query<Entity, With<LevelEntity>>,
    player: Query<Entity, With<Player>>,
) {
    for entity in level_entities.iter().chain(player.iter()) {
        commands.entity(entity).despawn_recursive();
    }
}

/// Respawn the player on enemy or hazard contact, otherwise check the door.
#[allow(clippy::too_many_arguments)]
pub fn resolve_player_contacts(
    tuning: Res<Tuning>,
    checkpoint: Res<ActiveCheckpoint>,
    mut run: ResMut<RunState>,
    mut phase: ResMut<EncounterPhase>,
    mut player: Query<(&mut Transform, &mut Velocity, &Collider), With<Player>>,
    enemies: Query<(Entity, &Transform, &Collider), (With<Enemy>, Without<Player>)>,
    hazards: Query<(Entity, &Transform, &Collider), (With<Hazard>, Without<Player>)>,
    doors: Query<(Entity, &Transform, &Collider), (With<Door>, Without<Player>)>,
    mut sounds: EventWriter<PlaySound>,
    mut reloads: EventWriter<LevelReloadRequested>,
    mut end_screen: EventWriter<ShowEndScreen>,
) {
    let Ok((mut transform, mut velocity, collider)) = player.get_single_mut() else {
        return;
    };
    let body = collider.aabb(transform.translation.truncate());

    let lethal = !touched(&body, &enemies).is_empty() || !touched(&body, &hazards).is_empty();
    if lethal {
        **velocity = Vec2::ZERO;
        transform.translation.x = checkpoint.0.x;
        transform.translation.y = checkpoint.0.y;
        run.deaths += 1;
        sounds.send(PlaySound(SoundCue::Death));
        info!("Player died ({} deaths), back to checkpoint {:?}", run.deaths, checkpoint.0);
        return;
    }

    if touched(&body, &doors).is_empty() || run.score < tuning.skulls_to_open_door {
        return;
    }

    if run.level < tuning.final_level {
        *phase = EncounterPhase::LevelTransition;
        reloads.send(LevelReloadRequested {
            level: run.level + 1,
        });
        info!("Door cleared on level {}", run.level);
    } else if run.level == tuning.final_level {
        *phase = EncounterPhase::GameComplete;
        end_screen.send(ShowEndScreen);
        info!("Final door cleared after {} deaths", run.deaths);
    }
}

/// Build the requested level and resume play.
///
/// A missing level leaves the controller in `LevelTransition`.
#[allow(clippy::too_many_arguments)]
pub fn advance_level(
    mut commands: Commands,
    tuning: Res<Tuning>,
    levels: Res<LevelRegistry>,
    enemies: Res<EnemyRegistry>,
    mut requests: EventReader<LevelReloadRequested>,
    mut run: ResMut<RunState>,
    mut checkpoint: ResMut<ActiveCheckpoint>,
    mut rig: ResMut<CameraRig>,
    mut phase: ResMut<EncounterPhase>,
    level_entities: Query<Entity, With<LevelEntity>>,
    player: Query<Entity, With<Player>>,
    mut faults: EventWriter<SimulationFault>,
) {
    let Some(request) = requests.read().last().copied() else {
        return;
    };

    match enter_level(
        &mut commands,
        request.level,
        &levels,
        &enemies,
        &tuning,
        &level_entities,
        player.get_single().ok(),
        &mut faults,
    ) {
        Ok(start) => {
            run.level = request.level;
            run.score = 0;
            checkpoint.0 = start;
            rig.snap_to(start, tuning.viewport_size());
            *phase = EncounterPhase::Playing;
        }
        Err(e) => report_fault(&mut faults, e),
    }
}

/// Collect every skull the player overlaps.
pub fn collect_coins(
    mut commands: Commands,
    mut run: ResMut<RunState>,
    player: Query<(&Transform, &Collider), With<Player>>,
    coins: Query<(Entity, &Transform, &Collider), (With<Coin>, Without<Player>)>,
    mut sounds: EventWriter<PlaySound>,
) {
    let Ok((transform, collider)) = player.get_single() else {
        return;
    };
    let body = collider.aabb(transform.translation.truncate());

    for (coin, _) in touched(&body, &coins) {
        commands.entity(coin).despawn();
        run.score += 1;
        sounds.send(PlaySound(SoundCue::Coin));
    }
}

/// Move the respawn anchor to touched checkpoints and remove them.
pub fn claim_checkpoints(
    mut commands: Commands,
    mut active: ResMut<ActiveCheckpoint>,
    player: Query<(&Transform, &Collider), With<Player>>,
    checkpoints: Query<(Entity, &Transform, &Collider), (With<Checkpoint>, Without<Player>)>,
) {
    let Ok((transform, collider)) = player.get_single() else {
        return;
    };
    let body = collider.aabb(transform.translation.truncate());

    for (checkpoint, center) in touched(&body, &checkpoints) {
        active.0 = center;
        commands.entity(checkpoint).despawn();
        info!("Checkpoint reached at {:?}", center);
    }
}
