//! In-game HUD - skull and death counters.

use bevy::prelude::*;

use crate::core::{GameState, Tuning};
use crate::world::RunState;

/// Marker for HUD root entity.
#[derive(Component)]
pub struct HudRoot;

/// Marker for the skull counter text.
#[derive(Component)]
pub struct SkullCounter;

/// Marker for the death counter text.
#[derive(Component)]
pub struct DeathCounter;

/// Setup HUD systems.
pub fn setup_hud_systems(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_hud)
        .add_systems(OnExit(GameState::InGame), cleanup_hud)
        .add_systems(
            Update,
            update_counters
                .run_if(in_state(GameState::InGame))
                .run_if(resource_changed::<RunState>),
        );
}

pub fn skull_label(score: u32, required: u32) -> String {
    format!("Skulls: {score}/{required}")
}

pub fn death_label(deaths: u32) -> String {
    format!("Deaths: {deaths}")
}

/// Spawn the HUD UI (top-left corner).
fn spawn_hud(mut commands: Commands, run: Res<RunState>, tuning: Res<Tuning>) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(10.0),
                left: Val::Px(10.0),
                flex_direction: FlexDirection::Column,
                ..default()
            },
            HudRoot,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(skull_label(run.score, tuning.skulls_to_open_door)),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                SkullCounter,
            ));
            parent.spawn((
                Text::new(death_label(run.deaths)),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                DeathCounter,
            ));
        });
}

#[allow(clippy::type_complexity)]
fn update_counters(
    run: Res<RunState>,
    tuning: Res<Tuning>,
    mut skulls: Query<&mut Text, (With<SkullCounter>, Without<DeathCounter>)>,
    mut deaths: Query<&mut Text, (With<DeathCounter>, Without<SkullCounter>)>,
) {
    for mut text in skulls.iter_mut() {
        text.0 = skull_label(run.score, tuning.skulls_to_open_door);
    }
    for mut text in deaths.iter_mut() {
        text.0 = death_label(run.deaths);
    }
}

/// Clean up HUD entities.
fn cleanup_hud(mut commands: Commands, query: Query<Entity, With<HudRoot>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels() {
        assert_eq!(skull_label(2, 3), "Skulls: 2/3");
        assert_eq!(death_label(11), "Deaths: 11");
    }
}
