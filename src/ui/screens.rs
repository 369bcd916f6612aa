//! Title, instructions and end screens.

use bevy::prelude::*;

use crate::core::{GameState, ShowEndScreen};

const BUTTON_IDLE: Color = Color::srgb(0.15, 0.15, 0.2);
const BUTTON_HOVER: Color = Color::srgb(0.25, 0.25, 0.3);
const BUTTON_PRESSED: Color = Color::srgb(0.3, 0.3, 0.35);

/// Marker for every entity of the current screen.
#[derive(Component)]
pub struct ScreenUi;

/// What a screen button does.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenButton {
    StartGame,
    GotIt,
    GoAgain,
    Quit,
}

pub fn setup_main_menu(mut commands: Commands) {
    spawn_screen(
        &mut commands,
        "SKULL REALM",
        &["Collect three skulls on each level to open the door."],
        &[("Start Game", ScreenButton::StartGame)],
    );
}

pub fn setup_instructions(mut commands: Commands) {
    spawn_screen(
        &mut commands,
        "HOW TO PLAY",
        &[
            "A / D or Left / Right: walk",
            "W, Up or Space: jump, climb ladders",
            "S or Down: climb down",
            "Q: shoot",
            "Touching a guardian or a hazard sends you back to the last checkpoint.",
        ],
        &[("Got It!", ScreenButton::GotIt)],
    );
}

pub fn setup_end_screen(mut commands: Commands) {
    spawn_screen(
        &mut commands,
        "YOU ESCAPED",
        &["Every door is open."],
        &[("Go again", ScreenButton::GoAgain), ("Quit", ScreenButton::Quit)],
    );
}

/// Full-window column with a title, some lines of text and buttons.
fn spawn_screen(
    commands: &mut Commands,
    title: &str,
    lines: &[&str],
    buttons: &[(&str, ScreenButton)],
) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(Color::srgb(0.05, 0.05, 0.08)),
            ScreenUi,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(title),
                TextFont {
                    font_size: 64.0,
                    ..default()
                },
                TextColor(Color::srgb(0.9, 0.85, 0.75)),
                Node {
                    margin: UiRect::bottom(Val::Px(30.0)),
                    ..default()
                },
            ));

            for line in lines {
                parent.spawn((
                    Text::new(*line),
                    TextFont {
                        font_size: 20.0,
                        ..default()
                    },
                    TextColor(Color::srgb(0.6, 0.6, 0.65)),
                    Node {
                        margin: UiRect::bottom(Val::Px(8.0)),
                        ..default()
                    },
                ));
            }

            for (label, button) in buttons {
                spawn_button(parent, label, *button);
            }
        });
}

fn spawn_button(parent: &mut ChildBuilder, text: &str, button: ScreenButton) {
    parent
        .spawn((
            Button,
            Node {
                width: Val::Px(200.0),
                height: Val::Px(50.0),
                margin: UiRect::all(Val::Px(10.0)),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(BUTTON_IDLE),
            button,
        ))
        .with_children(|button| {
            button.spawn((
                Text::new(text),
                TextFont {
                    font_size: 24.0,
                    ..default()
                },
                TextColor(Color::srgb(0.8, 0.8, 0.85)),
            ));
        });
}

/// Handle clicks on screen buttons.
pub fn screen_buttons(
    mut interaction_query: Query<
        (&Interaction, &ScreenButton, &mut BackgroundColor),
        (Changed<Interaction>, With<Button>),
    >,
    mut next_state: ResMut<NextState<GameState>>,
    mut exit: EventWriter<AppExit>,
) {
    for (interaction, button, mut bg_color) in interaction_query.iter_mut() {
        match interaction {
            Interaction::Pressed => {
                *bg_color = BUTTON_PRESSED.into();
                match button {
                    ScreenButton::StartGame => next_state.set(GameState::Instructions),
                    ScreenButton::GotIt | ScreenButton::GoAgain => next_state.set(GameState::InGame),
                    ScreenButton::Quit => {
                        exit.send(AppExit::Success);
                    }
                }
            }
            Interaction::Hovered => {
                *bg_color = BUTTON_HOVER.into();
            }
            Interaction::None => {
                *bg_color = BUTTON_IDLE.into();
            }
        }
    }
}

/// Leave the game for the end screen once the final door is cleared.
pub fn show_end_screen(
    mut events: EventReader<ShowEndScreen>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if events.read().last().is_some() {
        next_state.set(GameState::GameComplete);
    }
}

/// Clean up the current screen.
pub fn cleanup_screen(mut commands: Commands, query: Query<Entity, With<ScreenUi>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}
