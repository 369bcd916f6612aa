//! Keyboard mapping to control events.

use bevy::prelude::*;

use crate::core::{ControlEvent, ControlKey};

/// Physical keys bound to each logical control.
const BINDINGS: [(ControlKey, &[KeyCode]); 6] = [
    (ControlKey::Up, &[KeyCode::ArrowUp, KeyCode::KeyW]),
    (ControlKey::Down, &[KeyCode::ArrowDown, KeyCode::KeyS]),
    (ControlKey::Left, &[KeyCode::ArrowLeft, KeyCode::KeyA]),
    (ControlKey::Right, &[KeyCode::ArrowRight, KeyCode::KeyD]),
    (ControlKey::Jump, &[KeyCode::Space]),
    (ControlKey::Shoot, &[KeyCode::KeyQ]),
];

/// Translate keyboard edges into `ControlEvent`s.
///
/// A control counts as held while any of its keys is held, so releasing one
/// of two bound keys does not release the control.
pub fn read_keyboard(keyboard: Res<ButtonInput<KeyCode>>, mut events: EventWriter<ControlEvent>) {
    for (control, keys) in BINDINGS {
        let pressed_now = keyboard.any_just_pressed(keys.iter().copied());
        let released_now = keyboard.any_just_released(keys.iter().copied());
        let held = keyboard.any_pressed(keys.iter().copied());

        if pressed_now {
            events.send(ControlEvent::pressed(control));
        } else if released_now && !held {
            events.send(ControlEvent::released(control));
        }
    }
}
