//! Control state and the player's desired velocity.
//!
//! Key events only flip flags here. The flags are read once per frame to
//! decide walking, climbing and jumping, so the last state before a frame is
//! the one that counts.

use bevy::prelude::*;

use super::components::{Player, PlayerState};
use crate::core::{ControlEvent, ControlKey, PlaySound, SoundCue, Tuning};
use crate::physics::collision::{can_jump, touching_any};
use crate::physics::{collect_boxes, Collider, Ladder, MovingPlatform, Solid, Support, Velocity};

/// Currently held keys plus the edge-triggered latches derived from them.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct ControlState {
    pub up: bool,
    pub jump: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub shoot: bool,
    /// A shoot press that has not produced a projectile yet
    pub shoot_queued: bool,
    /// Set by a jump; cleared only once every jump key is released
    pub jump_needs_reset: bool,
}

impl ControlState {
    /// Fold one key event into the state.
    pub fn apply(&mut self, event: ControlEvent) {
        let pressed = event.pressed;
        match event.key {
            ControlKey::Up => self.up = pressed,
            ControlKey::Jump => self.jump = pressed,
            ControlKey::Down => self.down = pressed,
            ControlKey::Left => self.left = pressed,
            ControlKey::Right => self.right = pressed,
            ControlKey::Shoot => {
                if pressed && !self.shoot {
                    self.shoot_queued = true;
                }
                self.shoot = pressed;
            }
        }

        if !self.ascending() {
            self.jump_needs_reset = false;
        }
    }

    /// Either of the keys that jump or climb up is held.
    pub fn ascending(&self) -> bool {
        self.up || self.jump
    }

    /// Horizontal direction from left/right: -1, 0 or +1.
    pub fn horizontal(&self) -> f32 {
        match (self.left, self.right) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        }
    }
}

/// Fold this frame's key events into `ControlState`.
pub fn apply_control_events(
    mut events: EventReader<ControlEvent>,
    mut controls: ResMut<ControlState>,
) {
    for event in events.read() {
        controls.apply(*event);
    }
}

/// Turn held keys into the player's velocity for this frame.
pub fn drive_player(
    tuning: Res<Tuning>,
    mut controls: ResMut<ControlState>,
    blockers: Query<
        (&Transform, &Collider),
        (Or<(With<Solid>, With<MovingPlatform>)>, Without<Player>),
    >,
    ladders: Query<(&Transform, &Collider), (With<Ladder>, Without<Player>)>,
    mut player: Query<(&Transform, &Collider, &mut Velocity), With<Player>>,
    mut sounds: EventWriter<PlaySound>,
) {
    let Ok((transform, collider, mut velocity)) = player.get_single_mut() else {
        return;
    };

    let body = collider.aabb(transform.translation.truncate());
    let on_ladder = touching_any(&body, &collect_boxes(&ladders));
    let up = controls.ascending();
    let down = controls.down;

    if up && !down {
        if on_ladder {
            velocity.y = tuning.climb_speed;
        } else if !controls.jump_needs_reset
            && can_jump(&body, &collect_boxes(&blockers), tuning.jump_tolerance)
        {
            velocity.y = tuning.jump_speed;
            controls.jump_needs_reset = true;
            sounds.send(PlaySound(SoundCue::Jump));
        }
    } else if down && !up && on_ladder {
        velocity.y = -tuning.climb_speed;
    }

    // Neither or both held: hang on the ladder
    if on_ladder && up == down {
        velocity.y = 0.0;
    }

    velocity.x = controls.horizontal() * tuning.move_speed;
}

/// Derive ladder flags from the contact status the physics step recorded.
pub fn update_ladder_flags(mut query: Query<(&Support, &mut PlayerState), With<Player>>) {
    for (support, mut state) in query.iter_mut() {
        state.refresh(*support);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latch_clears_only_when_all_jump_keys_are_released() {
        let mut controls = ControlState::default();
        controls.apply(ControlEvent::pressed(ControlKey::Up));
        controls.apply(ControlEvent::pressed(ControlKey::Jump));
        controls.jump_needs_reset = true;

        controls.apply(ControlEvent::released(ControlKey::Up));
        assert!(controls.jump_needs_reset);

        controls.apply(ControlEvent::released(ControlKey::Jump));
        assert!(!controls.jump_needs_reset);
    }

    #[test]
    fn shoot_queues_once_per_press() {
        let mut controls = ControlState::default();
        controls.apply(ControlEvent::pressed(ControlKey::Shoot));
        assert!(controls.shoot_queued);

        controls.shoot_queued = false;
        controls.apply(ControlEvent::pressed(ControlKey::Shoot));
        assert!(!controls.shoot_queued);

        controls.apply(ControlEvent::released(ControlKey::Shoot));
        controls.apply(ControlEvent::pressed(ControlKey::Shoot));
        assert!(controls.shoot_queued);
    }

    #[test]
    fn opposite_directions_cancel() {
        let mut controls = ControlState::default();
        controls.apply(ControlEvent::pressed(ControlKey::Left));
        assert_eq!(controls.horizontal(), -1.0);
        controls.apply(ControlEvent::pressed(ControlKey::Right));
        assert_eq!(controls.horizontal(), 0.0);
        controls.apply(ControlEvent::released(ControlKey::Left));
        assert_eq!(controls.horizontal(), 1.0);
    }
}
