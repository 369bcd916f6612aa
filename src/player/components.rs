//! Player-related components.

use bevy::prelude::*;

use crate::animation::{Animator, Facing};
use crate::combat::ShotTimer;
use crate::core::Tuning;
use crate::physics::{Collider, DynamicBody, Support, Velocity};

/// Marker component for the player entity.
#[derive(Component, Debug, Default)]
pub struct Player;

/// Ladder flags derived after each physics step.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerState {
    /// Touching a ladder without ground support
    pub on_ladder: bool,
    /// Showing the climb pose. Stays set while the player remains inside
    /// the ladder region after having been on it.
    pub climbing: bool,
}

impl PlayerState {
    /// Derive the ladder flags from the latest contact status.
    pub fn refresh(&mut self, support: Support) {
        self.on_ladder = support.touching_ladder && !support.grounded;
        self.climbing = self.on_ladder || (self.climbing && support.touching_ladder);
    }
}

/// Every component a fresh player carries. Inserting it again on an
/// existing player resets it in place.
pub fn player_bundle(position: Vec2, tuning: &Tuning) -> impl Bundle {
    (
        Player,
        PlayerState::default(),
        Transform::from_translation(position.extend(1.0)),
        Velocity::default(),
        Collider::new(tuning.player_extents()),
        DynamicBody,
        Support::default(),
        Facing::default(),
        Animator::default(),
        ShotTimer::ready(tuning.shoot_cooldown),
    )
}

/// Spawn the player at `position`.
pub fn spawn_player(commands: &mut Commands, position: Vec2, tuning: &Tuning) -> Entity {
    commands.spawn((player_bundle(position, tuning), Name::new("Player"))).id()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ground_support_wins_over_ladder() {
        let mut state = PlayerState::default();
        state.refresh(Support {
            grounded: true,
            touching_ladder: true,
        });
        assert!(!state.on_ladder);
        assert!(!state.climbing);
    }

    #[test]
    fn climbing_sticks_while_inside_the_ladder() {
        let mut state = PlayerState::default();
        state.refresh(Support {
            grounded: false,
            touching_ladder: true,
        });
        assert!(state.on_ladder && state.climbing);

        // Reached the ground at the foot of the ladder
        state.refresh(Support {
            grounded: true,
            touching_ladder: true,
        });
        assert!(!state.on_ladder);
        assert!(state.climbing);

        // Walked off the ladder
        state.refresh(Support {
            grounded: true,
            touching_ladder: false,
        });
        assert!(!state.climbing);
    }
}
