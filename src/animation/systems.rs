//! Animation systems - facing and pose for the player and enemies.

use bevy::prelude::*;

use super::state::{Animator, Facing};
use crate::enemies::Enemy;
use crate::physics::Velocity;
use crate::player::{Player, PlayerState};

/// Update the player's facing and pose.
pub fn animate_player(
    mut query: Query<(&Velocity, &PlayerState, &mut Facing, &mut Animator), With<Player>>,
) {
    for (velocity, state, mut facing, mut animator) in query.iter_mut() {
        *facing = facing.after(velocity.x);
        animator.update_player(**velocity, state.climbing, state.on_ladder);
    }
}

/// Update every enemy's facing and pose.
pub fn animate_enemies(mut query: Query<(&Velocity, &mut Facing, &mut Animator), With<Enemy>>) {
    for (velocity, mut facing, mut animator) in query.iter_mut() {
        *facing = facing.after(velocity.x);
        animator.update_enemy(**velocity);
    }
}
