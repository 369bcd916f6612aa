//! Enemy plugin - registers the enemy table and patrol steering.

use bevy::prelude::*;

use super::data::EnemyRegistry;
use super::patrol::patrol_enemies;
use crate::core::FrameSet;
use crate::physics::integrate_kinematic;

/// Enemy plugin - owns the enemy table and turns patrolling enemies around.
pub struct EnemyPlugin;

impl Plugin for EnemyPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<EnemyRegistry>().add_systems(
            Update,
            patrol_enemies
                .after(integrate_kinematic)
                .in_set(FrameSet::Physics),
        );
    }
}
