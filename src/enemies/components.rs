//! Enemy-related components.

use std::fmt;
use std::str::FromStr;

use bevy::prelude::*;

use crate::core::SimulationError;

/// Marker component for all enemies.
#[derive(Component, Debug, Default)]
pub struct Enemy;

/// Enemy variant. Stats for each variant live in `EnemyRegistry`.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnemyKind {
    Guardian,
}

impl EnemyKind {
    /// Identifier used in level files and enemy data file names.
    pub fn id(self) -> &'static str {
        match self {
            EnemyKind::Guardian => "guardian",
        }
    }
}

impl fmt::Display for EnemyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for EnemyKind {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "guardian" => Ok(EnemyKind::Guardian),
            other => Err(SimulationError::UnknownEnemyKind(other.to_string())),
        }
    }
}

/// World-x limits a patrolling enemy turns around at. `None` = no limit.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct PatrolBounds {
    pub left: Option<f32>,
    pub right: Option<f32>,
}
