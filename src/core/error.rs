//! Errors surfaced by the simulation while stepping frames.

use bevy::prelude::*;
use thiserror::Error;

use super::events::SimulationFault;

/// Faults the frame update reports instead of panicking.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimulationError {
    /// A spawn descriptor names an enemy kind with no stats in the registry.
    #[error("Unknown enemy kind '{0}' in spawn descriptor")]
    UnknownEnemyKind(String),

    /// A level was requested that has no geometry loaded.
    #[error("No level data for level {0}")]
    InvalidLevelIndex(u32),
}

/// Log a fault and hand it to whoever listens for `SimulationFault`.
pub fn report_fault(faults: &mut EventWriter<SimulationFault>, error: SimulationError) {
    error!("{}", error);
    faults.send(SimulationFault(error));
}
