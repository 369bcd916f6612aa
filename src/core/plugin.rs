//! Core plugin that sets up states, events, tuning and the frame pipeline.

use bevy::prelude::*;

use super::config::Tuning;
use super::events::*;
use super::states::*;

/// Ordered stages of one simulation frame.
///
/// Every gameplay system belongs to exactly one of these sets; the sets run
/// in declaration order.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameSet {
    /// Fold key events into the control state
    Input,
    /// Desired velocity, platforms, integration, support and ladder status
    Physics,
    /// Facing and pose selection
    Animation,
    /// Firing, travel and hits
    Projectiles,
    /// Player vs enemies, hazards and doors
    Contacts,
    /// Level rebuild after a cleared door
    Transition,
    /// Coins
    Collectibles,
    /// Checkpoints
    Checkpoints,
    /// Viewport follow
    Camera,
}

/// Core plugin - must be added first as other plugins depend on it.
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app
            .init_state::<GameState>()
            .init_resource::<EncounterPhase>()
            .init_resource::<Tuning>()

            // Simulation boundary events
            .add_event::<ControlEvent>()
            .add_event::<PlaySound>()
            .add_event::<LevelReloadRequested>()
            .add_event::<ShowEndScreen>()
            .add_event::<SimulationFault>()

            // Frame pipeline only runs in game
            .configure_sets(
                Update,
                (
                    FrameSet::Input,
                    FrameSet::Physics,
                    FrameSet::Animation,
                    FrameSet::Projectiles,
                    FrameSet::Contacts,
                    FrameSet::Transition,
                    FrameSet::Collectibles,
                    FrameSet::Checkpoints,
                    FrameSet::Camera,
                )
                    .chain()
                    .run_if(in_state(GameState::InGame)),
            )

            // Everything except the level rebuild and the camera pauses
            // outside of `Playing`. Each stage checks the phase when it is
            // reached, so a door cleared in Contacts already holds back the
            // stages after it.
            .configure_sets(
                Update,
                (
                    FrameSet::Input.run_if(encounter_playing),
                    FrameSet::Physics.run_if(encounter_playing),
                    FrameSet::Animation.run_if(encounter_playing),
                    FrameSet::Projectiles.run_if(encounter_playing),
                    FrameSet::Contacts.run_if(encounter_playing),
                    FrameSet::Collectibles.run_if(encounter_playing),
                    FrameSet::Checkpoints.run_if(encounter_playing),
                ),
            );
    }
}
