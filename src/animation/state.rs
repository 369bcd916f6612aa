//! Pose selection rules for animated actors.
//!
//! These are plain functions of velocity and ladder flags; the only state is
//! the frame phase and the throttle counter kept in `Animator`.

use bevy::prelude::*;

/// Number of frames in a walk cycle.
pub const WALK_FRAMES: u8 = 8;

/// Number of distinct climb poses. The climb phase runs through the same
/// eight steps as walking and shows each pose for half of them.
pub const CLIMB_FRAMES: u8 = 2;

/// Vertical speed above which climbing advances the climb cycle.
const CLIMB_ADVANCE_SPEED: f32 = 1.0;

/// Horizontal facing of an actor.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    /// Facing after moving with horizontal velocity `dx`.
    ///
    /// Only a velocity pointing against the current facing flips it; zero
    /// velocity keeps whatever was there.
    pub fn after(self, dx: f32) -> Self {
        match self {
            Facing::Right if dx < 0.0 => Facing::Left,
            Facing::Left if dx > 0.0 => Facing::Right,
            facing => facing,
        }
    }

    /// +1 for right, -1 for left.
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }
}

/// Displayed pose.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Pose {
    #[default]
    Idle,
    Walk(u8),
    Jump,
    Fall,
    Climb(u8),
}

/// Animation bookkeeping for one actor.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Animator {
    pub pose: Pose,
    /// Current step of the walk/climb cycle, always below `WALK_FRAMES`
    pub phase: u8,
    /// Calls needed per walk advance (1 = every call)
    pub throttle: u8,
    /// Calls counted toward the next throttled advance
    pub ticks: u8,
}

impl Default for Animator {
    fn default() -> Self {
        Self::with_throttle(1)
    }
}

impl Animator {
    pub fn with_throttle(throttle: u8) -> Self {
        Self {
            pose: Pose::Idle,
            phase: 0,
            throttle: throttle.max(1),
            ticks: 0,
        }
    }

    fn step_phase(&mut self) {
        self.phase = (self.phase + 1) % WALK_FRAMES;
    }

    /// Player rules: climbing, then airborne, then idle, then walking.
    pub fn update_player(&mut self, velocity: Vec2, climbing: bool, on_ladder: bool) -> Pose {
        self.pose = if climbing {
            if velocity.y.abs() > CLIMB_ADVANCE_SPEED {
                self.step_phase();
            }
            Pose::Climb(self.phase / (WALK_FRAMES / CLIMB_FRAMES))
        } else if velocity.y > 0.0 && !on_ladder {
            Pose::Jump
        } else if velocity.y < 0.0 && !on_ladder {
            Pose::Fall
        } else if velocity.x == 0.0 {
            Pose::Idle
        } else {
            self.step_phase();
            Pose::Walk(self.phase)
        };
        self.pose
    }

    /// Enemy rules: idle when standing, otherwise a throttled walk cycle.
    pub fn update_enemy(&mut self, velocity: Vec2) -> Pose {
        if velocity.x == 0.0 {
            self.pose = Pose::Idle;
            return self.pose;
        }

        self.ticks += 1;
        if self.ticks >= self.throttle {
            self.ticks = 0;
            self.step_phase();
        }
        self.pose = Pose::Walk(self.phase);
        self.pose
    }
}
