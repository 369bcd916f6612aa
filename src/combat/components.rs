//! Combat-related components.

use bevy::prelude::*;

/// Hit points of something that can be shot.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Health {
    pub current: i32,
}

impl Health {
    pub fn new(max: i32) -> Self {
        Self { current: max }
    }

    pub fn take_damage(&mut self, amount: i32) {
        self.current -= amount;
    }

    pub fn is_depleted(&self) -> bool {
        self.current <= 0
    }
}

/// A bullet in flight.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Projectile {
    pub damage: i32,
    /// Frames left before the projectile is discarded
    pub frames_left: u32,
}

/// Frame-count gate between two shots.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShotTimer {
    /// Frames counted since the last shot, saturating at `cooldown`
    pub frames: u32,
    pub cooldown: u32,
}

impl ShotTimer {
    /// A timer that allows firing immediately.
    pub fn ready(cooldown: u32) -> Self {
        Self {
            frames: cooldown,
            cooldown,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.frames >= self.cooldown
    }

    /// Fire if the cooldown has elapsed; otherwise count one more frame.
    pub fn try_fire(&mut self) -> bool {
        if self.is_ready() {
            self.frames = 0;
            true
        } else {
            self.frames += 1;
            false
        }
    }

    /// Count one frame without trying to fire.
    pub fn tick(&mut self) {
        if !self.is_ready() {
            self.frames += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_depletes_after_enough_hits() {
        let mut health = Health::new(50);
        health.take_damage(5);
        assert_eq!(health.current, 45);
        for _ in 0..9 {
            health.take_damage(5);
        }
        assert!(health.is_depleted());
    }

    #[test]
    fn shot_timer_blocks_until_cooldown_elapses() {
        let mut timer = ShotTimer::ready(15);
        assert!(timer.try_fire());

        let mut waited = 0;
        while !timer.try_fire() {
            waited += 1;
            assert!(waited <= 15);
        }
        assert_eq!(waited, 15);
    }
}
