//! Patrol boundary reversal.

use bevy::math::bounding::Aabb2d;
use bevy::prelude::*;

use super::components::{Enemy, PatrolBounds};
use crate::physics::{Collider, Velocity};

impl PatrolBounds {
    /// Reverse horizontal velocity when the leading edge is past a bound and
    /// the enemy is still heading toward it. An enemy that already turned
    /// around is left alone even if it is still past the bound.
    pub fn steer(&self, body: &Aabb2d, velocity: &mut Vec2) -> bool {
        if let Some(right) = self.right {
            if body.max.x > right && velocity.x > 0.0 {
                velocity.x = -velocity.x;
                return true;
            }
        }
        if let Some(left) = self.left {
            if body.min.x < left && velocity.x < 0.0 {
                velocity.x = -velocity.x;
                return true;
            }
        }
        false
    }
}

/// Turn enemies around at their patrol bounds.
pub fn patrol_enemies(
    mut enemies: Query<(&Transform, &Collider, &PatrolBounds, &mut Velocity), With<Enemy>>,
) {
    for (transform, collider, bounds, mut velocity) in enemies.iter_mut() {
        let body = collider.aabb(transform.translation.truncate());
        bounds.steer(&body, &mut velocity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HALF: Vec2 = Vec2::new(20.0, 30.0);

    #[test]
    fn reverses_at_right_bound_without_re_reversing() {
        let bounds = PatrolBounds {
            left: Some(0.0),
            right: Some(300.0),
        };
        let mut center = Vec2::new(279.0, 30.0);
        let mut velocity = Vec2::new(2.0, 0.0);

        // Leading edge crosses the bound this frame
        center.x += velocity.x;
        assert!(bounds.steer(&Aabb2d::new(center, HALF), &mut velocity));
        assert_eq!(velocity.x, -2.0);

        // Still past the bound next frame but already heading left
        center.x += 0.5;
        assert!(!bounds.steer(&Aabb2d::new(center, HALF), &mut velocity));
        assert_eq!(velocity.x, -2.0);
    }

    #[test]
    fn reverses_at_left_bound() {
        let bounds = PatrolBounds {
            left: Some(100.0),
            right: None,
        };
        let mut velocity = Vec2::new(-3.0, 0.0);
        assert!(bounds.steer(&Aabb2d::new(Vec2::new(119.0, 0.0), HALF), &mut velocity));
        assert_eq!(velocity.x, 3.0);
    }

    #[test]
    fn unbounded_enemies_keep_walking() {
        let bounds = PatrolBounds::default();
        let mut velocity = Vec2::new(2.0, 0.0);
        assert!(!bounds.steer(&Aabb2d::new(Vec2::new(1.0e6, 0.0), HALF), &mut velocity));
        assert_eq!(velocity.x, 2.0);
    }
}
