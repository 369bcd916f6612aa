//! Box collision queries and axis-separated movement.
//!
//! Overlap tests are strict: boxes that merely share an edge do not collide,
//! which lets a body rest exactly on top of a platform.

use bevy::math::bounding::Aabb2d;
use bevy::prelude::*;

use super::components::TravelBounds;

/// Which axes were blocked during a move.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Blocked {
    pub horizontal: bool,
    pub vertical: bool,
}

/// Strict overlap between two boxes.
pub fn overlaps(a: &Aabb2d, b: &Aabb2d) -> bool {
    a.min.x < b.max.x && a.max.x > b.min.x && a.min.y < b.max.y && a.max.y > b.min.y
}

/// True if `body` overlaps any box in `others`.
pub fn touching_any(body: &Aabb2d, others: &[Aabb2d]) -> bool {
    others.iter().any(|other| overlaps(body, other))
}

/// Thin band directly below the feet of `body`, `tolerance` pixels tall.
pub fn feet_probe(body: &Aabb2d, tolerance: f32) -> Aabb2d {
    Aabb2d {
        min: Vec2::new(body.min.x, body.min.y - tolerance),
        max: Vec2::new(body.max.x, body.min.y),
    }
}

/// A supporting surface lies within `tolerance` pixels below the feet.
pub fn can_jump(body: &Aabb2d, surfaces: &[Aabb2d], tolerance: f32) -> bool {
    let probe = feet_probe(body, tolerance);
    touching_any(&probe, surfaces)
}

/// Move a box by `delta`, resolving penetration horizontally first and then
/// vertically so bodies don't snag on corners.
pub fn move_and_collide(
    center: &mut Vec2,
    half_size: Vec2,
    delta: Vec2,
    blockers: &[Aabb2d],
) -> Blocked {
    let mut blocked = Blocked::default();

    if delta.x != 0.0 {
        center.x += delta.x;
        for blocker in blockers {
            if overlaps(&Aabb2d::new(*center, half_size), blocker) {
                blocked.horizontal = true;
                if delta.x > 0.0 {
                    center.x = blocker.min.x - half_size.x;
                } else {
                    center.x = blocker.max.x + half_size.x;
                }
            }
        }
    }

    if delta.y != 0.0 {
        center.y += delta.y;
        for blocker in blockers {
            if overlaps(&Aabb2d::new(*center, half_size), blocker) {
                blocked.vertical = true;
                if delta.y > 0.0 {
                    center.y = blocker.min.y - half_size.y;
                } else {
                    center.y = blocker.max.y + half_size.y;
                }
            }
        }
    }

    blocked
}

/// Shove `center` out of `obstacle`, which is moving by `push`.
///
/// The body leaves on the side the obstacle is heading to, horizontal motion
/// first. Returns false when nothing was moved.
pub fn push_out(center: &mut Vec2, half_size: Vec2, obstacle: &Aabb2d, push: Vec2) -> bool {
    if !overlaps(&Aabb2d::new(*center, half_size), obstacle) {
        return false;
    }

    if push.x > 0.0 {
        center.x = obstacle.max.x + half_size.x;
    } else if push.x < 0.0 {
        center.x = obstacle.min.x - half_size.x;
    } else if push.y > 0.0 {
        center.y = obstacle.max.y + half_size.y;
    } else if push.y < 0.0 {
        center.y = obstacle.min.y - half_size.y;
    } else {
        return false;
    }
    true
}

/// Advance a dynamic body by one frame.
///
/// Gravity is skipped while the body touches a ladder. A vertical hit
/// zeroes vertical velocity; horizontal velocity is left to the caller since
/// input rewrites it every frame.
pub fn step_body(
    center: &mut Vec2,
    velocity: &mut Vec2,
    half_size: Vec2,
    gravity: f32,
    blockers: &[Aabb2d],
    ladders: &[Aabb2d],
) -> Blocked {
    if !touching_any(&Aabb2d::new(*center, half_size), ladders) {
        velocity.y -= gravity;
    }

    let blocked = move_and_collide(center, half_size, *velocity, blockers);
    if blocked.vertical {
        velocity.y = 0.0;
    }
    blocked
}

/// Move a platform by its velocity, clamping to its bounds and reversing
/// the axis that reached one. Returns the distance actually travelled.
pub fn advance_platform(
    center: &mut Vec2,
    velocity: &mut Vec2,
    half_size: Vec2,
    bounds: &TravelBounds,
) -> Vec2 {
    let start = *center;

    center.x += velocity.x;
    if let Some(left) = bounds.left {
        if center.x - half_size.x <= left {
            center.x = left + half_size.x;
            if velocity.x < 0.0 {
                velocity.x = -velocity.x;
            }
        }
    }
    if let Some(right) = bounds.right {
        if center.x + half_size.x >= right {
            center.x = right - half_size.x;
            if velocity.x > 0.0 {
                velocity.x = -velocity.x;
            }
        }
    }

    center.y += velocity.y;
    if let Some(bottom) = bounds.bottom {
        if center.y - half_size.y <= bottom {
            center.y = bottom + half_size.y;
            if velocity.y < 0.0 {
                velocity.y = -velocity.y;
            }
        }
    }
    if let Some(top) = bounds.top {
        if center.y + half_size.y >= top {
            center.y = top - half_size.y;
            if velocity.y > 0.0 {
                velocity.y = -velocity.y;
            }
        }
    }

    *center - start
}

#[cfg(test)]
mod tests {
    use super::*;

    const HALF: Vec2 = Vec2::new(20.0, 32.0);

    fn floor() -> Aabb2d {
        Aabb2d::new(Vec2::new(0.0, -32.0), Vec2::new(500.0, 32.0))
    }

    #[test]
    fn shared_edges_do_not_overlap() {
        let a = Aabb2d::new(Vec2::ZERO, Vec2::splat(1.0));
        let b = Aabb2d::new(Vec2::new(2.0, 0.0), Vec2::splat(1.0));
        assert!(!overlaps(&a, &b));
        let c = Aabb2d::new(Vec2::new(1.5, 0.5), Vec2::splat(1.0));
        assert!(overlaps(&a, &c));
    }

    #[test]
    fn falling_body_lands_on_floor() {
        let mut center = Vec2::new(0.0, 40.0);
        let mut velocity = Vec2::ZERO;
        for _ in 0..30 {
            step_body(&mut center, &mut velocity, HALF, 1.2, &[floor()], &[]);
        }
        assert_eq!(center.y, HALF.y);
        assert_eq!(velocity.y, 0.0);
    }

    #[test]
    fn resting_body_stays_put() {
        let mut center = Vec2::new(0.0, HALF.y);
        let mut velocity = Vec2::ZERO;
        let blocked = step_body(&mut center, &mut velocity, HALF, 1.2, &[floor()], &[]);
        assert!(blocked.vertical);
        assert_eq!(center, Vec2::new(0.0, HALF.y));
        assert_eq!(velocity, Vec2::ZERO);
    }

    #[test]
    fn horizontal_resolution_stops_at_wall() {
        let wall = Aabb2d::new(Vec2::new(100.0, 100.0), Vec2::new(10.0, 100.0));
        let mut center = Vec2::new(60.0, HALF.y);
        let blocked = move_and_collide(&mut center, HALF, Vec2::new(25.0, 0.0), &[floor(), wall]);
        assert!(blocked.horizontal);
        assert!(!blocked.vertical);
        assert_eq!(center.x, 90.0 - HALF.x);
    }

    #[test]
    fn walking_along_floor_does_not_snag() {
        // Two adjacent floor tiles; the seam must not block horizontal motion.
        let left = Aabb2d::new(Vec2::new(-32.0, -32.0), Vec2::splat(32.0));
        let right = Aabb2d::new(Vec2::new(32.0, -32.0), Vec2::splat(32.0));
        let mut center = Vec2::new(-20.0, HALF.y);
        let blocked = move_and_collide(&mut center, HALF, Vec2::new(7.0, -1.2), &[left, right]);
        assert!(!blocked.horizontal);
        assert!(blocked.vertical);
        assert_eq!(center, Vec2::new(-13.0, HALF.y));
    }

    #[test]
    fn can_jump_respects_tolerance() {
        let surfaces = [floor()];
        let on_floor = Aabb2d::new(Vec2::new(0.0, HALF.y), HALF);
        let just_above = Aabb2d::new(Vec2::new(0.0, HALF.y + 9.0), HALF);
        let too_high = Aabb2d::new(Vec2::new(0.0, HALF.y + 11.0), HALF);
        assert!(can_jump(&on_floor, &surfaces, 10.0));
        assert!(can_jump(&just_above, &surfaces, 10.0));
        assert!(!can_jump(&too_high, &surfaces, 10.0));
    }

    #[test]
    fn wall_beside_the_body_is_not_support() {
        let wall = Aabb2d::new(Vec2::new(100.0, 100.0), Vec2::new(10.0, 100.0));
        let body = Aabb2d::new(Vec2::new(90.0 - HALF.x, 150.0), HALF);
        assert!(!can_jump(&body, &[wall], 10.0));
    }

    #[test]
    fn can_jump_is_false_right_after_a_jump() {
        let mut center = Vec2::new(0.0, HALF.y);
        let mut velocity = Vec2::new(0.0, 15.0);
        step_body(&mut center, &mut velocity, HALF, 1.2, &[floor()], &[]);
        let body = Aabb2d::new(center, HALF);
        assert!(!can_jump(&body, &[floor()], 10.0));
    }

    #[test]
    fn ladder_suspends_gravity() {
        let ladder = Aabb2d::new(Vec2::new(0.0, 200.0), Vec2::new(32.0, 100.0));
        let mut center = Vec2::new(0.0, 200.0);
        let mut velocity = Vec2::ZERO;
        step_body(&mut center, &mut velocity, HALF, 1.2, &[floor()], &[ladder]);
        assert_eq!(center.y, 200.0);
        assert_eq!(velocity.y, 0.0);
    }

    #[test]
    fn push_out_follows_the_obstacle() {
        let platform = Aabb2d::new(Vec2::new(150.0, 96.0), Vec2::splat(32.0));

        let mut center = Vec2::new(100.0, 96.0);
        assert!(push_out(&mut center, HALF, &platform, Vec2::new(-5.0, 0.0)));
        assert_eq!(center, Vec2::new(98.0, 96.0));

        let mut beside = Vec2::new(98.0, 96.0);
        assert!(!push_out(&mut beside, HALF, &platform, Vec2::new(-5.0, 0.0)));
        assert_eq!(beside, Vec2::new(98.0, 96.0));

        let mut below = Vec2::new(150.0, 50.0);
        assert!(push_out(&mut below, HALF, &platform, Vec2::new(0.0, 2.0)));
        assert_eq!(below.y, 128.0 + HALF.y);
    }

    #[test]
    fn platform_reverses_at_bound() {
        let bounds = TravelBounds {
            right: Some(200.0),
            ..default()
        };
        let mut center = Vec2::new(165.0, 0.0);
        let mut velocity = Vec2::new(5.0, 0.0);
        let moved = advance_platform(&mut center, &mut velocity, Vec2::splat(32.0), &bounds);
        assert_eq!(center.x, 168.0);
        assert_eq!(moved, Vec2::new(3.0, 0.0));
        assert_eq!(velocity.x, -5.0);
    }
}
