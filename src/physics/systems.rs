//! Physics systems - platform travel, body integration, and contact status.

use bevy::ecs::query::QueryFilter;
use bevy::math::bounding::Aabb2d;
use bevy::prelude::*;

use super::collision::{advance_platform, can_jump, push_out, step_body, touching_any};
use super::components::*;
use crate::core::Tuning;

/// World-space boxes for every entity matched by `query`.
pub fn collect_boxes<F: QueryFilter>(query: &Query<(&Transform, &Collider), F>) -> Vec<Aabb2d> {
    query
        .iter()
        .map(|(transform, collider)| collider.aabb(transform.translation.truncate()))
        .collect()
}

/// Move platforms along their paths and carry bodies standing on them.
///
/// A platform running into a body shoves it aside, and a rider carried into
/// a solid stays beside it.
pub fn move_platforms(
    tuning: Res<Tuning>,
    mut platforms: Query<
        (&mut Transform, &mut Velocity, &Collider, &MovingPlatform),
        Without<DynamicBody>,
    >,
    solids: Query<(&Transform, &Collider), (With<Solid>, Without<MovingPlatform>, Without<DynamicBody>)>,
    mut bodies: Query<(&mut Transform, &Collider), With<DynamicBody>>,
) {
    let solids = collect_boxes(&solids);

    for (mut transform, mut velocity, collider, platform) in platforms.iter_mut() {
        let mut center = transform.translation.truncate();
        let before = collider.aabb(center);
        let moved = advance_platform(&mut center, &mut velocity, collider.half_size, &platform.bounds);
        transform.translation.x = center.x;
        transform.translation.y = center.y;

        if moved == Vec2::ZERO {
            continue;
        }
        let after = collider.aabb(center);

        for (mut body_transform, body_collider) in bodies.iter_mut() {
            let half_size = body_collider.half_size;
            let mut body_center = body_transform.translation.truncate();

            if can_jump(&body_collider.aabb(body_center), &[before], tuning.ground_probe) {
                body_center += moved;
                for solid in &solids {
                    push_out(&mut body_center, half_size, solid, -moved);
                }
            } else {
                push_out(&mut body_center, half_size, &after, moved);
            }

            body_transform.translation.x = body_center.x;
            body_transform.translation.y = body_center.y;
        }
    }
}

/// Apply gravity, integrate, resolve against solids and moving platforms,
/// then record support and ladder status.
pub fn step_dynamic_bodies(
    tuning: Res<Tuning>,
    blockers: Query<
        (&Transform, &Collider),
        (Or<(With<Solid>, With<MovingPlatform>)>, Without<DynamicBody>),
    >,
    ladders: Query<(&Transform, &Collider), (With<Ladder>, Without<DynamicBody>)>,
    mut bodies: Query<(&mut Transform, &mut Velocity, &Collider, &mut Support), With<DynamicBody>>,
) {
    let blockers = collect_boxes(&blockers);
    let ladders = collect_boxes(&ladders);

    for (mut transform, mut velocity, collider, mut support) in bodies.iter_mut() {
        let mut center = transform.translation.truncate();
        step_body(
            &mut center,
            &mut velocity,
            collider.half_size,
            tuning.gravity,
            &blockers,
            &ladders,
        );
        transform.translation.x = center.x;
        transform.translation.y = center.y;

        let body = collider.aabb(center);
        *support = Support {
            grounded: can_jump(&body, &blockers, tuning.ground_probe),
            touching_ladder: touching_any(&body, &ladders),
        };
    }
}

/// Move kinematic bodies by their velocity.
pub fn integrate_kinematic(mut bodies: Query<(&mut Transform, &Velocity), With<Kinematic>>) {
    for (mut transform, velocity) in bodies.iter_mut() {
        transform.translation.x += velocity.x;
        transform.translation.y += velocity.y;
    }
}
