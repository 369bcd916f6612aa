//! Combat systems - firing, projectile travel, and hit resolution.

use std::collections::HashSet;

use bevy::prelude::*;

use super::components::*;
use crate::animation::Facing;
use crate::core::{PlaySound, SoundCue, Tuning};
use crate::enemies::Enemy;
use crate::physics::collision::{overlaps, touching_any};
use crate::physics::{collect_boxes, Collider, MovingPlatform, Solid, Velocity};
use crate::player::{ControlState, Player};
use crate::world::LevelEntity;

/// Fire a queued shot once the player's cooldown allows it.
pub fn fire_projectiles(
    mut commands: Commands,
    tuning: Res<Tuning>,
    mut controls: ResMut<ControlState>,
    mut shooters: Query<(&Transform, &Facing, &mut ShotTimer), With<Player>>,
    mut sounds: EventWriter<PlaySound>,
) {
    let Ok((transform, facing, mut timer)) = shooters.get_single_mut() else {
        return;
    };

    if controls.shoot_queued && timer.is_ready() {
        timer.try_fire();
        controls.shoot_queued = false;
        spawn_projectile(&mut commands, transform.translation.truncate(), *facing, &tuning);
        sounds.send(PlaySound(SoundCue::Shoot));
    } else {
        timer.tick();
    }
}

/// Spawn a projectile at `origin` heading the way `facing` points.
pub fn spawn_projectile(
    commands: &mut Commands,
    origin: Vec2,
    facing: Facing,
    tuning: &Tuning,
) -> Entity {
    commands
        .spawn((
            Projectile {
                damage: tuning.bullet_damage,
                frames_left: tuning.projectile_lifetime,
            },
            Transform::from_translation(origin.extend(2.0)),
            Velocity(Vec2::new(facing.sign() * tuning.bullet_speed, 0.0)),
            Collider::new(tuning.projectile_extents()),
            LevelEntity,
        ))
        .id()
}

/// Move projectiles and drop the ones whose lifetime ran out.
pub fn advance_projectiles(
    mut commands: Commands,
    mut projectiles: Query<(Entity, &mut Transform, &Velocity, &mut Projectile)>,
) {
    for (entity, mut transform, velocity, mut projectile) in projectiles.iter_mut() {
        transform.translation.x += velocity.x;
        transform.translation.y += velocity.y;

        projectile.frames_left = projectile.frames_left.saturating_sub(1);
        if projectile.frames_left == 0 {
            commands.entity(entity).despawn();
        }
    }
}

/// Resolve at most one hit per projectile: enemies first, then terrain.
pub fn resolve_projectile_hits(
    mut commands: Commands,
    projectiles: Query<(Entity, &Transform, &Collider, &Projectile)>,
    mut enemies: Query<
        (Entity, &Transform, &Collider, &mut Health),
        (With<Enemy>, Without<Projectile>),
    >,
    terrain: Query<
        (&Transform, &Collider),
        (Or<(With<Solid>, With<MovingPlatform>)>, Without<Projectile>),
    >,
    mut sounds: EventWriter<PlaySound>,
) {
    let terrain = collect_boxes(&terrain);
    // Enemies destroyed earlier this frame can't absorb another bullet
    let mut destroyed = HashSet::new();

    for (bullet, transform, collider, projectile) in projectiles.iter() {
        // Already despawning after running out of lifetime
        if projectile.frames_left == 0 {
            continue;
        }
        let bounds = collider.aabb(transform.translation.truncate());

        let enemy_hit = enemies.iter_mut().find(|(enemy, enemy_transform, enemy_collider, _)| {
            !destroyed.contains(enemy)
                && overlaps(&bounds, &enemy_collider.aabb(enemy_transform.translation.truncate()))
        });

        if let Some((enemy, _, _, mut health)) = enemy_hit {
            commands.entity(bullet).despawn();
            health.take_damage(projectile.damage);
            if health.is_depleted() {
                destroyed.insert(enemy);
                commands.entity(enemy).despawn();
            }
            sounds.send(PlaySound(SoundCue::Hit));
        } else if touching_any(&bounds, &terrain) {
            commands.entity(bullet).despawn();
        }
    }
}
