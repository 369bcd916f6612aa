//! Sprites for level geometry and animated actors.
//!
//! Geometry is drawn as flat colored boxes matching its collider. Actors show
//! one image per pose, mirrored when facing left.

use std::collections::HashMap;

use bevy::asset::{AssetLoadFailedEvent, LoadState};
use bevy::prelude::*;

use crate::animation::{Animator, Facing, Pose};
use crate::combat::Projectile;
use crate::enemies::{Enemy, EnemyKind, EnemyRegistry};
use crate::physics::{Collider, Ladder, MovingPlatform, Solid};
use crate::player::Player;
use crate::world::{Checkpoint, Coin, Door, Hazard};

/// Where an actor's pose images live under `assets/sprites`.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct SpriteSet {
    pub folder: String,
    pub prefix: String,
    /// Box color shown when a pose image can't be loaded
    pub fallback: Color,
}

impl SpriteSet {
    pub fn new(folder: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            folder: folder.into(),
            prefix: prefix.into(),
            fallback: Color::WHITE,
        }
    }

    pub fn with_fallback(mut self, color: Color) -> Self {
        self.fallback = color;
        self
    }

    /// Image and tint to draw for a pose image, given whether it failed to load.
    pub fn look(&self, image: Handle<Image>, missing: bool) -> (Handle<Image>, Color) {
        if missing {
            (Handle::default(), self.fallback)
        } else {
            (image, Color::WHITE)
        }
    }

    /// Asset path of the image for `pose`.
    pub fn pose_path(&self, pose: Pose) -> String {
        let name = match pose {
            Pose::Idle => "idle".to_string(),
            Pose::Jump => "jump".to_string(),
            Pose::Fall => "fall".to_string(),
            Pose::Walk(frame) => format!("walk{frame}"),
            Pose::Climb(frame) => format!("climb{frame}"),
        };
        format!("sprites/{}/{}_{}.png", self.folder, self.prefix, name)
    }
}

/// Loaded pose images, keyed by asset path.
#[derive(Resource, Default)]
pub struct PoseTextures {
    handles: HashMap<String, Handle<Image>>,
}

impl PoseTextures {
    fn get(&mut self, asset_server: &AssetServer, path: String) -> Handle<Image> {
        self.handles
            .entry(path)
            .or_insert_with_key(|path| asset_server.load(path.clone()))
            .clone()
    }
}

/// Flat color used for a piece of level geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileStyle {
    Solid,
    Platform,
    Ladder,
    Hazard,
    Door,
    Coin,
    Checkpoint,
}

impl TileStyle {
    pub fn color(self) -> Color {
        match self {
            TileStyle::Solid => Color::srgb(0.35, 0.3, 0.28),
            TileStyle::Platform => Color::srgb(0.5, 0.42, 0.3),
            TileStyle::Ladder => Color::srgb(0.55, 0.4, 0.2),
            TileStyle::Hazard => Color::srgb(0.8, 0.15, 0.1),
            TileStyle::Door => Color::srgb(0.25, 0.2, 0.45),
            TileStyle::Coin => Color::srgb(0.92, 0.9, 0.82),
            TileStyle::Checkpoint => Color::srgb(0.3, 0.7, 0.4),
        }
    }
}

/// Give freshly built geometry a colored sprite covering its collider.
#[allow(clippy::type_complexity)]
pub fn decorate_geometry(
    mut commands: Commands,
    query: Query<
        (
            Entity,
            &Collider,
            Has<Solid>,
            Has<MovingPlatform>,
            Has<Ladder>,
            Has<Hazard>,
            Has<Door>,
            Has<Coin>,
            Has<Checkpoint>,
        ),
        Added<Collider>,
    >,
) {
    for (entity, collider, solid, platform, ladder, hazard, door, coin, checkpoint) in query.iter() {
        let style = if platform {
            TileStyle::Platform
        } else if solid {
            TileStyle::Solid
        } else if ladder {
            TileStyle::Ladder
        } else if hazard {
            TileStyle::Hazard
        } else if door {
            TileStyle::Door
        } else if coin {
            TileStyle::Coin
        } else if checkpoint {
            TileStyle::Checkpoint
        } else {
            continue;
        };

        commands
            .entity(entity)
            .insert(Sprite::from_color(style.color(), collider.half_size * 2.0));
    }
}

const PLAYER_FALLBACK: Color = Color::srgb(0.85, 0.88, 0.95);
const ENEMY_FALLBACK: Color = Color::srgb(0.75, 0.2, 0.25);

/// Attach pose sprites to new actors and a plain sprite to projectiles.
pub fn decorate_actors(
    mut commands: Commands,
    registry: Res<EnemyRegistry>,
    players: Query<Entity, Added<Player>>,
    enemies: Query<(Entity, &EnemyKind), Added<Enemy>>,
    projectiles: Query<(Entity, &Collider), Added<Projectile>>,
) {
    for entity in players.iter() {
        commands
            .entity(entity)
            .insert(SpriteSet::new("player", "player").with_fallback(PLAYER_FALLBACK));
    }

    for (entity, kind) in enemies.iter() {
        let Some(definition) = registry.get(*kind) else {
            warn!("No sprite data for enemy kind {}", kind);
            continue;
        };
        commands.entity(entity).insert(
            SpriteSet::new(definition.sprite_folder.clone(), definition.sprite_prefix.clone())
                .with_fallback(ENEMY_FALLBACK),
        );
    }

    for (entity, collider) in projectiles.iter() {
        commands.entity(entity).insert(Sprite::from_color(
            Color::srgb(1.0, 0.85, 0.3),
            collider.half_size * 2.0,
        ));
    }
}

/// Show the image for each actor's current pose and facing.
pub fn update_actor_sprites(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut textures: ResMut<PoseTextures>,
    mut actors: Query<(Entity, &SpriteSet, &Animator, &Facing, &Collider, Option<&mut Sprite>)>,
) {
    for (entity, set, animator, facing, collider, sprite) in actors.iter_mut() {
        let image = textures.get(&asset_server, set.pose_path(animator.pose));
        let missing = matches!(asset_server.load_state(&image), LoadState::Failed(_));
        let (image, color) = set.look(image, missing);
        let flip_x = *facing == Facing::Left;

        match sprite {
            Some(mut sprite) => {
                if sprite.image != image {
                    sprite.image = image;
                }
                if sprite.color != color {
                    sprite.color = color;
                }
                if sprite.flip_x != flip_x {
                    sprite.flip_x = flip_x;
                }
            }
            None => {
                commands.entity(entity).insert(Sprite {
                    image,
                    color,
                    flip_x,
                    custom_size: Some(collider.half_size * 2.0),
                    ..default()
                });
            }
        }
    }
}

/// Name every image that failed to load.
pub fn report_missing_images(mut failures: EventReader<AssetLoadFailedEvent<Image>>) {
    for failure in failures.read() {
        warn!("Image {} could not be loaded, drawing a plain box: {}", failure.path, failure.error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pose_paths() {
        let set = SpriteSet::new("guardian", "guardian");
        assert_eq!(set.pose_path(Pose::Idle), "sprites/guardian/guardian_idle.png");
        assert_eq!(set.pose_path(Pose::Walk(7)), "sprites/guardian/guardian_walk7.png");
        assert_eq!(set.pose_path(Pose::Climb(1)), "sprites/guardian/guardian_climb1.png");
    }

    #[test]
    fn missing_pose_image_falls_back_to_a_colored_box() {
        let set = SpriteSet::new("player", "player").with_fallback(PLAYER_FALLBACK);
        let image = Handle::<Image>::weak_from_u128(7);

        assert_eq!(set.look(image.clone(), false), (image.clone(), Color::WHITE));

        let (shown, color) = set.look(image.clone(), true);
        assert_eq!(shown, Handle::default());
        assert_ne!(shown, image);
        assert_eq!(color, PLAYER_FALLBACK);
    }
}
