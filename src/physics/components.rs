//! Physics components: velocity, colliders, and collider roles.

use bevy::math::bounding::Aabb2d;
use bevy::prelude::*;

/// Velocity in pixels per frame.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Deref, DerefMut)]
pub struct Velocity(pub Vec2);

/// Axis-aligned box collider centered on the entity's translation.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Collider {
    pub half_size: Vec2,
}

impl Collider {
    pub fn new(half_size: Vec2) -> Self {
        Self { half_size }
    }

    /// World-space box for a collider centered at `center`.
    pub fn aabb(&self, center: Vec2) -> Aabb2d {
        Aabb2d::new(center, self.half_size)
    }
}

/// Blocks movement from every direction.
#[derive(Component, Debug, Default)]
pub struct Solid;

/// Blocks like a solid, travels with its `Velocity`, and carries whatever
/// stands on it.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct MovingPlatform {
    pub bounds: TravelBounds,
}

/// Optional world-space limits for a moving platform's edges.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TravelBounds {
    pub left: Option<f32>,
    pub right: Option<f32>,
    pub bottom: Option<f32>,
    pub top: Option<f32>,
}

/// Non-blocking; suspends gravity and allows climbing while touched.
#[derive(Component, Debug, Default)]
pub struct Ladder;

/// Body that falls under gravity and collides with solids and platforms.
#[derive(Component, Debug, Default)]
pub struct DynamicBody;

/// Body that just follows its velocity (no gravity, no collision response).
#[derive(Component, Debug, Default)]
pub struct Kinematic;

/// Contact status of a dynamic body after its last step.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Support {
    /// A surface lies within the ground probe below the feet
    pub grounded: bool,
    /// The body overlaps a ladder
    pub touching_ladder: bool,
}
