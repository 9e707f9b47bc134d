//! The controlled entity's physics body
//!
//! Vertical-only integration: gravity accumulates into `velocity_y` between
//! impulses and a jump overwrites it outright.

use glam::Vec2;

use super::entity::EntityId;
use super::shape::Shape;
use crate::tuning::Tuning;

/// The player-steered plane
#[derive(Debug, Clone)]
pub struct PhysicsBody {
    pub id: EntityId,
    /// Centre of the body
    pub pos: Vec2,
    /// Vertical velocity (pixels/s, positive is down)
    pub velocity_y: f32,
    /// Hit radius
    pub radius: f32,
    gravity: f32,
    jump_velocity: f32,
    rotation_factor: f32,
    max_rotation: f32,
    /// Largest `pos.y` allowed (body resting on the ground)
    max_y: f32,
    grounded: bool,
}

impl PhysicsBody {
    pub fn new(id: EntityId, tuning: &Tuning) -> Self {
        Self {
            id,
            pos: tuning.plane_start(),
            velocity_y: 0.0,
            radius: tuning.plane_radius,
            gravity: tuning.gravity,
            jump_velocity: tuning.jump_velocity,
            rotation_factor: tuning.rotation_factor,
            max_rotation: tuning.max_rotation,
            max_y: tuning.ground_y() - tuning.plane_radius,
            grounded: false,
        }
    }

    /// Integrate one step of gravity. Returns true once the body has reached the ground.
    pub fn apply_gravity(&mut self, dt: f32) -> bool {
        self.velocity_y += self.gravity * dt;
        self.pos.y += self.velocity_y * dt;
        if self.pos.y >= self.max_y {
            self.pos.y = self.max_y;
            self.grounded = true;
        }
        self.grounded
    }

    /// Jump: velocity becomes the jump constant no matter what it was
    pub fn impulse(&mut self) {
        self.velocity_y = self.jump_velocity;
    }

    /// Whether the body has hit the ground bound
    #[inline]
    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    /// Cosmetic tilt in degrees (nose up while rising); never used for collision
    pub fn rotation(&self) -> f32 {
        (-self.velocity_y * self.rotation_factor).clamp(-self.max_rotation, self.max_rotation)
    }

    /// Occupied region for collision
    pub fn shape(&self) -> Shape {
        Shape::Circle {
            center: self.pos,
            radius: self.radius,
        }
    }
}
