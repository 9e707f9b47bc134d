//! Collision detection for the controlled entity
//!
//! The detector owns the set of obstacle ids that can end a run. Obstacle
//! geometry is looked up in the [`ScrollingField`] by id, so killing an
//! obstacle means forgetting it here and removing it there.

use std::collections::BTreeSet;

use super::body::PhysicsBody;
use super::entity::EntityId;
use super::field::ScrollingField;
use super::shape::intersects;

/// What ended the run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitKind {
    /// Overlapped an obstacle's outline
    Obstacle(EntityId),
    /// Flew above the top of the screen
    Ceiling,
    /// Reached the ground bound
    Ground,
}

/// Tests the plane against registered obstacles and the screen bounds
#[derive(Debug, Clone, Default)]
pub struct CollisionDetector {
    obstacles: BTreeSet<EntityId>,
}

impl CollisionDetector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, id: EntityId) {
        self.obstacles.insert(id);
    }

    pub fn forget(&mut self, id: EntityId) -> bool {
        self.obstacles.remove(&id)
    }

    /// Forget every registered obstacle
    pub fn clear(&mut self) {
        self.obstacles.clear();
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.obstacles.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    /// Find the first thing the body is touching, if any
    ///
    /// Bounds are checked before obstacles; obstacles in id order.
    pub fn probe(&self, body: &PhysicsBody, field: &ScrollingField) -> Option<HitKind> {
        if body.pos.y <= 0.0 {
            return Some(HitKind::Ceiling);
        }
        if body.is_grounded() {
            return Some(HitKind::Ground);
        }

        let plane = body.shape();
        self.obstacles
            .iter()
            .filter_map(|&id| field.obstacle(id))
            .find(|o| o.shapes().iter().any(|s| intersects(&plane, s)))
            .map(|o| HitKind::Obstacle(o.id))
    }

    /// Whether the body collided with anything this tick
    pub fn check(&self, body: &PhysicsBody, field: &ScrollingField) -> bool {
        self.probe(body, field).is_some()
    }
}
