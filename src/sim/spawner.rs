//! Obstacle pair spawning
//!
//! A fixed-period timer that only runs while the caller advances it, which
//! the state machine does only during play. Each firing creates a top and a
//! bottom obstacle around one randomized gap.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::collision::CollisionDetector;
use super::entity::{EntityId, IdAllocator};
use super::field::{Obstacle, ObstacleKind, ScrollingField};
use crate::consts::MIN_SPAWN_PERIOD;
use crate::tuning::Tuning;

/// Ids and gap of one spawned pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnedPair {
    pub top: EntityId,
    pub bottom: EntityId,
    pub gap_center_y: f32,
}

/// Timer plus seeded RNG for gap placement
#[derive(Debug, Clone)]
pub struct ObstacleSpawner {
    period: f32,
    /// Active-play time since the last firing
    elapsed: f32,
    rng: Pcg32,
    tuning: Tuning,
}

impl ObstacleSpawner {
    pub fn new(tuning: &Tuning, seed: u64) -> Self {
        Self {
            // Unvalidated tuning must not stall the catch-up loop
            period: tuning.spawn_period.max(MIN_SPAWN_PERIOD),
            elapsed: 0.0,
            rng: Pcg32::seed_from_u64(seed),
            tuning: tuning.clone(),
        }
    }

    /// Time accumulated toward the next firing
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Advance the timer, spawning one pair per full period
    pub fn tick(
        &mut self,
        dt: f32,
        ids: &mut IdAllocator,
        field: &mut ScrollingField,
        detector: &mut CollisionDetector,
    ) -> Vec<SpawnedPair> {
        self.elapsed += dt;
        let mut spawned = Vec::new();
        while self.elapsed >= self.period {
            self.elapsed -= self.period;
            spawned.push(self.spawn(ids, field, detector));
        }
        spawned
    }

    /// Create a pair sharing one gap and register it for scrolling and collision
    pub fn spawn(
        &mut self,
        ids: &mut IdAllocator,
        field: &mut ScrollingField,
        detector: &mut CollisionDetector,
    ) -> SpawnedPair {
        let (lo, hi) = self.tuning.gap_center_range();
        let gap_center_y = self.rng.random_range(lo..=hi);
        let jitter = self
            .rng
            .random_range(self.tuning.spawn_jitter_min..=self.tuning.spawn_jitter_max);
        let x = self.tuning.window_width
            + self.tuning.obstacle_half_width
            + self.tuning.obstacle_cap_overhang
            + jitter;

        let top = Obstacle::new(ids.next(), ObstacleKind::Top, x, gap_center_y, &self.tuning);
        let bottom = Obstacle::new(
            ids.next(),
            ObstacleKind::Bottom,
            x,
            gap_center_y,
            &self.tuning,
        );
        let pair = SpawnedPair {
            top: top.id,
            bottom: bottom.id,
            gap_center_y,
        };

        for obstacle in [top, bottom] {
            detector.register(obstacle.id);
            field.insert(obstacle);
        }

        log::debug!(
            "Spawned obstacle pair {:?}/{:?} gap_y={:.1} x={:.1}",
            pair.top,
            pair.bottom,
            gap_center_y,
            x
        );
        pair
    }
}
