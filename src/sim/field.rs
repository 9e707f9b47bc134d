//! Horizontally scrolling world elements
//!
//! Scroll bands (background, ground) tile endlessly: a tile leaving on the
//! left is moved behind the last tile on the right. Obstacles are one-shot
//! and are dropped once they are fully off screen.

use glam::Vec2;

use super::entity::EntityId;
use super::shape::Shape;
use crate::consts::MIN_TILE_WIDTH;
use crate::tuning::Tuning;

/// Which band a set of tiles belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandLayer {
    Background,
    Ground,
}

/// An endlessly repeating strip of tiles
#[derive(Debug, Clone)]
pub struct ScrollBand {
    pub layer: BandLayer,
    /// Left edge of each tile
    pub tiles: Vec<f32>,
    pub tile_width: f32,
    /// Top edge of the band
    pub y: f32,
    pub speed: f32,
}

impl ScrollBand {
    /// Enough contiguous tiles to cover `view_width` plus one spare entering on the right
    pub fn new(layer: BandLayer, tile_width: f32, y: f32, speed: f32, view_width: f32) -> Self {
        let tile_width = tile_width.max(MIN_TILE_WIDTH);
        let count = (view_width.max(0.0) / tile_width).ceil() as usize + 1;
        Self {
            layer,
            tiles: (0..count).map(|i| i as f32 * tile_width).collect(),
            tile_width,
            y,
            speed,
        }
    }

    /// Scroll left, wrapping tiles that left the screen to the right end
    pub fn tick(&mut self, dt: f32) {
        let span = self.tile_width * self.tiles.len() as f32;
        for x in &mut self.tiles {
            *x -= self.speed * dt;
            if *x + self.tile_width <= 0.0 {
                let laps = (-(*x + self.tile_width) / span).floor() + 1.0;
                *x += laps * span;
            }
        }
    }

    /// True when tiles cover `[0, view_width]` without a gap
    pub fn covers(&self, view_width: f32) -> bool {
        let mut tiles = self.tiles.clone();
        tiles.sort_by(|a, b| a.total_cmp(b));
        let Some(&first) = tiles.first() else {
            return false;
        };
        // Tolerate float drift at seams
        const SEAM_EPSILON: f32 = 0.05;
        if first > SEAM_EPSILON {
            return false;
        }
        let mut reach = first;
        for x in tiles {
            if x > reach + SEAM_EPSILON {
                return false;
            }
            reach = reach.max(x + self.tile_width);
        }
        reach + SEAM_EPSILON >= view_width
    }
}

/// Which half of an obstacle pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleKind {
    Top,
    Bottom,
}

/// One half of an obstacle pair
#[derive(Debug, Clone)]
pub struct Obstacle {
    pub id: EntityId,
    pub kind: ObstacleKind,
    /// Horizontal centre
    pub x: f32,
    pub speed: f32,
    pub gap_center_y: f32,
    pub gap_half_height: f32,
    pub half_width: f32,
    pub cap_height: f32,
    pub cap_overhang: f32,
    /// Far end of the shaft (ceiling for top, ground for bottom)
    pub anchor_y: f32,
}

impl Obstacle {
    /// Create one half of a pair from the shared gap
    pub fn new(
        id: EntityId,
        kind: ObstacleKind,
        x: f32,
        gap_center_y: f32,
        tuning: &Tuning,
    ) -> Self {
        let anchor_y = match kind {
            ObstacleKind::Top => 0.0,
            ObstacleKind::Bottom => tuning.ground_y(),
        };
        Self {
            id,
            kind,
            x,
            speed: tuning.obstacle_speed(),
            gap_center_y,
            gap_half_height: tuning.gap_half_height,
            half_width: tuning.obstacle_half_width,
            cap_height: tuning.obstacle_cap_height,
            cap_overhang: tuning.obstacle_cap_overhang,
            anchor_y,
        }
    }

    /// Y of the edge facing the gap
    pub fn gap_edge_y(&self) -> f32 {
        match self.kind {
            ObstacleKind::Top => self.gap_center_y - self.gap_half_height,
            ObstacleKind::Bottom => self.gap_center_y + self.gap_half_height,
        }
    }

    /// Rightmost extent including the cap lip
    pub fn right_edge(&self) -> f32 {
        self.x + self.half_width + self.cap_overhang
    }

    /// Shaft and cap outlines
    pub fn shapes(&self) -> [Shape; 2] {
        let edge = self.gap_edge_y();
        let cap_end = match self.kind {
            ObstacleKind::Top => edge - self.cap_height,
            ObstacleKind::Bottom => edge + self.cap_height,
        };
        let cap_half = self.half_width + self.cap_overhang;
        [
            Shape::rect(
                Vec2::new(self.x - self.half_width, self.anchor_y),
                Vec2::new(self.x + self.half_width, edge),
            ),
            Shape::rect(
                Vec2::new(self.x - cap_half, cap_end),
                Vec2::new(self.x + cap_half, edge),
            ),
        ]
    }
}

/// Every scrolling element in the world
#[derive(Debug, Clone)]
pub struct ScrollingField {
    pub bands: Vec<ScrollBand>,
    /// Live obstacles (sorted by id)
    obstacles: Vec<Obstacle>,
}

impl ScrollingField {
    /// Background and ground bands with no obstacles
    pub fn new(tuning: &Tuning) -> Self {
        let bands = vec![
            ScrollBand::new(
                BandLayer::Background,
                tuning.background_tile_width(),
                0.0,
                tuning.background_speed,
                tuning.window_width,
            ),
            ScrollBand::new(
                BandLayer::Ground,
                tuning.ground_tile_width,
                tuning.ground_y(),
                tuning.ground_speed,
                tuning.window_width,
            ),
        ];
        Self {
            bands,
            obstacles: Vec::new(),
        }
    }

    /// Advance bands and obstacles. Returns ids of obstacles that scrolled off screen.
    pub fn tick(&mut self, dt: f32) -> Vec<EntityId> {
        for band in &mut self.bands {
            band.tick(dt);
        }
        for obstacle in &mut self.obstacles {
            obstacle.x -= obstacle.speed * dt;
        }

        let mut expired = Vec::new();
        self.obstacles.retain(|o| {
            let keep = o.right_edge() > 0.0;
            if !keep {
                expired.push(o.id);
            }
            keep
        });
        expired
    }

    pub fn insert(&mut self, obstacle: Obstacle) {
        self.obstacles.push(obstacle);
        self.obstacles.sort_by_key(|o| o.id);
    }

    pub fn remove(&mut self, id: EntityId) -> Option<Obstacle> {
        let idx = self.obstacles.iter().position(|o| o.id == id)?;
        Some(self.obstacles.remove(idx))
    }

    /// Drop every obstacle; bands keep scrolling
    pub fn clear_obstacles(&mut self) -> Vec<EntityId> {
        self.obstacles.drain(..).map(|o| o.id).collect()
    }

    pub fn obstacle(&self, id: EntityId) -> Option<&Obstacle> {
        self.obstacles
            .binary_search_by_key(&id, |o| o.id)
            .ok()
            .map(|idx| &self.obstacles[idx])
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn band(&self, layer: BandLayer) -> Option<&ScrollBand> {
        self.bands.iter().find(|b| b.layer == layer)
    }
}
