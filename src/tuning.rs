//! Data-driven game balance
//!
//! Every constant the simulation reads lives here so a build can be retuned
//! from JSON without touching code. Defaults come from [`crate::consts`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Errors raised while loading tuning overrides
#[derive(Debug, thiserror::Error)]
pub enum TuningError {
    #[error("Tuning parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid tuning value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Physics, scrolling and spawn constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub window_width: f32,
    pub window_height: f32,
    pub background_scale: f32,

    pub gravity: f32,
    pub jump_velocity: f32,
    pub rotation_factor: f32,
    pub max_rotation: f32,

    pub spawn_period: f32,
    pub obstacle_base_speed: f32,
    pub obstacle_speed_multiplier: f32,
    pub spawn_jitter_min: f32,
    pub spawn_jitter_max: f32,
    pub obstacle_half_width: f32,
    pub obstacle_cap_height: f32,
    pub obstacle_cap_overhang: f32,
    pub gap_half_height: f32,
    pub gap_margin: f32,

    pub background_speed: f32,
    pub ground_speed: f32,
    pub ground_height: f32,
    pub ground_tile_width: f32,

    pub plane_radius: f32,
    pub plane_start_x: f32,
    pub plane_start_y: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            background_scale: BACKGROUND_SCALE,

            gravity: GRAVITY,
            jump_velocity: JUMP_VELOCITY,
            rotation_factor: ROTATION_FACTOR,
            max_rotation: MAX_ROTATION,

            spawn_period: SPAWN_PERIOD,
            obstacle_base_speed: OBSTACLE_BASE_SPEED,
            obstacle_speed_multiplier: OBSTACLE_SPEED_MULTIPLIER,
            spawn_jitter_min: SPAWN_JITTER_MIN,
            spawn_jitter_max: SPAWN_JITTER_MAX,
            obstacle_half_width: OBSTACLE_HALF_WIDTH,
            obstacle_cap_height: OBSTACLE_CAP_HEIGHT,
            obstacle_cap_overhang: OBSTACLE_CAP_OVERHANG,
            gap_half_height: GAP_HALF_HEIGHT,
            gap_margin: GAP_MARGIN,

            background_speed: BACKGROUND_SPEED,
            ground_speed: GROUND_SPEED,
            ground_height: GROUND_HEIGHT,
            ground_tile_width: GROUND_TILE_WIDTH,

            plane_radius: PLANE_RADIUS,
            plane_start_x: PLANE_START_X,
            plane_start_y: PLANE_START_Y,
        }
    }
}

impl Tuning {
    /// Parse overrides from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Y coordinate of the ground surface
    #[inline]
    pub fn ground_y(&self) -> f32 {
        self.window_height - self.ground_height
    }

    /// Where a fresh plane appears
    #[inline]
    pub fn plane_start(&self) -> Vec2 {
        Vec2::new(self.plane_start_x, self.plane_start_y)
    }

    /// Effective obstacle speed (pixels/s)
    #[inline]
    pub fn obstacle_speed(&self) -> f32 {
        self.obstacle_base_speed * self.obstacle_speed_multiplier
    }

    /// Background tile width after scaling the art to the window
    #[inline]
    pub fn background_tile_width(&self) -> f32 {
        BACKGROUND_IMAGE_WIDTH * self.background_scale
    }

    /// Inclusive range for a gap centre that keeps the whole gap on screen with margin
    pub fn gap_center_range(&self) -> (f32, f32) {
        let clearance = self.gap_half_height + self.gap_margin;
        (clearance, self.ground_y() - clearance)
    }

    /// Check every value against its domain
    pub fn validate(&self) -> Result<(), TuningError> {
        fn invalid(field: &'static str, reason: impl Into<String>) -> TuningError {
            TuningError::Invalid {
                field,
                reason: reason.into(),
            }
        }

        for (field, value) in self.fields() {
            if !value.is_finite() {
                return Err(invalid(field, format!("must be finite, got {value}")));
            }
        }

        if self.window_width <= 0.0 || self.window_height <= 0.0 {
            return Err(invalid("window_width", "window must have a positive size"));
        }
        if self.background_tile_width() < MIN_TILE_WIDTH {
            return Err(invalid(
                "background_scale",
                format!("background tiles must be at least {MIN_TILE_WIDTH} px wide"),
            ));
        }
        if self.gravity <= 0.0 {
            return Err(invalid("gravity", format!("must be positive, got {}", self.gravity)));
        }
        if self.jump_velocity >= 0.0 {
            return Err(invalid(
                "jump_velocity",
                format!("must be negative (upward), got {}", self.jump_velocity),
            ));
        }
        if self.max_rotation < 0.0 {
            return Err(invalid("max_rotation", "must not be negative"));
        }
        if self.spawn_period < MIN_SPAWN_PERIOD {
            return Err(invalid(
                "spawn_period",
                format!("must be at least {MIN_SPAWN_PERIOD}s, got {}", self.spawn_period),
            ));
        }
        if self.obstacle_speed() <= 0.0 {
            return Err(invalid("obstacle_base_speed", "obstacles must move left"));
        }
        if self.spawn_jitter_min < 0.0 || self.spawn_jitter_min > self.spawn_jitter_max {
            return Err(invalid("spawn_jitter_min", "jitter range is empty or negative"));
        }
        if self.obstacle_half_width <= 0.0 || self.obstacle_cap_height < 0.0 {
            return Err(invalid("obstacle_half_width", "obstacle geometry must be positive"));
        }
        if self.gap_half_height <= self.plane_radius {
            return Err(invalid("gap_half_height", "gap must be taller than the plane"));
        }
        if self.ground_height < 0.0 || self.ground_height >= self.window_height {
            return Err(invalid("ground_height", "ground must fit inside the window"));
        }
        if self.background_speed < 0.0 || self.ground_speed < 0.0 {
            return Err(invalid("background_speed", "bands scroll left only"));
        }
        if self.ground_tile_width < MIN_TILE_WIDTH {
            return Err(invalid(
                "ground_tile_width",
                format!("must be at least {MIN_TILE_WIDTH} px"),
            ));
        }
        let (lo, hi) = self.gap_center_range();
        if lo > hi {
            return Err(invalid(
                "gap_margin",
                format!("gap does not fit between ceiling and ground ({lo} > {hi})"),
            ));
        }
        if self.plane_radius <= 0.0 {
            return Err(invalid("plane_radius", "must be positive"));
        }
        if self.plane_start_y - self.plane_radius <= 0.0
            || self.plane_start_y + self.plane_radius >= self.ground_y()
        {
            return Err(invalid("plane_start_y", "plane must start between ceiling and ground"));
        }
        Ok(())
    }

    fn fields(&self) -> [(&'static str, f32); 24] {
        [
            ("window_width", self.window_width),
            ("window_height", self.window_height),
            ("background_scale", self.background_scale),
            ("gravity", self.gravity),
            ("jump_velocity", self.jump_velocity),
            ("rotation_factor", self.rotation_factor),
            ("max_rotation", self.max_rotation),
            ("spawn_period", self.spawn_period),
            ("obstacle_base_speed", self.obstacle_base_speed),
            ("obstacle_speed_multiplier", self.obstacle_speed_multiplier),
            ("spawn_jitter_min", self.spawn_jitter_min),
            ("spawn_jitter_max", self.spawn_jitter_max),
            ("obstacle_half_width", self.obstacle_half_width),
            ("obstacle_cap_height", self.obstacle_cap_height),
            ("obstacle_cap_overhang", self.obstacle_cap_overhang),
            ("gap_half_height", self.gap_half_height),
            ("gap_margin", self.gap_margin),
            ("background_speed", self.background_speed),
            ("ground_speed", self.ground_speed),
            ("ground_height", self.ground_height),
            ("ground_tile_width", self.ground_tile_width),
            ("plane_radius", self.plane_radius),
            ("plane_start_x", self.plane_start_x),
            ("plane_start_y", self.plane_start_y),
        ]
    }
}
