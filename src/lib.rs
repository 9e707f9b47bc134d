//! Quiz Flap - a side-scrolling arcade core with a quiz-gated continue
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, scrolling, spawning, collisions, game state)
//! - `renderer`: Abstract draw commands built from the simulation state
//! - `audio`: Abstract audio commands and volume mixing
//! - `platform`: Time source, input translation and the outer frame-loop collaborator
//! - `tuning`: Data-driven game balance
//! - `settings`: Player-facing presentation preferences

pub mod audio;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use game::Game;
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Window dimensions (pixels)
    pub const WINDOW_WIDTH: f32 = 480.0;
    pub const WINDOW_HEIGHT: f32 = 800.0;

    /// Source background art size; everything world-sized is scaled to fill the window height
    pub const BACKGROUND_IMAGE_WIDTH: f32 = 384.0;
    pub const BACKGROUND_IMAGE_HEIGHT: f32 = 640.0;
    pub const BACKGROUND_SCALE: f32 = WINDOW_HEIGHT / BACKGROUND_IMAGE_HEIGHT;

    /// Downward acceleration (pixels/s²)
    pub const GRAVITY: f32 = 600.0;
    /// Velocity set by a jump impulse (negative is up)
    pub const JUMP_VELOCITY: f32 = -400.0;
    /// Cosmetic tilt in degrees per pixel/s of vertical velocity
    pub const ROTATION_FACTOR: f32 = 0.06;
    /// Maximum cosmetic tilt magnitude (degrees)
    pub const MAX_ROTATION: f32 = 30.0;

    /// Seconds of active play between obstacle pairs
    pub const SPAWN_PERIOD: f32 = 1.4;
    /// Shortest period accepted; keeps spawn catch-up bounded per frame
    pub const MIN_SPAWN_PERIOD: f32 = 1e-3;
    /// Obstacle horizontal speed before the multiplier (pixels/s)
    pub const OBSTACLE_BASE_SPEED: f32 = 400.0;
    pub const OBSTACLE_SPEED_MULTIPLIER: f32 = 1.1;
    /// Extra distance beyond the right edge where a pair appears
    pub const SPAWN_JITTER_MIN: f32 = 40.0;
    pub const SPAWN_JITTER_MAX: f32 = 100.0;

    /// Obstacle geometry
    pub const OBSTACLE_HALF_WIDTH: f32 = 40.0;
    pub const OBSTACLE_CAP_HEIGHT: f32 = 24.0;
    pub const OBSTACLE_CAP_OVERHANG: f32 = 6.0;
    pub const GAP_HALF_HEIGHT: f32 = 120.0;
    /// Minimum clearance between a gap and the ceiling/ground
    pub const GAP_MARGIN: f32 = 40.0;

    /// Scroll band speeds (pixels/s)
    pub const BACKGROUND_SPEED: f32 = 300.0;
    pub const GROUND_SPEED: f32 = 360.0;
    /// Ground strip height; the ground surface is the lower bound for the plane
    pub const GROUND_HEIGHT: f32 = 100.0;
    pub const GROUND_TILE_WIDTH: f32 = 600.0;
    /// Narrowest band tile accepted (pixels)
    pub const MIN_TILE_WIDTH: f32 = 1.0;

    /// Controlled entity
    pub const PLANE_RADIUS: f32 = 24.0;
    pub const PLANE_START_X: f32 = WINDOW_WIDTH / 20.0 + PLANE_RADIUS;
    pub const PLANE_START_Y: f32 = WINDOW_HEIGHT / 2.0;

    /// Largest delta time handed to the simulation in one frame
    pub const MAX_FRAME_DT: f32 = 0.25;
}
