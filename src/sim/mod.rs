//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time comes in as parameters, never from a global clock
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod body;
pub mod collision;
pub mod entity;
pub mod field;
pub mod quiz;
pub mod score;
pub mod shape;
pub mod spawner;
pub mod state;
pub mod tick;

pub use autopilot::autopilot;
pub use body::PhysicsBody;
pub use collision::{CollisionDetector, HitKind};
pub use entity::{EntityId, IdAllocator};
pub use field::{BandLayer, Obstacle, ObstacleKind, ScrollBand, ScrollingField};
pub use quiz::{Question, QuizEngine, QuizError, QuizOutcome, default_questions};
pub use score::ScoreAccumulator;
pub use shape::{Shape, intersects, sd_box, sd_circle};
pub use spawner::{ObstacleSpawner, SpawnedPair};
pub use state::{GameEvent, GameMode, GameState};
pub use tick::{InputEvent, TickReport, tick};
