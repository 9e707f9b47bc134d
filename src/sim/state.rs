//! Game state and session lifecycle
//!
//! Owns the mode, the world containers and everything a tick mutates. Mode
//! changes go through the transition methods here so side effects (killing
//! entities, folding score, moving through the quiz) stay in one place.

use super::body::PhysicsBody;
use super::collision::{CollisionDetector, HitKind};
use super::entity::{EntityId, IdAllocator};
use super::field::ScrollingField;
use super::quiz::{QuizEngine, QuizOutcome};
use super::score::ScoreAccumulator;
use super::spawner::{ObstacleSpawner, SpawnedPair};
use crate::tuning::Tuning;

/// Current mode of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Active gameplay
    Playing,
    /// Run ended and the quiz was failed; waiting for restart
    GameOver,
    /// Run ended; a question gates the continue
    Quiz,
}

/// Notable things that happened during a tick
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    Jumped,
    ObstacleSpawned(SpawnedPair),
    Crashed { cause: HitKind, score: u64 },
    QuizPassed { accumulated: u64, next_question: usize },
    QuizFailed,
    Restarted,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub tuning: Tuning,
    pub mode: GameMode,
    /// The controlled entity; absent while not playing
    pub plane: Option<PhysicsBody>,
    pub field: ScrollingField,
    pub spawner: ObstacleSpawner,
    pub collisions: CollisionDetector,
    pub score: ScoreAccumulator,
    pub quiz: QuizEngine,
    /// Score of the most recent run, shown on the game-over menu
    pub last_score: u64,
    /// When the last run ended; folded into the score on a correct answer
    pub run_ended_at: Option<f64>,
    /// Latest timestamp seen by `tick`
    pub now: f64,
    ids: IdAllocator,
}

impl GameState {
    /// New session already in play, with the built-in question bank
    pub fn new(seed: u64, tuning: Tuning, now: f64) -> Self {
        Self::with_quiz(seed, tuning, QuizEngine::default(), now)
    }

    pub fn with_quiz(seed: u64, tuning: Tuning, quiz: QuizEngine, now: f64) -> Self {
        let mut state = Self {
            seed,
            field: ScrollingField::new(&tuning),
            spawner: ObstacleSpawner::new(&tuning, seed),
            tuning,
            mode: GameMode::Playing,
            plane: None,
            collisions: CollisionDetector::new(),
            score: ScoreAccumulator::new(now),
            quiz,
            last_score: 0,
            run_ended_at: None,
            now,
            ids: IdAllocator::default(),
        };
        state.spawn_plane();
        log::info!("Session started with seed {}", seed);
        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> EntityId {
        self.ids.next()
    }

    /// Put a fresh plane at the start position
    pub fn spawn_plane(&mut self) {
        let id = self.next_entity_id();
        self.plane = Some(PhysicsBody::new(id, &self.tuning));
    }

    /// Score to display at `now`
    pub fn display_score(&self, now: f64) -> u64 {
        match self.mode {
            GameMode::Playing => self.score.current(now),
            GameMode::Quiz => self.score.current(self.run_ended_at.unwrap_or(now)),
            GameMode::GameOver => self.last_score,
        }
    }

    /// Advance the obstacle timer; only meaningful while playing
    pub fn run_spawner(&mut self, dt: f32) -> Vec<SpawnedPair> {
        self.spawner
            .tick(dt, &mut self.ids, &mut self.field, &mut self.collisions)
    }

    /// Drop obstacles that scrolled away from every container
    pub fn forget_expired(&mut self, expired: &[EntityId]) {
        for &id in expired {
            self.collisions.forget(id);
        }
    }

    /// Playing -> Quiz: kill the plane and every obstacle, freeze the run
    pub fn crash(&mut self, cause: HitKind, now: f64) -> GameEvent {
        for id in self.field.clear_obstacles() {
            self.collisions.forget(id);
        }
        self.plane = None;

        let score = self.score.current(now);
        self.last_score = score;
        self.run_ended_at = Some(now);
        self.mode = GameMode::Quiz;
        log::info!("Crashed ({:?}) with score {}; entering quiz", cause, score);
        GameEvent::Crashed { cause, score }
    }

    /// Quiz -> Playing or Quiz -> GameOver
    pub fn resolve_quiz(&mut self, answer: usize, now: f64) -> GameEvent {
        match self.quiz.answer(answer) {
            QuizOutcome::Continue => {
                self.score.fold(self.run_ended_at.unwrap_or(now));
                self.quiz.advance();
                self.begin_run(now);
                log::info!(
                    "Quiz passed; continuing with {} banked",
                    self.score.accumulated()
                );
                GameEvent::QuizPassed {
                    accumulated: self.score.accumulated(),
                    next_question: self.quiz.current_index(),
                }
            }
            QuizOutcome::Reset => {
                self.score.reset();
                self.quiz.reset();
                self.run_ended_at = None;
                self.mode = GameMode::GameOver;
                log::info!("Quiz failed; score reset");
                GameEvent::QuizFailed
            }
        }
    }

    /// GameOver -> Playing
    pub fn restart(&mut self, now: f64) -> GameEvent {
        self.begin_run(now);
        log::info!("Restarted");
        GameEvent::Restarted
    }

    fn begin_run(&mut self, now: f64) {
        self.spawn_plane();
        self.score.begin_run(now);
        self.run_ended_at = None;
        self.mode = GameMode::Playing;
    }
}
