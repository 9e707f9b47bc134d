//! Idle/demo mode - AI plays the game
//!
//! Produces the same abstract input a player would, so the attract loop
//! exercises the exact code path of a real session.

use super::field::ObstacleKind;
use super::state::{GameMode, GameState};
use super::tick::InputEvent;

/// How far below the gap centre the plane may sink before flapping
const FLAP_MARGIN: f32 = 18.0;

/// Decide this frame's input for the demo player
pub fn autopilot(state: &GameState) -> Vec<InputEvent> {
    match state.mode {
        GameMode::Playing => {
            let Some(plane) = state.plane.as_ref() else {
                return Vec::new();
            };

            // Aim for the nearest gap still ahead of (or around) the plane
            let behind = plane.pos.x - plane.radius;
            let target_y = state
                .field
                .obstacles()
                .iter()
                .filter(|o| o.kind == ObstacleKind::Top && o.right_edge() >= behind)
                .min_by(|a, b| a.x.total_cmp(&b.x))
                .map(|o| o.gap_center_y)
                .unwrap_or(state.tuning.plane_start_y);

            let sinking = plane.velocity_y >= 0.0;
            if sinking && plane.pos.y > target_y + FLAP_MARGIN {
                vec![InputEvent::Jump]
            } else {
                Vec::new()
            }
        }
        // The demo always knows the answer
        GameMode::Quiz => vec![InputEvent::SelectAnswer(state.quiz.current().correct_index)],
        GameMode::GameOver => vec![InputEvent::Restart],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::collision::HitKind;
    use crate::sim::tick::tick;
    use crate::tuning::Tuning;

    #[test]
    fn test_flaps_when_low() {
        let mut state = GameState::new(5, Tuning::default(), 0.0);
        if let Some(plane) = state.plane.as_mut() {
            plane.pos.y += 100.0;
            plane.velocity_y = 50.0;
        }
        assert_eq!(autopilot(&state), vec![InputEvent::Jump]);
    }

    #[test]
    fn test_answers_quiz_and_restarts() {
        let mut state = GameState::new(5, Tuning::default(), 0.0);
        state.crash(HitKind::Ceiling, 1.0);
        assert_eq!(autopilot(&state), vec![InputEvent::SelectAnswer(1)]);

        state.resolve_quiz(0, 1.0);
        assert_eq!(state.mode, GameMode::GameOver);
        assert_eq!(autopilot(&state), vec![InputEvent::Restart]);
    }

    #[test]
    fn test_demo_session_never_fails_quiz() {
        use crate::sim::state::GameEvent;

        let mut state = GameState::new(77, Tuning::default(), 0.0);
        let dt = 1.0 / 120.0;
        let mut now = 0.0;
        let mut banked = 0;
        for _ in 0..(120 * 20) {
            now += dt as f64;
            let input = autopilot(&state);
            let report = tick(&mut state, &input, now, dt);
            assert!(!report.events.contains(&GameEvent::QuizFailed));
            assert!(state.score.accumulated() >= banked);
            banked = state.score.accumulated();
        }
        assert_ne!(state.mode, GameMode::GameOver);
    }
}
