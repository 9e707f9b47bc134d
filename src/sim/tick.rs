//! One simulation tick
//!
//! Order within a tick: drain input, advance physics/scroll/spawner, check
//! collisions, then apply the resulting transition. Rendering happens after
//! `tick` returns, so a frame always reflects its own collision outcome.

use super::state::{GameEvent, GameMode, GameState};

/// Abstract input, already decoupled from raw device polling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Flap; only valid while playing
    Jump,
    /// Pick an answer (0-based); only valid in the quiz
    SelectAnswer(usize),
    /// Start a new run; only valid after a failed quiz
    Restart,
    Quit,
}

/// What a tick produced
#[derive(Debug, Clone, Default)]
pub struct TickReport {
    pub events: Vec<GameEvent>,
    /// A quit request was seen; the driver should stop after this frame
    pub quit: bool,
}

/// Advance the game by one frame
///
/// `now` is the frame timestamp in seconds; `dt` the time since the last frame.
/// Events that do not apply to the current mode are ignored.
pub fn tick(state: &mut GameState, input: &[InputEvent], now: f64, dt: f32) -> TickReport {
    let mut report = TickReport::default();
    state.now = now;

    for &event in input {
        match (event, state.mode) {
            (InputEvent::Quit, _) => {
                report.quit = true;
                return report;
            }
            (InputEvent::Jump, GameMode::Playing) => {
                if let Some(plane) = state.plane.as_mut() {
                    plane.impulse();
                    report.events.push(GameEvent::Jumped);
                }
            }
            (InputEvent::SelectAnswer(index), GameMode::Quiz)
                if index < state.quiz.current().answers.len() =>
            {
                report.events.push(state.resolve_quiz(index, now));
            }
            (InputEvent::Restart, GameMode::GameOver) => {
                report.events.push(state.restart(now));
            }
            (event, mode) => {
                log::debug!("Ignoring {:?} in {:?}", event, mode);
            }
        }
    }

    let playing = state.mode == GameMode::Playing;

    if playing {
        if let Some(plane) = state.plane.as_mut() {
            plane.apply_gravity(dt);
        }
    }

    // Bands keep scrolling in every mode
    let expired = state.field.tick(dt);
    state.forget_expired(&expired);

    if playing {
        for pair in state.run_spawner(dt) {
            report.events.push(GameEvent::ObstacleSpawned(pair));
        }

        let hit = state
            .plane
            .as_ref()
            .and_then(|plane| state.collisions.probe(plane, &state.field));
        if let Some(cause) = hit {
            report.events.push(state.crash(cause, now));
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::collision::HitKind;
    use crate::tuning::Tuning;

    const DT: f32 = 1.0 / 120.0;

    fn new_state() -> GameState {
        GameState::new(12345, Tuning::default(), 0.0)
    }

    /// Tick with no input from `from` to `to` seconds; stops early on a crash
    fn run_until(state: &mut GameState, from: f64, to: f64) -> f64 {
        let mut now = from;
        while now < to && state.mode == GameMode::Playing {
            now += DT as f64;
            tick(state, &[], now, DT);
        }
        now
    }

    /// Force a ceiling crash at `now`
    fn crash_at(state: &mut GameState, now: f64) -> TickReport {
        if let Some(plane) = state.plane.as_mut() {
            plane.pos.y = -1.0;
        }
        tick(state, &[], now, 0.0)
    }

    #[test]
    fn test_gravity_only_while_playing() {
        let mut state = new_state();
        for i in 1..=60 {
            tick(&mut state, &[], i as f64 * DT as f64, DT);
        }
        let plane = state.plane.as_ref().unwrap();
        let expected = state.tuning.gravity * DT * 60.0;
        assert!((plane.velocity_y - expected).abs() < 0.01);
    }

    #[test]
    fn test_jump_sets_velocity() {
        let mut state = new_state();
        tick(&mut state, &[], 0.5, 0.5);
        let report = tick(&mut state, &[InputEvent::Jump], 0.5, 0.0);
        assert_eq!(report.events, vec![GameEvent::Jumped]);
        assert_eq!(
            state.plane.as_ref().unwrap().velocity_y,
            state.tuning.jump_velocity
        );
        assert_eq!(state.mode, GameMode::Playing);
    }

    #[test]
    fn test_ceiling_and_obstacle_crash_alike() {
        let mut by_ceiling = new_state();
        let report = crash_at(&mut by_ceiling, 1.0);
        assert!(matches!(
            report.events.last(),
            Some(GameEvent::Crashed {
                cause: HitKind::Ceiling,
                ..
            })
        ));

        let mut by_obstacle = new_state();
        let tuning = by_obstacle.tuning.clone();
        let plane_x = by_obstacle.plane.as_ref().unwrap().pos.x;
        let ids = [by_obstacle.next_entity_id(), by_obstacle.next_entity_id()];
        let gap = tuning.gap_center_range().1;
        for (id, kind) in ids.into_iter().zip([
            crate::sim::field::ObstacleKind::Top,
            crate::sim::field::ObstacleKind::Bottom,
        ]) {
            by_obstacle.collisions.register(id);
            by_obstacle
                .field
                .insert(crate::sim::field::Obstacle::new(id, kind, plane_x, gap, &tuning));
        }
        let report = tick(&mut by_obstacle, &[], 1.0, 0.0);
        assert!(matches!(
            report.events.last(),
            Some(GameEvent::Crashed {
                cause: HitKind::Obstacle(_),
                ..
            })
        ));

        for state in [&by_ceiling, &by_obstacle] {
            assert_eq!(state.mode, GameMode::Quiz);
            assert!(state.plane.is_none());
            assert!(state.field.obstacles().is_empty());
            assert!(state.collisions.is_empty());
        }
    }

    #[test]
    fn test_falling_to_ground_enters_quiz() {
        let mut state = new_state();
        let tuning = state.tuning.clone();
        let mut now = 0.0;
        let mut crash = None;
        while now < 5.0 && crash.is_none() {
            now += DT as f64;
            let report = tick(&mut state, &[], now, DT);
            crash = report.events.into_iter().find_map(|e| match e {
                GameEvent::Crashed { cause, score } => Some((cause, score)),
                _ => None,
            });
        }

        assert_eq!(crash, Some((HitKind::Ground, 0)));
        // Free fall from the start height to the ground clamp
        let drop = (tuning.ground_y() - tuning.plane_radius - tuning.plane_start_y) as f64;
        let expected = (2.0 * drop / tuning.gravity as f64).sqrt();
        assert!((now - expected).abs() < 0.05);
        assert!(now < tuning.spawn_period as f64);

        assert_eq!(state.mode, GameMode::Quiz);
        assert!(state.plane.is_none());
        assert_eq!(state.run_ended_at, Some(now));
    }

    #[test]
    fn test_scenario_correct_answer_continues() {
        let mut state = new_state();
        assert_eq!(state.display_score(3.4), 3);

        crash_at(&mut state, 3.4);
        assert_eq!(state.mode, GameMode::Quiz);

        // "What is 2 + 2?" -> index 1
        let report = tick(&mut state, &[InputEvent::SelectAnswer(1)], 5.0, 0.0);
        assert_eq!(
            report.events,
            vec![GameEvent::QuizPassed {
                accumulated: 3,
                next_question: 1
            }]
        );
        assert_eq!(state.mode, GameMode::Playing);
        assert_eq!(state.score.accumulated(), 3);
        assert_eq!(state.score.session_start(), 5.0);
        assert_eq!(state.quiz.current_index(), 1);
        assert!(state.plane.is_some());
        assert_eq!(state.display_score(7.2), 5);
    }

    #[test]
    fn test_scenario_wrong_answer_game_over() {
        let mut state = new_state();
        crash_at(&mut state, 3.4);
        tick(&mut state, &[InputEvent::SelectAnswer(1)], 4.0, 0.0);
        crash_at(&mut state, 6.0);
        assert_eq!(state.quiz.current_index(), 1);

        // "What color is the sky?" -> 0 is correct, 2 is wrong
        let report = tick(&mut state, &[InputEvent::SelectAnswer(2)], 7.0, 0.0);
        assert_eq!(report.events, vec![GameEvent::QuizFailed]);
        assert_eq!(state.mode, GameMode::GameOver);
        assert_eq!(state.score.accumulated(), 0);
        assert_eq!(state.quiz.current_index(), 0);
        assert!(state.plane.is_none());
    }

    #[test]
    fn test_correct_answer_never_lowers_score() {
        let mut state = new_state();
        let mut now = 0.0;
        for _ in 0..7 {
            now = run_until(&mut state, now, now + 1.5);
            if state.mode == GameMode::Playing {
                now += 0.01;
                crash_at(&mut state, now);
            }
            let before = state.score.accumulated();
            let correct = state.quiz.current().correct_index;
            tick(&mut state, &[InputEvent::SelectAnswer(correct)], now, 0.0);
            assert_eq!(state.mode, GameMode::Playing);
            assert!(state.score.accumulated() >= before);
        }
    }

    #[test]
    fn test_restart_ignored_during_quiz() {
        let mut state = new_state();
        crash_at(&mut state, 2.0);
        let report = tick(&mut state, &[InputEvent::Restart], 2.5, 0.0);
        assert!(report.events.is_empty());
        assert_eq!(state.mode, GameMode::Quiz);
        assert!(state.plane.is_none());
    }

    #[test]
    fn test_restart_from_game_over() {
        let mut state = new_state();
        crash_at(&mut state, 2.0);
        tick(&mut state, &[InputEvent::SelectAnswer(0)], 2.5, 0.0);
        assert_eq!(state.mode, GameMode::GameOver);

        let report = tick(&mut state, &[InputEvent::Restart], 9.0, 0.0);
        assert_eq!(report.events, vec![GameEvent::Restarted]);
        assert_eq!(state.mode, GameMode::Playing);
        assert_eq!(state.score.session_start(), 9.0);
        assert_eq!(state.display_score(9.5), 0);
    }

    #[test]
    fn test_out_of_mode_input_ignored() {
        let mut state = new_state();
        let report = tick(
            &mut state,
            &[InputEvent::SelectAnswer(1), InputEvent::Restart],
            0.1,
            0.0,
        );
        assert!(report.events.is_empty());
        assert_eq!(state.mode, GameMode::Playing);
        assert_eq!(state.quiz.current_index(), 0);

        crash_at(&mut state, 1.0);
        let report = tick(&mut state, &[InputEvent::Jump, InputEvent::SelectAnswer(7)], 1.1, 0.0);
        assert!(report.events.is_empty());
        assert_eq!(state.mode, GameMode::Quiz);
    }

    #[test]
    fn test_spawner_suspended_outside_play() {
        let mut state = new_state();
        crash_at(&mut state, 0.5);
        let before = state.spawner.elapsed();
        for i in 0..600 {
            let report = tick(&mut state, &[], 0.5 + i as f64 * DT as f64, DT);
            assert!(
                !report
                    .events
                    .iter()
                    .any(|e| matches!(e, GameEvent::ObstacleSpawned(_)))
            );
        }
        assert_eq!(state.spawner.elapsed(), before);
        assert!(state.field.obstacles().is_empty());
    }

    #[test]
    fn test_one_pair_per_period_while_playing() {
        // Crawling obstacles never reach the plane within the test window
        let tuning = Tuning {
            obstacle_base_speed: 1.0,
            ..Tuning::default()
        };
        let mut state = GameState::new(12345, tuning, 0.0);
        let mut pairs = 0;
        let mut now = 0.0;
        // Keep the plane hovering near the middle so it survives
        for _ in 0..(120 * 3) {
            now += DT as f64;
            let plane_y = state.plane.as_ref().map(|p| p.pos.y).unwrap_or(0.0);
            let input: &[InputEvent] = if plane_y > state.tuning.plane_start_y {
                &[InputEvent::Jump]
            } else {
                &[]
            };
            let report = tick(&mut state, input, now, DT);
            pairs += report
                .events
                .iter()
                .filter(|e| matches!(e, GameEvent::ObstacleSpawned(_)))
                .count();
        }
        // 3 seconds at 1.4 s per pair
        assert_eq!(pairs, 2);
        assert_eq!(state.mode, GameMode::Playing);
    }

    #[test]
    fn test_quit_stops_processing() {
        let mut state = new_state();
        let report = tick(&mut state, &[InputEvent::Quit, InputEvent::Jump], 0.1, DT);
        assert!(report.quit);
        assert!(report.events.is_empty());
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let mut state1 = new_state();
        let mut state2 = new_state();
        let inputs = [vec![], vec![InputEvent::Jump], vec![], vec![]];

        let mut now = 0.0;
        for _ in 0..200 {
            for input in &inputs {
                now += DT as f64;
                tick(&mut state1, input, now, DT);
                tick(&mut state2, input, now, DT);
            }
        }

        assert_eq!(state1.mode, state2.mode);
        assert_eq!(state1.field.obstacles().len(), state2.field.obstacles().len());
        for (a, b) in state1.field.obstacles().iter().zip(state2.field.obstacles()) {
            assert_eq!(a.gap_center_y, b.gap_center_y);
            assert_eq!(a.x, b.x);
        }
    }
}
