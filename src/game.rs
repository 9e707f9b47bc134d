//! Frame driver
//!
//! Glues a [`Platform`] and a [`TimeSource`] to the simulation: sample the
//! clock, translate raw input, tick, then hand the frame to the platform.

use crate::audio::AudioMixer;
use crate::platform::{FrameTimer, Platform, RawInput, TimeSource, translate};
use crate::renderer::build_frame;
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, InputEvent, QuizEngine, autopilot, tick};
use crate::tuning::Tuning;

pub struct Game<C: TimeSource> {
    pub state: GameState,
    pub settings: Settings,
    /// Let the autopilot play (attract/demo mode)
    pub idle_mode: bool,
    clock: C,
    timer: FrameTimer,
    mixer: AudioMixer,
    raw: Vec<RawInput>,
    input: Vec<InputEvent>,
    frames: u64,
}

impl<C: TimeSource> Game<C> {
    pub fn new(
        seed: u64,
        tuning: Tuning,
        quiz: QuizEngine,
        settings: Settings,
        mut clock: C,
    ) -> Self {
        let now = clock.now();
        let mut timer = FrameTimer::default();
        // Prime the timer so the first frame has a zero step
        timer.delta(now);
        Self {
            state: GameState::with_quiz(seed, tuning, quiz, now),
            mixer: AudioMixer::new(&settings),
            settings,
            idle_mode: false,
            clock,
            timer,
            raw: Vec::new(),
            input: Vec::new(),
            frames: 0,
        }
    }

    /// Frames stepped so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Kick off session-wide effects (music)
    pub fn start(&mut self, platform: &mut impl Platform) {
        if let Some(command) = self.mixer.start_music() {
            platform.play(&command);
        }
    }

    /// Run one frame. Returns false once a quit was requested.
    pub fn step(&mut self, platform: &mut impl Platform) -> bool {
        let now = self.clock.now();
        let dt = self.timer.delta(now);

        self.raw.clear();
        platform.poll_events(&mut self.raw);

        self.input.clear();
        let mode = self.state.mode;
        self.input
            .extend(self.raw.iter().filter_map(|&raw| translate(raw, mode)));
        if self.idle_mode {
            self.input.extend(autopilot(&self.state));
        }

        let report = tick(&mut self.state, &self.input, now, dt);
        self.frames += 1;
        for event in &report.events {
            log_event(event);
        }
        if report.quit {
            log::info!("Quit requested after {} frames", self.frames);
            return false;
        }

        let frame = build_frame(&self.state, &self.settings);
        platform.present(&frame);
        true
    }

    /// Step until quit
    pub fn run(&mut self, platform: &mut impl Platform) {
        self.start(platform);
        while self.step(platform) {}
    }
}

fn log_event(event: &GameEvent) {
    match event {
        GameEvent::Jumped => log::trace!("Jump"),
        GameEvent::ObstacleSpawned(pair) => {
            log::trace!("Obstacle pair spawned, gap at {:.0}", pair.gap_center_y)
        }
        GameEvent::Crashed { cause, score } => log::debug!("Crash: {:?}, score {}", cause, score),
        GameEvent::QuizPassed {
            accumulated,
            next_question,
        } => log::debug!("Quiz passed: {} banked, next question {}", accumulated, next_question),
        GameEvent::QuizFailed => log::debug!("Quiz failed"),
        GameEvent::Restarted => log::debug!("Restart"),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use crate::audio::AudioCommand;
    use crate::platform::{Key, ManualClock};
    use crate::renderer::{DrawCommand, Sprite};
    use crate::sim::GameMode;

    /// Replays scripted input, one batch per frame, and records output
    #[derive(Default)]
    struct Recorder {
        script: VecDeque<Vec<RawInput>>,
        frames: Vec<Vec<DrawCommand>>,
        sounds: Vec<AudioCommand>,
    }

    impl Platform for Recorder {
        fn poll_events(&mut self, out: &mut Vec<RawInput>) {
            if let Some(batch) = self.script.pop_front() {
                out.extend(batch);
            }
        }

        fn present(&mut self, frame: &[DrawCommand]) {
            self.frames.push(frame.to_vec());
        }

        fn play(&mut self, command: &AudioCommand) {
            self.sounds.push(*command);
        }
    }

    fn game() -> Game<ManualClock> {
        Game::new(
            9,
            Tuning::default(),
            QuizEngine::default(),
            Settings::default(),
            ManualClock::new(1.0 / 60.0),
        )
    }

    #[test]
    fn test_close_stops_run() {
        let mut game = game();
        let mut platform = Recorder::default();
        platform.script.extend([vec![], vec![], vec![RawInput::CloseRequested]]);
        game.run(&mut platform);

        assert_eq!(game.frames(), 3);
        assert_eq!(platform.frames.len(), 2);
        assert_eq!(platform.sounds.len(), 1);
        assert!(platform.sounds[0].looping);
    }

    #[test]
    fn test_pointer_jumps_plane() {
        let mut game = game();
        let mut platform = Recorder::default();
        platform.script.push_back(vec![]);
        platform.script.push_back(vec![RawInput::PointerDown]);
        game.step(&mut platform);
        game.step(&mut platform);

        // Impulse, then one frame of gravity in the same tick
        let tuning = &game.state.tuning;
        let expected = tuning.jump_velocity + tuning.gravity / 60.0;
        let plane = game.state.plane.as_ref().unwrap();
        assert!((plane.velocity_y - expected).abs() < 1e-3);
    }

    #[test]
    fn test_digit_answers_quiz() {
        let mut game = game();
        let mut platform = Recorder::default();
        game.state.crash(crate::sim::HitKind::Ceiling, 0.0);
        platform.script.push_back(vec![RawInput::KeyDown(Key::Digit2)]);
        game.step(&mut platform);
        assert_eq!(game.state.mode, GameMode::Playing);
        assert_eq!(game.state.quiz.current_index(), 1);
    }

    #[test]
    fn test_frames_draw_plane_while_playing() {
        let mut game = game();
        let mut platform = Recorder::default();
        game.step(&mut platform);
        let has_plane = platform.frames[0].iter().any(|c| {
            matches!(
                c,
                DrawCommand::Sprite {
                    sprite: Sprite::Plane,
                    ..
                }
            )
        });
        assert!(has_plane);
    }

    #[test]
    fn test_idle_mode_plays_itself() {
        let mut game = game();
        game.idle_mode = true;
        let mut platform = Recorder::default();
        // Ten simulated seconds
        for _ in 0..600 {
            assert!(game.step(&mut platform));
        }
        assert_ne!(game.state.mode, GameMode::GameOver);
    }
}
