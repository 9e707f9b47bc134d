//! Quiz Flap - native entry point
//!
//! Runs the game headless in attract mode: the autopilot plays against a
//! simulated clock and a summary is logged when the session ends.
//!
//! Usage: `quiz-flap [seed] [seconds] [--tuning FILE] [--questions FILE] [--settings FILE]`
//!
//! The JSON file options may also come from `QUIZ_FLAP_TUNING`,
//! `QUIZ_FLAP_QUESTIONS` and `QUIZ_FLAP_SETTINGS`.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use quiz_flap::audio::AudioCommand;
use quiz_flap::platform::{ManualClock, Platform, RawInput};
use quiz_flap::renderer::DrawCommand;
use quiz_flap::sim::QuizEngine;
use quiz_flap::{Game, Settings, Tuning};

/// Simulated frame step for headless runs
const HEADLESS_DT: f64 = 1.0 / 120.0;

#[derive(Parser, Debug)]
#[command(name = "quiz-flap")]
#[command(about = "Headless attract-mode run of the Quiz Flap simulation")]
struct Cli {
    /// RNG seed (default: derived from the system time)
    seed: Option<u64>,
    /// Simulated seconds to run before closing
    #[arg(default_value_t = 30.0, value_parser = parse_seconds)]
    seconds: f64,
    /// Tuning overrides (JSON)
    #[arg(long, env = "QUIZ_FLAP_TUNING")]
    tuning: Option<PathBuf>,
    /// Question bank (JSON)
    #[arg(long, env = "QUIZ_FLAP_QUESTIONS")]
    questions: Option<PathBuf>,
    /// Presentation settings (JSON)
    #[arg(long, env = "QUIZ_FLAP_SETTINGS")]
    settings: Option<PathBuf>,
}

fn parse_seconds(arg: &str) -> Result<f64, String> {
    let seconds: f64 = arg.parse().map_err(|e| format!("{e}"))?;
    if seconds.is_finite() && seconds >= 0.0 {
        Ok(seconds)
    } else {
        Err(format!("expected a non-negative duration, got {seconds}"))
    }
}

/// Platform with no window: closes itself after a fixed number of frames
struct Headless {
    frames_left: u64,
    presented: u64,
}

impl Platform for Headless {
    fn poll_events(&mut self, out: &mut Vec<RawInput>) {
        if self.frames_left == 0 {
            out.push(RawInput::CloseRequested);
        } else {
            self.frames_left -= 1;
        }
    }

    fn present(&mut self, _frame: &[DrawCommand]) {
        self.presented += 1;
    }

    fn play(&mut self, command: &AudioCommand) {
        log::info!("Audio: {:?} at volume {:.2}", command.cue, command.volume);
    }
}

/// Load and parse an optional JSON config, failing fast on any error
fn load<T, E: std::fmt::Display>(
    what: &str,
    path: Option<&Path>,
    parse: impl FnOnce(&str) -> Result<T, E>,
) -> Option<T> {
    let path = path?;
    let text = std::fs::read_to_string(path)
        .unwrap_or_else(|e| fail(&format!("{what}: cannot read {}: {e}", path.display())));
    let value = parse(&text).unwrap_or_else(|e| fail(&format!("{what}: {e}")));
    log::info!("Loaded {} from {}", what, path.display());
    Some(value)
}

fn fail(message: &str) -> ! {
    log::error!("{}", message);
    std::process::exit(1);
}

fn main() {
    env_logger::init();
    log::info!("Quiz Flap (native) starting...");

    let cli = Cli::parse();
    let seed = cli.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    });

    let tuning = load("tuning", cli.tuning.as_deref(), Tuning::from_json).unwrap_or_default();
    let quiz = load("questions", cli.questions.as_deref(), QuizEngine::from_json)
        .unwrap_or_default();
    let settings = load("settings", cli.settings.as_deref(), Settings::from_json)
        .unwrap_or_default();

    log::info!("Game initialized with seed: {}", seed);
    log::info!("{} quiz questions loaded", quiz.len());

    let mut game = Game::new(seed, tuning, quiz, settings, ManualClock::new(HEADLESS_DT));
    game.idle_mode = true;

    let mut platform = Headless {
        frames_left: (cli.seconds / HEADLESS_DT).round() as u64,
        presented: 0,
    };
    game.run(&mut platform);

    let now = game.state.now;
    log::info!(
        "Session over after {:.1}s ({} frames presented): mode {:?}, score {}, banked {}",
        now,
        platform.presented,
        game.state.mode,
        game.state.display_score(now),
        game.state.score.accumulated()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_seed_and_seconds() {
        let cli = Cli::try_parse_from(["quiz-flap", "42", "12.5"]).unwrap();
        assert_eq!(cli.seed, Some(42));
        assert_eq!(cli.seconds, 12.5);
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["quiz-flap"]).unwrap();
        assert_eq!(cli.seed, None);
        assert_eq!(cli.seconds, 30.0);
    }

    #[test]
    fn test_bad_arguments_rejected() {
        assert!(Cli::try_parse_from(["quiz-flap", "not-a-seed"]).is_err());
        assert!(Cli::try_parse_from(["quiz-flap", "1", "-3"]).is_err());
        assert!(Cli::try_parse_from(["quiz-flap", "1", "inf"]).is_err());
    }

    #[test]
    fn test_config_paths() {
        let cli = Cli::try_parse_from(["quiz-flap", "--tuning", "fast.json"]).unwrap();
        assert_eq!(cli.tuning, Some(PathBuf::from("fast.json")));
    }
}
