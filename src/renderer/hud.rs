//! Score, menu and quiz overlays

use glam::Vec2;

use super::{Anchor, Color, DrawCommand, FontSize, Sprite};
use crate::settings::Settings;
use crate::sim::{GameMode, GameState};

/// Height of the menu art, used to place the game-over score beneath it
pub const MENU_HEIGHT: f32 = 180.0;

pub const QUIZ_INSTRUCTIONS: &str = "Press 1, 2, or 3 to answer!";

/// Append HUD text (and the menu overlay outside of play)
pub fn draw_hud(frame: &mut Vec<DrawCommand>, state: &GameState, settings: &Settings) {
    let width = state.tuning.window_width;
    let height = state.tuning.window_height;
    let score = state.display_score(state.now);

    if state.mode == GameMode::Playing {
        frame.push(text(
            score.to_string(),
            Vec2::new(width / 2.0, height / 10.0),
            Anchor::MidTop,
            Color::Black,
            FontSize::Large,
        ));
        return;
    }

    frame.push(DrawCommand::Sprite {
        sprite: Sprite::Menu,
        pos: Vec2::new(width / 2.0, height / 2.0),
        anchor: Anchor::Center,
        rotation: 0.0,
    });

    match state.mode {
        GameMode::Quiz => draw_quiz(frame, state, settings, score),
        _ => frame.push(text(
            score.to_string(),
            Vec2::new(width / 2.0, height / 2.0 + MENU_HEIGHT / 1.5),
            Anchor::MidTop,
            Color::Black,
            FontSize::Large,
        )),
    }
}

fn draw_quiz(frame: &mut Vec<DrawCommand>, state: &GameState, settings: &Settings, score: u64) {
    let cx = state.tuning.window_width / 2.0;
    let question = state.quiz.current();

    frame.push(text(
        format!("Total Score: {score}"),
        Vec2::new(cx, 50.0),
        Anchor::Center,
        Color::White,
        FontSize::Large,
    ));
    frame.push(text(
        question.prompt.clone(),
        Vec2::new(cx, 150.0),
        Anchor::Center,
        Color::White,
        FontSize::Small,
    ));

    for (i, answer) in question.answers.iter().enumerate() {
        let color = if settings.highlight_correct_answer && i == question.correct_index {
            Color::Yellow
        } else {
            Color::White
        };
        frame.push(text(
            format!("{}. {}", i + 1, answer),
            Vec2::new(cx, 200.0 + i as f32 * 40.0),
            Anchor::Center,
            color,
            FontSize::Small,
        ));
    }

    frame.push(text(
        QUIZ_INSTRUCTIONS.to_string(),
        Vec2::new(cx, 350.0),
        Anchor::Center,
        Color::Cyan,
        FontSize::Small,
    ));
}

fn text(text: String, pos: Vec2, anchor: Anchor, color: Color, size: FontSize) -> DrawCommand {
    DrawCommand::Text {
        text,
        pos,
        anchor,
        color,
        size,
    }
}
