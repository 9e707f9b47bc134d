//! Raw input translation
//!
//! Maps device-level events onto the simulation's abstract [`InputEvent`]s.
//! A pointer press means "jump" in play and "restart" on the game-over menu.

use crate::sim::{GameMode, InputEvent};

/// Keys the game cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Digit1,
    Digit2,
    Digit3,
    Space,
    Escape,
    Other,
}

/// Device-level event as delivered by the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawInput {
    PointerDown,
    KeyDown(Key),
    CloseRequested,
}

/// Translate one raw event for the current mode
pub fn translate(raw: RawInput, mode: GameMode) -> Option<InputEvent> {
    match raw {
        RawInput::CloseRequested | RawInput::KeyDown(Key::Escape) => Some(InputEvent::Quit),
        RawInput::PointerDown | RawInput::KeyDown(Key::Space) => match mode {
            GameMode::Playing => Some(InputEvent::Jump),
            GameMode::GameOver => Some(InputEvent::Restart),
            GameMode::Quiz => None,
        },
        RawInput::KeyDown(Key::Digit1) => Some(InputEvent::SelectAnswer(0)),
        RawInput::KeyDown(Key::Digit2) => Some(InputEvent::SelectAnswer(1)),
        RawInput::KeyDown(Key::Digit3) => Some(InputEvent::SelectAnswer(2)),
        RawInput::KeyDown(Key::Other) => None,
    }
}
