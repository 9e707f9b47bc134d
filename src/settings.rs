//! Game settings and preferences
//!
//! Presentation-only choices: nothing here changes how the simulation plays.

use serde::{Deserialize, Serialize};

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,
    pub muted: bool,

    // === Quiz ===
    /// Draw the correct answer in a highlight color
    pub highlight_correct_answer: bool,

    // === Accessibility ===
    /// Reduced motion (no plane tilt)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            // Audio
            master_volume: 0.8,
            music_volume: 0.7,
            muted: false,

            // Quiz
            highlight_correct_answer: true,

            // Accessibility
            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Parse settings; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Effective plane tilt (respects reduced_motion)
    pub fn effective_rotation(&self, rotation: f32) -> f32 {
        if self.reduced_motion { 0.0 } else { rotation }
    }
}
