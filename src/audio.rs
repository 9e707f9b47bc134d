//! Audio commands
//!
//! The core never touches an audio device. It decides *what* should play
//! and at what volume; the platform turns [`AudioCommand`]s into sound.

use crate::settings::Settings;

/// Sound cues the game can request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// Background music, looped for the whole session
    Music,
}

/// A request for the platform's audio backend
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AudioCommand {
    pub cue: SoundCue,
    /// Final volume (0.0 - 1.0) after mixing
    pub volume: f32,
    /// Repeat until stopped
    pub looping: bool,
}

/// Volume mixer for the game
#[derive(Debug, Clone)]
pub struct AudioMixer {
    master_volume: f32,
    music_volume: f32,
    muted: bool,
    music_started: bool,
}

impl AudioMixer {
    pub fn new(settings: &Settings) -> Self {
        Self {
            master_volume: settings.master_volume.clamp(0.0, 1.0),
            music_volume: settings.music_volume.clamp(0.0, 1.0),
            muted: settings.muted,
            music_started: false,
        }
    }

    /// Get effective volume for a cue
    pub fn effective_volume(&self, cue: SoundCue) -> f32 {
        if self.muted {
            return 0.0;
        }
        match cue {
            SoundCue::Music => self.master_volume * self.music_volume,
        }
    }

    /// The looping music command, produced only once per session
    pub fn start_music(&mut self) -> Option<AudioCommand> {
        if self.music_started {
            return None;
        }
        self.music_started = true;
        Some(AudioCommand {
            cue: SoundCue::Music,
            volume: self.effective_volume(SoundCue::Music),
            looping: true,
        })
    }
}
