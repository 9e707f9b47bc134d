//! Platform abstraction layer
//!
//! Everything the simulation needs from the outside world:
//! - Time/ticks (`time`)
//! - Input events (`input`)
//! - The display/audio/event-source collaborator (`Platform`)

pub mod input;
pub mod time;

pub use input::{Key, RawInput, translate};
pub use time::{FrameTimer, ManualClock, SystemClock, TimeSource};

use crate::audio::AudioCommand;
use crate::renderer::DrawCommand;

/// The outer collaborator that owns the window, speakers and raw event source
pub trait Platform {
    /// Drain raw events gathered since the last frame into `out`
    fn poll_events(&mut self, out: &mut Vec<RawInput>);
    /// Show one frame's draw commands
    fn present(&mut self, frame: &[DrawCommand]);
    /// Start or stop a sound
    fn play(&mut self, command: &AudioCommand);
}
