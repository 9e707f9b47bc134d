//! Time sources
//!
//! The simulation never reads a clock itself; the driver samples a
//! [`TimeSource`] once per frame and passes the timestamp and delta down.

use std::time::Instant;

use crate::consts::MAX_FRAME_DT;

/// Monotonic timestamp source, in seconds
pub trait TimeSource {
    fn now(&mut self) -> f64;
}

/// Wall clock measured from construction
#[derive(Debug, Clone)]
pub struct SystemClock {
    origin: Instant,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl TimeSource for SystemClock {
    fn now(&mut self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

/// Clock that advances by a fixed step each time it is read (tests, headless runs)
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: f64,
    step: f64,
}

impl ManualClock {
    pub fn new(step: f64) -> Self {
        Self { now: 0.0, step }
    }
}

impl TimeSource for ManualClock {
    fn now(&mut self) -> f64 {
        let now = self.now;
        self.now += self.step;
        now
    }
}

/// Turns successive timestamps into clamped deltas
#[derive(Debug, Clone)]
pub struct FrameTimer {
    last: Option<f64>,
    max_dt: f32,
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self {
            last: None,
            max_dt: MAX_FRAME_DT,
        }
    }
}

impl FrameTimer {
    /// Seconds since the previous call; zero on the first call
    pub fn delta(&mut self, now: f64) -> f32 {
        let dt = match self.last {
            Some(last) => (now - last).max(0.0) as f32,
            None => 0.0,
        };
        self.last = Some(now);
        // Clamp hitches so one slow frame can't teleport the plane
        dt.min(self.max_dt)
    }
}
