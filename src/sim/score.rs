//! Time-based score with a persistent base
//!
//! A run scores one point per whole second of active play. The accumulated
//! base survives quiz-gated continues and is zeroed by a wrong answer.

/// Whole seconds between two timestamps, never negative
#[inline]
fn whole_seconds(start: f64, end: f64) -> u64 {
    (end - start).max(0.0).floor() as u64
}

#[derive(Debug, Clone, Default)]
pub struct ScoreAccumulator {
    accumulated: u64,
    /// Timestamp (seconds) the current run started
    session_start: f64,
}

impl ScoreAccumulator {
    pub fn new(now: f64) -> Self {
        Self {
            accumulated: 0,
            session_start: now,
        }
    }

    /// Points banked by earlier runs
    pub fn accumulated(&self) -> u64 {
        self.accumulated
    }

    pub fn session_start(&self) -> f64 {
        self.session_start
    }

    /// Score shown at `now` while a run is live
    pub fn current(&self, now: f64) -> u64 {
        self.accumulated + whole_seconds(self.session_start, now)
    }

    /// Bank the run that ended at `run_end`
    pub fn fold(&mut self, run_end: f64) {
        self.accumulated += whole_seconds(self.session_start, run_end);
    }

    /// Start timing a new run
    pub fn begin_run(&mut self, now: f64) {
        self.session_start = now;
    }

    pub fn reset(&mut self) {
        self.accumulated = 0;
    }
}
