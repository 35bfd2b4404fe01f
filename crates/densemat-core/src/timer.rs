//! Wall-clock stopwatch

use std::time::Instant;

/// `tic()` starts (or restarts) the clock; `toc()` reads it
#[derive(Debug, Clone, Copy, Default)]
pub struct Stopwatch {
    started: Option<Instant>,
}

impl Stopwatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tic(&mut self) {
        self.started = Some(Instant::now());
    }

    /// Seconds since the last `tic()`, or 0.0 if never started
    pub fn toc(&self) -> f64 {
        self.started.map_or(0.0, |t| t.elapsed().as_secs_f64())
    }
}
