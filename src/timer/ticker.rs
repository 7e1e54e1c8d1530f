use std::time::{Duration, Instant};

/// Event-loop poll interval in milliseconds
pub const DEFAULT_TICK_MS: u64 = 250;

/// Get the poll duration for the main loop
pub fn tick_duration() -> Duration {
    Duration::from_millis(DEFAULT_TICK_MS)
}

/// Converts wall-clock progress into whole-second tick events for the
/// timer controller. The baseline only advances by whole seconds, so
/// fractional progress is never lost between polls. Dropping the ticker
/// with its run cancels it; no tick outlives the owning run.
#[derive(Debug)]
pub struct SecondTicker {
    last: Instant,
}

impl SecondTicker {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }

    /// Number of whole seconds elapsed since the last poll
    pub fn poll(&mut self) -> u32 {
        let elapsed = self.last.elapsed();
        let seconds = elapsed.as_secs();
        if seconds > 0 {
            self.last += Duration::from_secs(seconds);
        }
        seconds as u32
    }

    /// Restart the baseline (e.g. when a new run begins)
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }
}

impl Default for SecondTicker {
    fn default() -> Self {
        Self::new()
    }
}
