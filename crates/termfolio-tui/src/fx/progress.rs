//! Delayed skill bar fill.

use std::time::{Duration, Instant};

/// Armed on visibility: after the configured delay the bar's fill is
/// set to its declared level in one discrete step. The widget's
/// rendering provides the visual ramp; this type only decides when.
#[derive(Debug, Clone)]
pub struct ProgressAnimation {
    level: u8,
    fire_at: Instant,
    fired: bool,
}

impl ProgressAnimation {
    pub fn new(level: u8, delay: Duration, now: Instant) -> Self {
        Self {
            level: level.min(100),
            fire_at: now + delay,
            fired: false,
        }
    }

    /// Returns the fill level exactly once, when the delay has elapsed
    pub fn poll(&mut self, now: Instant) -> Option<u8> {
        if self.fired || now < self.fire_at {
            return None;
        }
        self.fired = true;
        Some(self.level)
    }

    pub fn is_done(&self) -> bool {
        self.fired
    }
}
