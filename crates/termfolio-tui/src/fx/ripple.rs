//! Transient activation highlight.

use std::time::{Duration, Instant};

/// Decorative flash on an activated control. Intensity decays linearly
/// to zero over the duration, then the effect self-removes.
#[derive(Debug, Clone)]
pub struct Ripple {
    started: Instant,
    duration: Duration,
}

impl Ripple {
    /// Default lifetime, matching the original page's 600ms effect
    pub const DURATION_MS: u64 = 600;

    pub fn new(now: Instant) -> Self {
        Self {
            started: now,
            duration: Duration::from_millis(Self::DURATION_MS),
        }
    }

    /// Remaining intensity in [0.0, 1.0]
    pub fn intensity(&self, now: Instant) -> f64 {
        let elapsed = now.duration_since(self.started);
        if elapsed >= self.duration {
            return 0.0;
        }
        1.0 - elapsed.as_secs_f64() / self.duration.as_secs_f64()
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.started) >= self.duration
    }
}
