//! Smooth scrolling for the portfolio document.
//!
//! Nav jumps and key scrolling animate the offset with configurable
//! easing; rapid key presses are batched per frame.

pub mod animation;
pub mod easing;

pub use animation::ScrollAnimator;
pub use easing::EasingTypeExt;

use std::time::Duration;

pub use termfolio_core::{EasingType, ScrollConfig};

/// Extension trait for ScrollConfig with utility methods
pub trait ScrollConfigExt {
    /// Get animation duration as Duration
    fn animation_duration(&self) -> Duration;

    /// Get tick duration for animation FPS
    fn animation_tick_duration(&self) -> Duration;

    /// Check if smooth scrolling is effectively enabled
    fn is_smooth(&self) -> bool;
}

impl ScrollConfigExt for ScrollConfig {
    #[inline]
    fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_duration_ms)
    }

    #[inline]
    fn animation_tick_duration(&self) -> Duration {
        if self.animation_fps == 0 {
            Duration::from_millis(16) // ~60fps fallback
        } else {
            Duration::from_millis(1000 / self.animation_fps as u64)
        }
    }

    #[inline]
    fn is_smooth(&self) -> bool {
        self.smooth_enabled && self.animation_duration_ms > 0
    }
}
