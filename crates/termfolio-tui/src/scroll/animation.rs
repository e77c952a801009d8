//! Scroll animation controller.
//!
//! Call a scroll method to set a target, then `update()` each frame to
//! get the current interpolated document offset.

use std::time::{Duration, Instant};

use super::easing::{EasingType, EasingTypeExt};
use super::{ScrollConfig, ScrollConfigExt};

/// Active scroll animation state
#[derive(Debug, Clone)]
struct ActiveAnimation {
    start: Instant,
    from: u16,
    to: u16,
    duration: Duration,
    easing: EasingType,
}

impl ActiveAnimation {
    fn progress(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.duration_since(self.start);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    fn is_complete(&self, now: Instant) -> bool {
        now.duration_since(self.start) >= self.duration
    }
}

/// Linear interpolation for document offsets
#[inline]
fn lerp_u16(from: u16, to: u16, t: f64) -> u16 {
    (from as f64 + (to as f64 - from as f64) * t).round() as u16
}

/// Smooth scrolling controller for the portfolio document
#[derive(Debug, Clone)]
pub struct ScrollAnimator {
    /// Current active animation (if any)
    animation: Option<ActiveAnimation>,
    config: ScrollConfig,
    /// Current scroll offset (always up-to-date)
    current_scroll: u16,
    /// Pending scroll delta for batching multiple scroll events
    pending_delta: i32,
}

impl Default for ScrollAnimator {
    fn default() -> Self {
        Self::new(ScrollConfig::default())
    }
}

impl ScrollAnimator {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            animation: None,
            config,
            current_scroll: 0,
            pending_delta: 0,
        }
    }

    /// Check if an animation is currently active
    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Check if there's pending work (animation or pending delta).
    /// Use this to decide whether the next tick needs a high frame rate.
    #[inline]
    pub fn needs_update(&self) -> bool {
        self.animation.is_some() || self.pending_delta != 0
    }

    /// Get the target offset (final position after the animation)
    pub fn target_scroll(&self) -> u16 {
        self.animation
            .as_ref()
            .map(|a| a.to)
            .unwrap_or(self.current_scroll)
    }

    #[inline]
    pub fn current_scroll(&self) -> u16 {
        self.current_scroll
    }

    /// Set scroll offset immediately (no animation)
    pub fn set_scroll(&mut self, scroll: u16) {
        self.animation = None;
        self.current_scroll = scroll;
        self.pending_delta = 0;
    }

    /// Animate to a target offset, e.g. a section anchor.
    /// Jumps immediately when smooth scrolling is disabled.
    pub fn scroll_to(&mut self, target: u16, max_scroll: u16) {
        let target = target.min(max_scroll);

        if !self.config.is_smooth() {
            self.current_scroll = target;
            self.animation = None;
            return;
        }

        let from = self.current_scroll;
        if from == target {
            self.animation = None;
            return;
        }

        self.animation = Some(ActiveAnimation {
            start: Instant::now(),
            from,
            to: target,
            duration: self.config.animation_duration(),
            easing: self.config.easing,
        });
    }

    /// Scroll by a delta (positive = down, negative = up).
    ///
    /// Multiple scroll events within the same animation frame are
    /// batched together for smoother handling of rapid key presses.
    pub fn scroll_by(&mut self, delta: i32, max_scroll: u16) {
        if !self.config.is_smooth() {
            let new_scroll =
                (self.current_scroll as i32 + delta).clamp(0, max_scroll as i32) as u16;
            self.current_scroll = new_scroll;
            self.animation = None;
            return;
        }

        self.pending_delta += delta;
    }

    /// Scroll down by the configured line count
    pub fn scroll_down(&mut self, max_scroll: u16) {
        let lines = if self.config.is_smooth() {
            1 // Smooth scroll moves 1 line at a time for fine control
        } else {
            self.config.scroll_lines as i32
        };
        self.scroll_by(lines, max_scroll);
    }

    /// Scroll up by the configured line count
    pub fn scroll_up(&mut self, max_scroll: u16) {
        let lines = if self.config.is_smooth() {
            1
        } else {
            self.config.scroll_lines as i32
        };
        self.scroll_by(-lines, max_scroll);
    }

    pub fn scroll_half_page_down(&mut self, viewport_height: u16, max_scroll: u16) {
        let half_page = (viewport_height / 2).max(1) as i32;
        self.scroll_by(half_page, max_scroll);
    }

    pub fn scroll_half_page_up(&mut self, viewport_height: u16, max_scroll: u16) {
        let half_page = (viewport_height / 2).max(1) as i32;
        self.scroll_by(-half_page, max_scroll);
    }

    pub fn scroll_full_page_down(&mut self, viewport_height: u16, max_scroll: u16) {
        self.scroll_by(viewport_height as i32, max_scroll);
    }

    pub fn scroll_full_page_up(&mut self, viewport_height: u16, max_scroll: u16) {
        self.scroll_by(-(viewport_height as i32), max_scroll);
    }

    /// Advance the animation and return the current offset.
    /// Call this every frame.
    pub fn update(&mut self, max_scroll: u16) -> u16 {
        let now = Instant::now();

        // Process any pending scroll delta
        if self.pending_delta != 0 {
            let target = self.target_scroll();
            let new_target =
                (target as i32 + self.pending_delta).clamp(0, max_scroll as i32) as u16;
            self.pending_delta = 0;

            if new_target != self.current_scroll {
                self.animation = Some(ActiveAnimation {
                    start: now,
                    from: self.current_scroll,
                    to: new_target,
                    duration: self.config.animation_duration(),
                    easing: self.config.easing,
                });
            }
        }

        if let Some(ref anim) = self.animation {
            if anim.is_complete(now) {
                self.current_scroll = anim.to.min(max_scroll);
                self.animation = None;
            } else {
                let t = anim.easing.apply(anim.progress(now));
                self.current_scroll = lerp_u16(anim.from, anim.to, t).min(max_scroll);
            }
        }

        self.current_scroll
    }

    /// Cancel any active animation and stop at the current offset
    pub fn cancel(&mut self) {
        self.animation = None;
        self.pending_delta = 0;
    }
}
