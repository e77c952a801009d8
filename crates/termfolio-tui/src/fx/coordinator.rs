//! Throttled scroll fan-out.

use std::time::{Duration, Instant};

use super::tracker::{ActiveSectionTracker, NavSection};

/// Leading-edge rate limiter: at most one permitted call per window,
/// excess invocations within the window are dropped, not queued.
#[derive(Debug, Clone)]
pub struct Throttle {
    window: Duration,
    last_run: Option<Instant>,
}

impl Throttle {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_run: None,
        }
    }

    /// True when the caller may run now
    pub fn allow(&mut self, now: Instant) -> bool {
        match self.last_run {
            Some(last) if now.duration_since(last) < self.window => false,
            _ => {
                self.last_run = Some(now);
                true
            }
        }
    }
}

/// Fans throttled scroll changes out to the independent threshold
/// checks: navbar scrolled state, scroll-to-top visibility and the
/// active section recomputation. The three share nothing beyond the
/// raw offset.
#[derive(Debug, Clone)]
pub struct ScrollFxCoordinator<I> {
    throttle: Throttle,
    navbar_rows: u16,
    to_top_rows: u16,
    tracker: ActiveSectionTracker<I>,
    /// Navbar has left its top-of-page style
    pub navbar_scrolled: bool,
    /// Scroll-to-top control is shown
    pub to_top_visible: bool,
}

impl<I: Copy + PartialEq> ScrollFxCoordinator<I> {
    pub fn new(throttle_ms: u64, navbar_rows: u16, to_top_rows: u16, lookahead: u16) -> Self {
        Self {
            throttle: Throttle::new(Duration::from_millis(throttle_ms)),
            navbar_rows,
            to_top_rows,
            tracker: ActiveSectionTracker::new(lookahead),
            navbar_scrolled: false,
            to_top_visible: false,
        }
    }

    pub fn active_section(&self) -> Option<I> {
        self.tracker.active()
    }

    /// Run one scroll pass if the throttle window permits it.
    /// Returns false when the invocation was dropped; a dropped
    /// trailing event is accepted imprecision, the next scroll or
    /// resize repaints.
    pub fn on_scroll(&mut self, offset: u16, sections: &[NavSection<I>], now: Instant) -> bool {
        if !self.throttle.allow(now) {
            return false;
        }
        self.navbar_scrolled = offset > self.navbar_rows;
        self.to_top_visible = offset > self.to_top_rows;
        self.tracker.update(offset, sections);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_throttle_one_pass_per_window() {
        let mut throttle = Throttle::new(Duration::from_millis(16));
        let start = Instant::now();

        assert!(throttle.allow(start));
        // N events within the window: all dropped
        for ms in [1, 5, 10, 15] {
            assert!(!throttle.allow(start + Duration::from_millis(ms)));
        }
        // Next window opens
        assert!(throttle.allow(start + Duration::from_millis(16)));
    }

    fn sections() -> Vec<NavSection<&'static str>> {
        vec![
            NavSection::new("home", 0, 40),
            NavSection::new("about", 40, 60),
        ]
    }

    #[test]
    fn test_thresholds_are_independent() {
        let mut fx: ScrollFxCoordinator<&str> = ScrollFxCoordinator::new(16, 100, 300, 100);
        let start = Instant::now();

        assert!(fx.on_scroll(150, &sections(), start));
        assert!(fx.navbar_scrolled);
        assert!(!fx.to_top_visible);

        assert!(fx.on_scroll(301, &sections(), start + Duration::from_millis(20)));
        assert!(fx.navbar_scrolled);
        assert!(fx.to_top_visible);

        assert!(fx.on_scroll(0, &sections(), start + Duration::from_millis(40)));
        assert!(!fx.navbar_scrolled);
        assert!(!fx.to_top_visible);
    }

    #[test]
    fn test_dropped_pass_leaves_state_unchanged() {
        let mut fx: ScrollFxCoordinator<&str> = ScrollFxCoordinator::new(16, 2, 10, 4);
        let start = Instant::now();

        assert!(fx.on_scroll(50, &sections(), start));
        assert_eq!(fx.active_section(), Some("about"));
        assert!(fx.to_top_visible);

        // Within the same window: invocation dropped, nothing moves
        assert!(!fx.on_scroll(0, &sections(), start + Duration::from_millis(5)));
        assert_eq!(fx.active_section(), Some("about"));
        assert!(fx.to_top_visible);
    }
}
