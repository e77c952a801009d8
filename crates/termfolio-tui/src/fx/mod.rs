//! Scroll-triggered reveal and animation engine.
//!
//! The document is a vertical strip of rows; geometry is queried live
//! from the current layout on every pass. Components:
//!
//! - `observer` - one-shot visibility subscriptions (threshold crossing)
//! - `counter` - per-frame stat counter value generator
//! - `progress` - delayed one-step skill bar fill
//! - `tracker` - active navigation section resolution
//! - `coordinator` - throttled scroll fan-out to the above
//! - `typewriter` - hero tagline type/delete cycler
//! - `ripple` - transient activation highlight

pub mod coordinator;
pub mod counter;
pub mod observer;
pub mod progress;
pub mod ripple;
pub mod tracker;
pub mod typewriter;

pub use coordinator::{ScrollFxCoordinator, Throttle};
pub use counter::CounterAnimation;
pub use observer::{SubscriptionId, ViewportObserver};
pub use progress::ProgressAnimation;
pub use ripple::Ripple;
pub use tracker::{ActiveSectionTracker, NavSection};
pub use typewriter::Typewriter;

/// A vertical slice of the document, in rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowSpan {
    pub top: u16,
    pub height: u16,
}

impl RowSpan {
    pub fn new(top: u16, height: u16) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> u16 {
        self.top.saturating_add(self.height)
    }

    /// Fraction of this span lying inside `viewport` (0.0-1.0)
    pub fn visible_fraction(&self, viewport: RowSpan) -> f64 {
        if self.height == 0 {
            return 0.0;
        }
        let top = self.top.max(viewport.top);
        let bottom = self.bottom().min(viewport.bottom());
        if bottom <= top {
            return 0.0;
        }
        f64::from(bottom - top) / f64::from(self.height)
    }

    /// True when `row` falls within `[top, top + height)`
    pub fn contains(&self, row: u16) -> bool {
        row >= self.top && row < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_fraction() {
        let viewport = RowSpan::new(10, 20);
        // Fully inside
        assert_eq!(RowSpan::new(12, 4).visible_fraction(viewport), 1.0);
        // Fully outside
        assert_eq!(RowSpan::new(0, 5).visible_fraction(viewport), 0.0);
        assert_eq!(RowSpan::new(30, 5).visible_fraction(viewport), 0.0);
        // Half clipped at the top edge
        assert_eq!(RowSpan::new(8, 4).visible_fraction(viewport), 0.5);
        // Zero-height spans are never visible
        assert_eq!(RowSpan::new(12, 0).visible_fraction(viewport), 0.0);
    }

    #[test]
    fn test_contains_is_half_open() {
        let span = RowSpan::new(5, 10);
        assert!(span.contains(5));
        assert!(span.contains(14));
        assert!(!span.contains(15));
        assert!(!span.contains(4));
    }
}
