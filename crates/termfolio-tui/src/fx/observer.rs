//! One-shot visibility subscriptions.
//!
//! The terminal analogue of an intersection observer: targets are
//! registered once, and on a scroll-driven pass every subscription
//! whose rect crosses the visibility threshold is delivered exactly
//! once and removed.

use super::RowSpan;

/// Handle for a registered subscription; the observer disposes of it
/// automatically after first delivery, `cancel` removes it early.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

#[derive(Debug)]
struct Subscription<K> {
    id: SubscriptionId,
    key: K,
}

/// Observes target visibility over the scrolling document
#[derive(Debug)]
pub struct ViewportObserver<K> {
    threshold: f64,
    next_id: u64,
    subscriptions: Vec<Subscription<K>>,
}

impl<K: Clone> ViewportObserver<K> {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            next_id: 0,
            subscriptions: Vec::new(),
        }
    }

    /// Register a target for one-shot delivery
    pub fn observe(&mut self, key: K) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscriptions.push(Subscription { id, key });
        id
    }

    /// Remove a subscription before it fires
    pub fn cancel(&mut self, id: SubscriptionId) {
        self.subscriptions.retain(|s| s.id != id);
    }

    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }

    /// Run a visibility pass.
    ///
    /// `rect_of` resolves a target's current rect from the live
    /// layout; targets without a rect are skipped, not dropped.
    /// Returns the keys whose visible fraction reached the threshold;
    /// each such subscription is removed and never fires again.
    pub fn update<F>(&mut self, viewport: RowSpan, rect_of: F) -> Vec<K>
    where
        F: Fn(&K) -> Option<RowSpan>,
    {
        let threshold = self.threshold;
        let mut delivered = Vec::new();

        self.subscriptions.retain(|sub| {
            match rect_of(&sub.key) {
                Some(rect) if rect.visible_fraction(viewport) >= threshold => {
                    delivered.push(sub.key.clone());
                    false
                }
                // Absent targets stay registered for later passes
                _ => true,
            }
        });

        delivered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rects<'a>(
        pairs: &'a [(&'static str, RowSpan)],
    ) -> impl Fn(&&'static str) -> Option<RowSpan> + 'a {
        move |key| pairs.iter().find(|(k, _)| k == key).map(|(_, r)| *r)
    }

    #[test]
    fn test_fires_once_at_threshold() {
        let mut observer = ViewportObserver::new(0.5);
        observer.observe("stat");
        let layout = [("stat", RowSpan::new(30, 4))];

        // Not visible yet
        assert!(observer
            .update(RowSpan::new(0, 20), rects(&layout))
            .is_empty());
        // Half visible: 30..32 of 30..34 inside 12..32
        let fired = observer.update(RowSpan::new(12, 20), rects(&layout));
        assert_eq!(fired, vec!["stat"]);
        assert!(observer.is_empty());
    }

    #[test]
    fn test_never_refires_after_scroll_back() {
        let mut observer = ViewportObserver::new(0.5);
        observer.observe("stat");
        let layout = [("stat", RowSpan::new(30, 4))];

        assert_eq!(
            observer.update(RowSpan::new(20, 20), rects(&layout)).len(),
            1
        );
        // Scroll away and back repeatedly
        for viewport in [
            RowSpan::new(0, 20),
            RowSpan::new(25, 20),
            RowSpan::new(0, 20),
            RowSpan::new(28, 20),
        ] {
            assert!(observer.update(viewport, rects(&layout)).is_empty());
        }
    }

    #[test]
    fn test_absent_target_is_skipped_not_dropped() {
        let mut observer = ViewportObserver::new(0.5);
        observer.observe("late");

        // No rect yet: nothing fires, subscription survives
        assert!(observer
            .update(RowSpan::new(0, 20), |_| None)
            .is_empty());
        assert!(!observer.is_empty());

        let layout = [("late", RowSpan::new(5, 2))];
        assert_eq!(
            observer.update(RowSpan::new(0, 20), rects(&layout)),
            vec!["late"]
        );
    }

    #[test]
    fn test_cancel_before_delivery() {
        let mut observer = ViewportObserver::new(0.5);
        let id = observer.observe("a");
        observer.observe("b");
        observer.cancel(id);

        let layout = [("a", RowSpan::new(0, 2)), ("b", RowSpan::new(0, 2))];
        let fired = observer.update(RowSpan::new(0, 20), rects(&layout));
        assert_eq!(fired, vec!["b"]);
    }

    #[test]
    fn test_multiple_targets_delivered_in_registration_order() {
        let mut observer = ViewportObserver::new(0.5);
        observer.observe("first");
        observer.observe("second");
        let layout = [
            ("second", RowSpan::new(2, 2)),
            ("first", RowSpan::new(0, 2)),
        ];
        let fired = observer.update(RowSpan::new(0, 20), rects(&layout));
        assert_eq!(fired, vec!["first", "second"]);
    }
}
