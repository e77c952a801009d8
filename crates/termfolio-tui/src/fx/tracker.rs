//! Active navigation section resolution.

/// A navigable page section with its current document geometry.
/// Built fresh from the layout on every call; never cached.
#[derive(Debug, Clone, Copy)]
pub struct NavSection<I> {
    pub id: I,
    pub top: u16,
    pub height: u16,
}

impl<I> NavSection<I> {
    pub fn new(id: I, top: u16, height: u16) -> Self {
        Self { id, top, height }
    }

    fn contains(&self, row: u16) -> bool {
        row >= self.top && row < self.top.saturating_add(self.height)
    }
}

/// Resolves which navbar entry is active for a scroll offset.
///
/// The probe row is `offset + lookahead`. When no section contains the
/// probe, the previously active section is retained rather than
/// clearing to none. That retention matches the page this reproduces;
/// it may be an artifact of the original lookahead arithmetic rather
/// than intent, but it is what users saw.
#[derive(Debug, Clone)]
pub struct ActiveSectionTracker<I> {
    lookahead: u16,
    active: Option<I>,
}

impl<I: Copy + PartialEq> ActiveSectionTracker<I> {
    /// Default lookahead, matching the original page's 100px offset
    pub const DEFAULT_LOOKAHEAD: u16 = 100;

    pub fn new(lookahead: u16) -> Self {
        Self {
            lookahead,
            active: None,
        }
    }

    pub fn active(&self) -> Option<I> {
        self.active
    }

    /// Recompute the active section for `offset` against the sections
    /// of the current layout, in page order.
    pub fn update(&mut self, offset: u16, sections: &[NavSection<I>]) -> Option<I> {
        let probe = offset.saturating_add(self.lookahead);
        if let Some(section) = sections.iter().find(|s| s.contains(probe)) {
            self.active = Some(section.id);
        }
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<NavSection<&'static str>> {
        vec![
            NavSection::new("about", 0, 500),
            NavSection::new("projects", 500, 400),
        ]
    }

    #[test]
    fn test_probe_selects_containing_section() {
        let mut tracker = ActiveSectionTracker::new(ActiveSectionTracker::<&str>::DEFAULT_LOOKAHEAD);
        // offset 450 -> probe 550, inside [500, 900)
        assert_eq!(tracker.update(450, &sections()), Some("projects"));
        // offset 50 -> probe 150, inside [0, 500)
        assert_eq!(tracker.update(50, &sections()), Some("about"));
    }

    #[test]
    fn test_exactly_one_active() {
        let mut tracker = ActiveSectionTracker::new(100);
        let active = tracker.update(350, &sections());
        // probe 450 lies in exactly one range
        assert_eq!(active, Some("about"));
        assert_eq!(tracker.active(), Some("about"));
    }

    #[test]
    fn test_no_match_retains_previous() {
        let mut tracker = ActiveSectionTracker::new(100);
        assert_eq!(tracker.update(450, &sections()), Some("projects"));
        // Probe past the last section: previous stays active
        assert_eq!(tracker.update(900, &sections()), Some("projects"));
        assert_eq!(tracker.active(), Some("projects"));
    }

    #[test]
    fn test_no_match_with_no_history_stays_none() {
        let mut tracker: ActiveSectionTracker<&str> = ActiveSectionTracker::new(0);
        let gap = vec![NavSection::new("later", 50, 10)];
        assert_eq!(tracker.update(0, &gap), None);
    }

    #[test]
    fn test_geometry_is_read_per_call() {
        let mut tracker = ActiveSectionTracker::new(0);
        let before = vec![NavSection::new("a", 0, 10), NavSection::new("b", 10, 10)];
        assert_eq!(tracker.update(12, &before), Some("b"));
        // Content above grew; same offset now maps to the first section
        let after = vec![NavSection::new("a", 0, 20), NavSection::new("b", 20, 10)];
        assert_eq!(tracker.update(12, &after), Some("a"));
    }
}
