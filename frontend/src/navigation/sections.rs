//! Section registry and active-section tracking.
//!
//! Each page declares its scroll-anchored regions as an enum implementing
//! [`PageSection`]. A [`SectionTracker`] turns visibility reports from the
//! browser into a single active section and honours optimistic selection
//! from navigation clicks.

/// A named, scroll-anchored region of a page.
pub trait PageSection: Copy + Eq + std::fmt::Debug + 'static {
    /// Every section of the page, in document order.
    const ALL: &'static [Self];

    /// DOM id of the region.
    fn anchor(self) -> &'static str;

    /// Text shown in navigation.
    fn label(self) -> &'static str;

    fn from_anchor(anchor: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.anchor() == anchor)
    }
}

#[derive(Debug, Clone)]
pub struct SectionTracker<S: PageSection> {
    active: Option<S>,
    /// Sections currently in view, oldest entry first.
    in_view: Vec<S>,
    /// Target of a navigation click whose scroll has not landed yet.
    pending: Option<S>,
}

impl<S: PageSection> Default for SectionTracker<S> {
    fn default() -> Self {
        Self::new(None)
    }
}

impl<S: PageSection> SectionTracker<S> {
    pub fn new(initial: Option<S>) -> Self {
        Self {
            active: initial,
            in_view: Vec::with_capacity(S::ALL.len()),
            pending: None,
        }
    }

    #[inline]
    pub fn active(&self) -> Option<S> {
        self.active
    }

    #[inline]
    pub fn is_settling(&self) -> bool {
        self.pending.is_some()
    }

    /// Record that `section` entered or left the viewport band.
    /// Returns the active section afterwards.
    pub fn observe(&mut self, section: S, intersecting: bool) -> Option<S> {
        self.in_view.retain(|s| *s != section);
        if intersecting {
            self.in_view.push(section);
        }

        match self.pending {
            Some(target) if target == section && intersecting => {
                self.pending = None;
                self.active = Some(target);
            }
            Some(_) => {}
            None => {
                if let Some(latest) = self.in_view.last() {
                    self.active = Some(*latest);
                }
            }
        }
        self.active
    }

    /// Optimistically activate `section` ahead of a smooth scroll to it.
    pub fn select(&mut self, section: S) -> Option<S> {
        self.active = Some(section);
        self.pending = if self.in_view.last() == Some(&section) {
            None
        } else {
            Some(section)
        };
        self.active
    }

    /// Stop waiting for a selected section to scroll into view. The
    /// selection stays active until the next visibility change.
    pub fn settle(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Demo {
        Story,
        Mission,
        Values,
    }

    impl PageSection for Demo {
        const ALL: &'static [Self] = &[Demo::Story, Demo::Mission, Demo::Values];

        fn anchor(self) -> &'static str {
            match self {
                Demo::Story => "story",
                Demo::Mission => "mission",
                Demo::Values => "values",
            }
        }

        fn label(self) -> &'static str {
            match self {
                Demo::Story => "Story",
                Demo::Mission => "Mission",
                Demo::Values => "Values",
            }
        }
    }

    #[test]
    fn test_from_anchor() {
        assert_eq!(Demo::from_anchor("mission"), Some(Demo::Mission));
        assert_eq!(Demo::from_anchor("nope"), None);
    }

    #[test]
    fn test_scrolling_down_follows_latest_entry() {
        let mut t = SectionTracker::<Demo>::default();
        assert_eq!(t.active(), None);

        assert_eq!(t.observe(Demo::Story, true), Some(Demo::Story));
        assert_eq!(t.observe(Demo::Mission, true), Some(Demo::Mission));
        assert_eq!(t.observe(Demo::Story, false), Some(Demo::Mission));
    }

    #[test]
    fn test_falls_back_to_remaining_section() {
        let mut t = SectionTracker::<Demo>::default();
        t.observe(Demo::Story, true);
        t.observe(Demo::Mission, true);
        assert_eq!(t.observe(Demo::Mission, false), Some(Demo::Story));
    }

    #[test]
    fn test_keeps_last_active_when_nothing_in_view() {
        let mut t = SectionTracker::new(Some(Demo::Story));
        t.observe(Demo::Values, true);
        assert_eq!(t.observe(Demo::Values, false), Some(Demo::Values));
    }

    #[test]
    fn test_select_is_optimistic_and_ignores_sections_passed_on_the_way() {
        let mut t = SectionTracker::<Demo>::default();
        t.observe(Demo::Story, true);

        assert_eq!(t.select(Demo::Values), Some(Demo::Values));
        assert!(t.is_settling());

        // Smooth scroll passes through Mission.
        assert_eq!(t.observe(Demo::Story, false), Some(Demo::Values));
        assert_eq!(t.observe(Demo::Mission, true), Some(Demo::Values));
        assert_eq!(t.observe(Demo::Mission, false), Some(Demo::Values));

        assert_eq!(t.observe(Demo::Values, true), Some(Demo::Values));
        assert!(!t.is_settling());

        // Normal tracking resumes.
        assert_eq!(t.observe(Demo::Mission, true), Some(Demo::Mission));
    }

    #[test]
    fn test_settle_keeps_selection_until_next_change() {
        let mut t = SectionTracker::<Demo>::default();
        t.observe(Demo::Mission, true);
        t.select(Demo::Values);
        t.settle();
        assert_eq!(t.active(), Some(Demo::Values));
        assert_eq!(t.observe(Demo::Story, true), Some(Demo::Story));
    }

    #[test]
    fn test_selecting_visible_section_does_not_wait() {
        let mut t = SectionTracker::<Demo>::default();
        t.observe(Demo::Mission, true);
        t.select(Demo::Mission);
        assert!(!t.is_settling());
    }
}
