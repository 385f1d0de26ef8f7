use gloo_timers::callback::Timeout;
use log::{debug, warn};
use web_sys::window;
use yew::prelude::*;

use crate::config;
use crate::navigation::scroll::{current_fragment, scroll_to_anchor};
use crate::navigation::sections::{PageSection, SectionTracker};

use super::observer::ViewportObserver;

// A thin horizontal band a little above the middle of the viewport. The
// region crossing it is the one the reader is looking at.
const ACTIVE_BAND: &str = "-40% 0px -55% 0px";

/// Active-section state for one page, handed to navigation via props.
#[derive(Clone, PartialEq)]
pub struct SectionNav<S: PageSection> {
    pub active: Option<S>,
    /// Activate a section and smooth-scroll to it.
    pub select: Callback<S>,
}

impl<S: PageSection> SectionNav<S> {
    pub fn active_anchor(&self) -> Option<&'static str> {
        self.active.map(|s| s.anchor())
    }

    /// Selection keyed by DOM id, for widgets that only know anchors.
    pub fn select_anchor(&self) -> Callback<&'static str> {
        let select = self.select.clone();
        Callback::from(move |anchor: &'static str| match S::from_anchor(anchor) {
            Some(section) => select.emit(section),
            None => warn!("No section registered for anchor '{}'", anchor),
        })
    }
}

#[hook]
pub fn use_section_tracker<S>(initial: Option<S>) -> SectionNav<S>
where
    S: PageSection,
{
    let active = use_state_eq(move || initial);
    let tracker = use_mut_ref(move || SectionTracker::new(initial));
    let settle_timer = use_mut_ref(|| None::<Timeout>);

    {
        let active = active.clone();
        let tracker = tracker.clone();
        use_effect_with_deps(
            move |_| {
                let observer = ViewportObserver::new(Some(ACTIVE_BAND), move |entry, _| {
                    let id = entry.target().id();
                    if let Some(section) = S::from_anchor(&id) {
                        let mut tracker = tracker.borrow_mut();
                        let now = tracker.observe(section, entry.is_intersecting());
                        if tracker.is_settling() {
                            debug!("Holding {:?} until the scroll lands", now);
                        }
                        active.set(now);
                    }
                });

                match (&observer, window().and_then(|w| w.document())) {
                    (Some(observer), Some(document)) => {
                        for section in S::ALL {
                            match document.get_element_by_id(section.anchor()) {
                                Some(element) => observer.observe(&element),
                                None => debug!("Section '{}' not rendered", section.anchor()),
                            }
                        }
                    }
                    _ => warn!("Viewport tracking unavailable, active section follows clicks only"),
                }

                move || drop(observer)
            },
            (),
        );
    }

    let select = {
        let active = active.clone();
        let tracker = tracker.clone();
        let settle_timer = settle_timer.clone();
        Callback::from(move |section: S| {
            debug!("Navigating to section {:?}", section);
            let now = tracker.borrow_mut().select(section);
            active.set(now);
            scroll_to_anchor(section.anchor(), config::HEADER_OFFSET_PX);

            let tracker = tracker.clone();
            *settle_timer.borrow_mut() = Some(Timeout::new(config::SCROLL_SETTLE_MS, move || {
                let mut tracker = tracker.borrow_mut();
                tracker.settle();
                debug!("Scroll settled on {:?}", tracker.active());
            }));
        })
    };

    // Deep links such as /#services land on their section once mounted.
    {
        let select = select.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(section) = current_fragment().and_then(|f| S::from_anchor(&f)) {
                    select.emit(section);
                }
                || ()
            },
            (),
        );
    }

    {
        let settle_timer = settle_timer.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    settle_timer.borrow_mut().take();
                }
            },
            (),
        );
    }

    SectionNav {
        active: *active,
        select,
    }
}
