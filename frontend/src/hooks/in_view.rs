use web_sys::Element;
use yew::prelude::*;

use super::observer::{intersection_observer_supported, ViewportObserver};

/// Tracks whether the element behind `node` intersects the viewport.
///
/// `None` means visibility cannot be observed in this browser. With `once`
/// the observer detaches after the first time the element is seen, leaving
/// the result at `Some(true)`.
#[hook]
pub fn use_in_view(node: NodeRef, once: bool) -> Option<bool> {
    let visible = use_state_eq(|| intersection_observer_supported().then_some(false));

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |(node, once)| {
                let once = *once;
                let observer = node.cast::<Element>().and_then(|element| {
                    let observer = ViewportObserver::new(None, move |entry, observer| {
                        let intersecting = entry.is_intersecting();
                        visible.set(Some(intersecting));
                        if once && intersecting {
                            observer.disconnect();
                        }
                    })?;
                    observer.observe(&element);
                    Some(observer)
                });
                move || drop(observer)
            },
            (node, once),
        );
    }

    *visible
}
