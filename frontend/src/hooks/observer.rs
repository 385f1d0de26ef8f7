use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Reflect};
use web_sys::{window, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

type EntriesCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Whether the browser provides `IntersectionObserver`.
pub fn intersection_observer_supported() -> bool {
    window()
        .map(|w| Reflect::has(&w, &JsValue::from_str("IntersectionObserver")).unwrap_or(false))
        .unwrap_or(false)
}

/// An `IntersectionObserver` and the closure it calls back into.
/// Disconnects when dropped.
pub struct ViewportObserver {
    observer: IntersectionObserver,
    _callback: EntriesCallback,
}

impl ViewportObserver {
    /// Returns `None` when the primitive is missing or refuses the options.
    pub fn new(
        root_margin: Option<&str>,
        mut on_entry: impl FnMut(&IntersectionObserverEntry, &IntersectionObserver) + 'static,
    ) -> Option<Self> {
        if !intersection_observer_supported() {
            return None;
        }

        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                on_entry(&entry, &observer);
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        if let Some(margin) = root_margin {
            init.set_root_margin(margin);
        }

        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => Some(Self { observer, _callback: callback }),
            Err(e) => {
                warn!("IntersectionObserver rejected options: {:?}", e);
                None
            }
        }
    }

    pub fn observe(&self, element: &Element) {
        self.observer.observe(element);
    }
}

impl Drop for ViewportObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
