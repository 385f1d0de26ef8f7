use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::window;

type FrameCallback = Closure<dyn FnMut(f64)>;

/// A `requestAnimationFrame` chain.
///
/// `on_frame` receives each frame timestamp and returns whether another
/// frame should be requested. Dropping the loop cancels the pending frame.
pub struct FrameLoop {
    callback: Rc<RefCell<Option<FrameCallback>>>,
    pending: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
    pub fn start(mut on_frame: impl FnMut(f64) -> bool + 'static) -> Option<Self> {
        let callback: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
        let pending = Rc::new(Cell::new(None));

        let weak_callback = Rc::downgrade(&callback);
        let pending_clone = pending.clone();
        *callback.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
            pending_clone.set(None);
            if !on_frame(timestamp) {
                return;
            }
            // The loop owns the closure; once it is dropped there is nothing to reschedule.
            if let Some(callback) = weak_callback.upgrade() {
                if let Some(callback) = callback.borrow().as_ref() {
                    pending_clone.set(request_frame(callback));
                }
            }
        }) as Box<dyn FnMut(f64)>));

        let first = callback.borrow().as_ref().and_then(request_frame)?;
        pending.set(Some(first));

        Some(Self { callback, pending })
    }

    pub fn cancel(&self) {
        if let Some(id) = self.pending.take() {
            if let Some(window) = window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
        self.callback.borrow_mut().take();
    }
}

fn request_frame(callback: &FrameCallback) -> Option<i32> {
    let window = window()?;
    match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
        Ok(id) => Some(id),
        Err(e) => {
            warn!("requestAnimationFrame failed: {:?}", e);
            None
        }
    }
}
