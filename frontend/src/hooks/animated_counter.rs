use log::debug;
use yew::prelude::*;

use crate::animation::counter::{CounterDriver, CounterSpec, Replay};

use super::frame_loop::FrameLoop;
use super::in_view::use_in_view;

/// Drives a counter from `spec.from` to `spec.to` once `node` becomes
/// visible and returns the value to display.
///
/// Each call site owns its own driver, so counters never share state.
#[hook]
pub fn use_animated_counter(node: NodeRef, spec: CounterSpec, replay: Replay) -> i64 {
    let value = use_state_eq(|| spec.from);
    let driver = use_mut_ref(|| CounterDriver::new(spec, replay));
    let frames = use_mut_ref(|| None::<FrameLoop>);
    let visible = use_in_view(node, replay == Replay::Once);

    {
        let value = value.clone();
        let driver = driver.clone();
        let frames = frames.clone();
        use_effect_with_deps(
            move |visible| {
                if let Some(visible) = *visible {
                    let start = driver.borrow_mut().on_visibility(visible);
                    if start {
                        debug!(
                            "Counter to {} started (run {})",
                            spec.to,
                            driver.borrow().starts()
                        );
                        let driver = driver.clone();
                        let setter = value.setter();
                        *frames.borrow_mut() = FrameLoop::start(move |timestamp| {
                            let tick = driver.borrow_mut().tick(timestamp);
                            setter.set(tick.value);
                            tick.running
                        });
                    } else if !visible && replay == Replay::OnReentry {
                        frames.borrow_mut().take();
                        let driver = driver.borrow();
                        debug!("Counter to {} left view, now {:?}", spec.to, driver.phase());
                        value.set(driver.value());
                    }
                }
                || ()
            },
            visible,
        );
    }

    {
        let frames = frames.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    frames.borrow_mut().take();
                }
            },
            (),
        );
    }

    *value
}
