use yew::prelude::*;

use crate::animation::counter::{CounterSpec, Replay};
use crate::config;
use crate::hooks::animated_counter::use_animated_counter;

#[derive(Properties, PartialEq)]
pub struct AnimatedCounterProps {
    #[prop_or(0)]
    pub from: i64,
    pub to: i64,
    #[prop_or(config::COUNTER_DURATION_MS)]
    pub duration_ms: f64,
    #[prop_or_default]
    pub suffix: AttrValue,
    #[prop_or_default]
    pub replay: Replay,
}

/// A number that counts up to `to` once it scrolls into view.
#[function_component(AnimatedCounter)]
pub fn animated_counter(props: &AnimatedCounterProps) -> Html {
    let node = use_node_ref();
    let value = use_animated_counter(
        node.clone(),
        CounterSpec::new(props.from, props.to, props.duration_ms),
        props.replay,
    );

    html! {
        <span ref={node} class="animated-counter">
            {format!("{}{}", value, props.suffix)}
        </span>
    }
}
