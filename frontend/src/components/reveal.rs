use yew::prelude::*;

use crate::hooks::in_view::use_in_view;

/// Direction a block slides in from.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum RevealFrom {
    #[default]
    Below,
    Left,
    Right,
}

impl RevealFrom {
    fn class(self) -> &'static str {
        match self {
            RevealFrom::Below => "reveal-below",
            RevealFrom::Left => "reveal-left",
            RevealFrom::Right => "reveal-right",
        }
    }

    /// Alternate sides for list items, starting on the left.
    pub fn alternating(index: usize) -> Self {
        if index % 2 == 0 {
            RevealFrom::Left
        } else {
            RevealFrom::Right
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub from: RevealFrom,
    #[prop_or(0)]
    pub delay_ms: u32,
    #[prop_or_default]
    pub class: Classes,
}

/// Fades its children in the first time they scroll into view.
/// Without a visibility primitive the content is shown straight away.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), true);
    let shown = in_view.unwrap_or(true);

    html! {
        <div
            ref={node}
            class={classes!("reveal", props.from.class(), shown.then_some("shown"), props.class.clone())}
            style={format!("transition-delay: {}ms;", props.delay_ms)}
        >
            <style>
                {r#"
                    .reveal {
                        opacity: 0;
                        transition: opacity 0.8s cubic-bezier(0.2, 0.65, 0.3, 0.9),
                                    transform 0.8s cubic-bezier(0.2, 0.65, 0.3, 0.9);
                    }
                    .reveal-below { transform: translateY(20px); }
                    .reveal-left { transform: translateX(-20px); }
                    .reveal-right { transform: translateX(20px); }
                    .reveal.shown {
                        opacity: 1;
                        transform: none;
                    }
                "#}
            </style>
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alternating_sides() {
        assert_eq!(RevealFrom::alternating(0), RevealFrom::Left);
        assert_eq!(RevealFrom::alternating(1), RevealFrom::Right);
        assert_eq!(RevealFrom::alternating(2), RevealFrom::Left);
    }
}
