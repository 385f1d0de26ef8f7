use stylist::yew::styled_component;
use yew::prelude::*;

use crate::hooks::pointer::use_pointer_position;

const FOLLOWER_DIAMETER: f64 = 96.0;

/// Whether the pointer is over an interactive card. Provided by the page,
/// set by [`HoverZone`]s, read to decide if the follower is mounted.
pub type HoverFlag = UseStateHandle<bool>;

#[derive(Properties, PartialEq)]
pub struct HoverZoneProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(HoverZone)]
pub fn hover_zone(props: &HoverZoneProps) -> Html {
    let hovering = use_context::<HoverFlag>();

    let onmouseenter = {
        let hovering = hovering.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(flag) = &hovering {
                flag.set(true);
            }
        })
    };
    let onmouseleave = Callback::from(move |_: MouseEvent| {
        if let Some(flag) = &hovering {
            flag.set(false);
        }
    });

    html! {
        <div class={classes!("hover-zone", props.class.clone())} {onmouseenter} {onmouseleave}>
            { for props.children.iter() }
        </div>
    }
}

/// Decorative circle trailing the pointer. Listens to `mousemove` only
/// while mounted.
#[styled_component(CursorFollower)]
pub fn cursor_follower() -> Html {
    let position = use_pointer_position();

    let style = css!(
        r#"
        position: fixed;
        top: 0;
        left: 0;
        width: 96px;
        height: 96px;
        border-radius: 50%;
        background: rgba(0, 0, 0, 0.1);
        pointer-events: none;
        z-index: 50;
        mix-blend-mode: difference;
        transition: transform 0.15s ease-out;
        "#
    );

    match position {
        Some(pos) => html! {
            <div
                class={style}
                style={format!("transform: {};", pos.follower_transform(FOLLOWER_DIAMETER))}
            />
        },
        None => html! {},
    }
}
