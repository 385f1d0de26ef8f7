use stylist::yew::styled_component;
use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub struct Dot {
    pub anchor: &'static str,
    pub label: &'static str,
}

#[derive(Properties, PartialEq)]
pub struct NavDotsProps {
    pub dots: Vec<Dot>,
    #[prop_or_default]
    pub active_anchor: Option<&'static str>,
    pub on_select: Callback<&'static str>,
}

/// Fixed column of dots on the right edge, one per page section.
#[styled_component(NavDots)]
pub fn nav_dots(props: &NavDotsProps) -> Html {
    let container = css!(
        r#"
        position: fixed;
        right: 2.5rem;
        top: 50%;
        transform: translateY(-50%);
        z-index: 50;
        display: flex;
        flex-direction: column;
        gap: 1.5rem;

        @media (max-width: 768px) {
            display: none;
        }
        "#
    );
    let dot = css!(
        r#"
        width: 12px;
        height: 12px;
        padding: 0;
        border: none;
        border-radius: 50%;
        background: #d1d5db;
        cursor: pointer;
        transition: transform 0.2s ease, background 0.2s ease;

        &:hover {
            transform: scale(1.5);
        }
        &.active {
            background: #000;
        }
        "#
    );

    html! {
        <nav class={container} aria-label="Page sections">
            { for props.dots.iter().map(|d| {
                let anchor = d.anchor;
                let on_select = props.on_select.clone();
                let onclick = Callback::from(move |e: MouseEvent| {
                    e.prevent_default();
                    on_select.emit(anchor);
                });
                let active = props.active_anchor == Some(anchor);
                html! {
                    <button
                        key={anchor}
                        class={classes!(dot.clone(), active.then_some("active"))}
                        title={d.label}
                        aria-label={d.label}
                        {onclick}
                    />
                }
            }) }
        </nav>
    }
}
