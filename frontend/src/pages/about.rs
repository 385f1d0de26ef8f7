use yew::prelude::*;
use yew_hooks::use_title;

use crate::components::cursor_follower::{CursorFollower, HoverFlag, HoverZone};
use crate::components::footer::Footer;
use crate::components::header::{NavItem, NavTarget, SiteHeader};
use crate::components::nav_dots::{Dot, NavDots};
use crate::components::reveal::{Reveal, RevealFrom};
use crate::config::storefront_anchor;
use crate::content::about::{Span, DIFFERENCES, MISSION, PILLARS, STORY, VALUES};
use crate::hooks::section_tracker::use_section_tracker;
use crate::navigation::sections::PageSection;
use crate::Route;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AboutSection {
    Story,
    Mission,
    Difference,
    Values,
}

impl PageSection for AboutSection {
    const ALL: &'static [Self] = &[
        AboutSection::Story,
        AboutSection::Mission,
        AboutSection::Difference,
        AboutSection::Values,
    ];

    fn anchor(self) -> &'static str {
        match self {
            AboutSection::Story => "story",
            AboutSection::Mission => "mission",
            AboutSection::Difference => "difference",
            AboutSection::Values => "values",
        }
    }

    fn label(self) -> &'static str {
        match self {
            AboutSection::Story => "STORY",
            AboutSection::Mission => "MISSION",
            AboutSection::Difference => "DIFFERENCE",
            AboutSection::Values => "VALUES",
        }
    }
}

/// Header links for the secondary pages. Products and services live on the
/// storefront.
pub fn page_nav_items() -> Vec<NavItem> {
    vec![
        NavItem::new("Home", NavTarget::Page(Route::Home)),
        NavItem::new("Products", NavTarget::External(storefront_anchor("products"))),
        NavItem::new("Services", NavTarget::External(storefront_anchor("services"))),
        NavItem::new("About Us", NavTarget::Page(Route::About)),
        NavItem::new("Meet Our Team", NavTarget::Page(Route::Team)),
    ]
}

fn render_spans(spans: &[Span]) -> Html {
    html! {
        { for spans.iter().map(|span| match *span {
            Span::Plain(text) => html! { {text} },
            Span::Strong(text) => html! { <HoverZone class={classes!("inline-zone")}><strong>{text}</strong></HoverZone> },
        }) }
    }
}

#[function_component(About)]
pub fn about() -> Html {
    use_title("About Us | Hynox".to_string());

    let nav = use_section_tracker::<AboutSection>(None);
    let hovering: HoverFlag = use_state(|| false);

    let dots: Vec<Dot> = AboutSection::ALL
        .iter()
        .map(|s| Dot {
            anchor: s.anchor(),
            label: s.label(),
        })
        .collect();

    html! {
        <ContextProvider<HoverFlag> context={hovering.clone()}>
            <div class="about-page">
                <style>
                    {r#"
                        .about-page {
                            background: #fff;
                            color: #000;
                            overflow-x: hidden;
                        }
                        .about-page section {
                            padding: 8rem 1.5rem;
                        }
                        .about-inner {
                            max-width: 72rem;
                            margin: 0 auto;
                        }
                        .about-page h2 {
                            font-size: clamp(3rem, 7vw, 4.5rem);
                            font-weight: 700;
                            margin-bottom: 3rem;
                        }
                        .about-hero {
                            min-height: 100vh;
                            display: flex;
                            flex-direction: column;
                            align-items: center;
                            justify-content: center;
                            text-align: center;
                            animation: aboutIn 1.2s cubic-bezier(0.2, 0.65, 0.3, 0.9) both;
                        }
                        @keyframes aboutIn {
                            from { opacity: 0; transform: scale(0.8); }
                            to { opacity: 1; transform: scale(1); }
                        }
                        .about-hero h1 {
                            font-size: clamp(4.5rem, 12vw, 8rem);
                            font-weight: 700;
                            letter-spacing: -0.05em;
                            margin-bottom: 2rem;
                        }
                        .about-hero h1 span {
                            display: inline-block;
                            background: #000;
                            color: #fff;
                            padding: 0.5rem 1rem;
                            margin-top: 0.5rem;
                        }
                        .about-hero p {
                            font-size: 1.75rem;
                            font-weight: 300;
                            max-width: 42rem;
                        }
                        .about-hero p strong {
                            display: block;
                            font-size: 2.25rem;
                            margin-top: 1rem;
                        }
                        .scroll-hint {
                            margin-top: 4rem;
                            font-size: 2rem;
                            animation: bounce 1.5s ease-in-out infinite;
                        }
                        @keyframes bounce {
                            0%, 100% { transform: translateY(0); }
                            50% { transform: translateY(10px); }
                        }
                        .story {
                            background: #000;
                            color: #fff;
                        }
                        .story-grid {
                            display: grid;
                            grid-template-columns: repeat(2, 1fr);
                            gap: 4rem;
                            align-items: center;
                        }
                        .story p {
                            font-size: 1.125rem;
                            line-height: 1.75;
                            margin-bottom: 1.5rem;
                        }
                        .pillars {
                            display: grid;
                            grid-template-columns: repeat(2, 1fr);
                            gap: 1.5rem;
                        }
                        .pillar {
                            background: #fff;
                            color: #000;
                            padding: 2rem;
                            transition: transform 0.3s ease;
                        }
                        .pillar:hover { transform: scale(1.05) rotate(1deg); }
                        .pillar .icon { font-size: 2.5rem; }
                        .mission {
                            text-align: center;
                        }
                        .mission-quote {
                            max-width: 56rem;
                            margin: 0 auto;
                            background: #000;
                            color: #fff;
                            padding: 4rem;
                            font-size: 1.75rem;
                            font-weight: 300;
                            line-height: 1.6;
                            transition: transform 0.3s ease, box-shadow 0.3s ease;
                        }
                        .mission-quote:hover {
                            transform: scale(1.02);
                            box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                        }
                        .mission-quote blockquote { margin: 0; }
                        .inline-zone { display: inline; }
                        .center { text-align: center; }
                        .difference h2 span {
                            background: #000;
                            color: #fff;
                            padding: 0 0.5rem;
                        }
                        .difference-grid {
                            display: grid;
                            grid-template-columns: repeat(3, 1fr);
                            gap: 2rem;
                        }
                        .difference-card {
                            border: 2px solid #000;
                            padding: 2rem;
                            height: 100%;
                            transition: transform 0.3s ease, box-shadow 0.3s ease;
                        }
                        .difference-card:hover {
                            transform: translateY(-10px);
                            box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
                        }
                        .difference-card .icon {
                            font-size: 2rem;
                            margin-bottom: 1.5rem;
                        }
                        .difference-card h3 { font-size: 1.5rem; margin-bottom: 1rem; }
                        .difference-card p, .value p { color: #4b5563; line-height: 1.6; }
                        .values { background: #f9fafb; }
                        .values .about-inner { max-width: 56rem; }
                        .value {
                            display: flex;
                            gap: 2rem;
                            align-items: flex-start;
                            margin-bottom: 4rem;
                        }
                        .value .icon {
                            flex-shrink: 0;
                            width: 4rem;
                            height: 4rem;
                            background: #000;
                            color: #fff;
                            display: flex;
                            align-items: center;
                            justify-content: center;
                            font-size: 1.75rem;
                        }
                        .value h3 { font-size: 1.875rem; margin-bottom: 0.75rem; }
                        @media (max-width: 768px) {
                            .story-grid, .difference-grid { grid-template-columns: 1fr; }
                            .mission-quote { padding: 2rem; font-size: 1.25rem; }
                        }
                    "#}
                </style>

                <SiteHeader items={page_nav_items()} />

                <section class="about-hero">
                    <h1>{"WE ARE"}<br /><span>{"HYNOX"}</span></h1>
                    <p>
                        {"Where fashion meets function. Where style meets systems."}
                        <strong>{"We're redefining what it means to be cutting-edge."}</strong>
                    </p>
                    <div class="scroll-hint" aria-hidden="true">{"⌄"}</div>
                </section>

                <NavDots
                    {dots}
                    active_anchor={nav.active_anchor()}
                    on_select={nav.select_anchor()}
                />

                <section id={AboutSection::Story.anchor()} class="story">
                    <div class="about-inner story-grid">
                        <div>
                            <Reveal from={RevealFrom::Left}>
                                <h2>{"OUR STORY"}</h2>
                            </Reveal>
                            { for STORY.iter().enumerate().map(|(i, paragraph)| html! {
                                <Reveal delay_ms={i as u32 * 200}>
                                    <p>{ render_spans(paragraph) }</p>
                                </Reveal>
                            }) }
                        </div>
                        <div class="pillars">
                            { for PILLARS.iter().enumerate().map(|(i, card)| html! {
                                <Reveal delay_ms={i as u32 * 200}>
                                    <HoverZone class={classes!("pillar")}>
                                        <div class="icon">{card.icon}</div>
                                        <h3>{card.title}</h3>
                                        <p>{card.desc}</p>
                                    </HoverZone>
                                </Reveal>
                            }) }
                        </div>
                    </div>
                </section>

                <section id={AboutSection::Mission.anchor()} class="mission">
                    <Reveal>
                        <h2>{"OUR MISSION"}</h2>
                    </Reveal>
                    <Reveal delay_ms={200}>
                        <HoverZone class={classes!("mission-quote")}>
                            <blockquote>{ render_spans(MISSION) }</blockquote>
                        </HoverZone>
                    </Reveal>
                </section>

                <section id={AboutSection::Difference.anchor()} class="difference">
                    <div class="about-inner">
                        <Reveal class={classes!("center")}>
                            <h2>{"WHAT SETS US "}<span>{"APART"}</span></h2>
                        </Reveal>
                        <div class="difference-grid">
                            { for DIFFERENCES.iter().enumerate().map(|(i, card)| html! {
                                <Reveal delay_ms={i as u32 * 200}>
                                    <HoverZone class={classes!("difference-card")}>
                                        <div class="icon">{card.icon}</div>
                                        <h3>{card.title}</h3>
                                        <p>{card.desc}</p>
                                    </HoverZone>
                                </Reveal>
                            }) }
                        </div>
                    </div>
                </section>

                <section id={AboutSection::Values.anchor()} class="values">
                    <div class="about-inner">
                        <Reveal class={classes!("center")}>
                            <h2>{"OUR VALUES"}</h2>
                        </Reveal>
                        { for VALUES.iter().enumerate().map(|(i, value)| html! {
                            <Reveal from={RevealFrom::alternating(i)} delay_ms={i as u32 * 200}>
                                <div class="value">
                                    <div class="icon">{value.icon}</div>
                                    <div>
                                        <h3>{value.title}</h3>
                                        <p>{value.desc}</p>
                                    </div>
                                </div>
                            </Reveal>
                        }) }
                    </div>
                </section>

                <Footer />

                if *hovering {
                    <CursorFollower />
                }
            </div>
        </ContextProvider<HoverFlag>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_anchors_resolve() {
        for section in AboutSection::ALL {
            assert_eq!(AboutSection::from_anchor(section.anchor()), Some(*section));
        }
    }

    #[test]
    fn test_storefront_links_are_external() {
        let items = page_nav_items();
        let products = items.iter().find(|i| i.label == "Products");
        assert!(matches!(
            products.map(|i| &i.target),
            Some(NavTarget::External(url)) if url.ends_with("/#products")
        ));
    }
}
