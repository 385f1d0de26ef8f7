use gloo_timers::callback::Timeout;
use web_sys::HtmlElement;
use yew::prelude::*;
use yew_hooks::{use_title, use_window_scroll};

use crate::animation::scroll_progress::HeroFade;
use crate::components::contact_form::ContactForm;
use crate::components::counter::AnimatedCounter;
use crate::components::footer::Footer;
use crate::components::header::{NavItem, NavTarget, SiteHeader};
use crate::components::reveal::{Reveal, RevealFrom};
use crate::config;
use crate::content::home::{
    growth_bar_height, growth_bar_opacity, StepVisual, AD_PREVIEWS, GROWTH_BARS, SERVICES, STEPS,
    TESTIMONIALS,
};
use crate::hooks::section_tracker::use_section_tracker;
use crate::navigation::sections::PageSection;
use crate::Route;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum HomeSection {
    Hero,
    Products,
    Process,
    Services,
    Results,
    Contact,
}

impl PageSection for HomeSection {
    const ALL: &'static [Self] = &[
        HomeSection::Hero,
        HomeSection::Products,
        HomeSection::Process,
        HomeSection::Services,
        HomeSection::Results,
        HomeSection::Contact,
    ];

    fn anchor(self) -> &'static str {
        match self {
            HomeSection::Hero => "home",
            HomeSection::Products => "products",
            HomeSection::Process => "process",
            HomeSection::Services => "services",
            HomeSection::Results => "results",
            HomeSection::Contact => "contact",
        }
    }

    fn label(self) -> &'static str {
        match self {
            HomeSection::Hero => "Home",
            HomeSection::Products => "Products",
            HomeSection::Process => "Process",
            HomeSection::Services => "Services",
            HomeSection::Results => "Results",
            HomeSection::Contact => "Contact",
        }
    }
}

fn nav_items() -> Vec<NavItem> {
    let mut items: Vec<NavItem> = HomeSection::ALL
        .iter()
        .filter(|s| **s != HomeSection::Hero)
        .map(|s| NavItem::new(s.label(), NavTarget::Section(s.anchor())))
        .collect();
    items.push(NavItem::new("About Us", NavTarget::Page(Route::About)));
    items.push(NavItem::new("Meet Our Team", NavTarget::Page(Route::Team)));
    items
}

/// Fade for the hero at `scroll_y`; unfaded until the hero has been measured.
fn hero_fade(scroll_y: f64, hero_height: Option<f64>) -> HeroFade {
    hero_height
        .map(|height| HeroFade::at(scroll_y, height))
        .unwrap_or_default()
}

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub on_consult: Callback<MouseEvent>,
}

// Owns the window scroll subscription so scrolling only re-renders the hero.
#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let hero_ref = use_node_ref();
    let (_, scroll_y) = use_window_scroll();
    let loaded = use_state(|| false);

    {
        let loaded = loaded.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(config::HERO_LOAD_DELAY_MS, move || loaded.set(true));
                move || drop(timeout)
            },
            (),
        );
    }

    let height = hero_ref
        .cast::<HtmlElement>()
        .map(|hero| hero.offset_height() as f64);
    let fade = hero_fade(scroll_y, height);

    html! {
        <section
            id={HomeSection::Hero.anchor()}
            ref={hero_ref}
            class={classes!("hero", (*loaded).then_some("loaded"))}
        >
            <div class="hero-content" style={fade.to_style()}>
                <div class="hero-copy">
                    <h1>{"Data-Driven Performance Marketing That Converts."}</h1>
                    <p>{"We scale brands with powerful Meta & Google Ads, optimized for maximum ROI."}</p>
                </div>
                <div class="hero-actions">
                    <button class="btn-primary" onclick={props.on_consult.clone()}>
                        {"Get a Free Consultation →"}
                    </button>
                    <a class="btn-outline" href={config::get_storefront_url()}>
                        {"Explore Strategy →"}
                    </a>
                </div>
            </div>
            <div class="hero-glow one"></div>
            <div class="hero-glow two"></div>
        </section>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    use_title("Hynox | Performance Marketing".to_string());

    let nav = use_section_tracker(Some(HomeSection::Hero));

    let to_contact = {
        let select = nav.select.clone();
        Callback::from(move |_: MouseEvent| select.emit(HomeSection::Contact))
    };

    html! {
        <main class="home-page">
            <style>
                {r#"
                    .home-page {
                        min-height: 100vh;
                        background: #000;
                        color: #fff;
                        font-family: system-ui, -apple-system, sans-serif;
                    }
                    .home-page section {
                        padding: 5rem 1rem;
                    }
                    .home-page .container {
                        max-width: 1200px;
                        margin: 0 auto;
                    }
                    .section-title {
                        text-align: center;
                        margin-bottom: 4rem;
                    }
                    .section-title h2 {
                        font-size: 2.25rem;
                        font-weight: 700;
                        margin-bottom: 1rem;
                    }
                    .section-title p, .muted {
                        color: #9ca3af;
                        max-width: 42rem;
                        margin: 0 auto;
                    }
                    .bg-dim { background: #030712; }

                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        overflow: hidden;
                    }
                    .hero-content {
                        position: relative;
                        z-index: 10;
                        text-align: center;
                        will-change: opacity, transform;
                    }
                    .hero-copy, .hero-actions {
                        opacity: 0;
                        transition: opacity 0.8s ease 0.2s, transform 0.8s ease 0.2s;
                    }
                    .hero-copy { transform: translateY(20px); }
                    .hero-actions {
                        transform: scale(0.9);
                        transition-delay: 0.6s;
                        margin-top: 2rem;
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1rem;
                        justify-content: center;
                    }
                    .hero.loaded .hero-copy, .hero.loaded .hero-actions {
                        opacity: 1;
                        transform: none;
                    }
                    .hero h1 {
                        font-size: clamp(2.25rem, 6vw, 4.5rem);
                        font-weight: 700;
                        letter-spacing: -0.05em;
                        margin-bottom: 1rem;
                    }
                    .hero p {
                        font-size: 1.5rem;
                        color: #9ca3af;
                        max-width: 48rem;
                        margin: 0 auto;
                    }
                    .hero-glow {
                        position: absolute;
                        border-radius: 50%;
                        filter: blur(64px);
                        opacity: 0.2;
                        animation: pulse 2s ease-in-out infinite;
                    }
                    .hero-glow.one {
                        top: 25%; left: 25%; width: 16rem; height: 16rem;
                        background: linear-gradient(to right, #3b82f6, #a855f7);
                    }
                    .hero-glow.two {
                        bottom: 33%; right: 33%; width: 24rem; height: 24rem;
                        background: linear-gradient(to right, #ec4899, #f97316);
                        animation-delay: 1s;
                    }
                    @keyframes pulse {
                        0%, 100% { opacity: 0.2; }
                        50% { opacity: 0.1; }
                    }
                    .btn-primary, .btn-outline {
                        font-size: 1.125rem;
                        padding: 1.25rem 2rem;
                        border-radius: 6px;
                        cursor: pointer;
                        text-decoration: none;
                        transition: all 0.3s ease;
                    }
                    .btn-primary { background: #fff; color: #000; border: none; }
                    .btn-outline { background: transparent; color: #fff; border: 1px solid #fff; }
                    .btn-primary:hover, .btn-outline:hover { transform: scale(1.05); }
                    .btn-outline:hover { background: #fff; color: #000; }

                    .ad-grid, .services-grid, .results-grid {
                        display: grid;
                        gap: 2rem;
                    }
                    .ad-grid { grid-template-columns: repeat(2, 1fr); }
                    .services-grid { grid-template-columns: repeat(4, 1fr); }
                    .results-grid { grid-template-columns: repeat(3, 1fr); }
                    @media (max-width: 768px) {
                        .ad-grid, .services-grid, .results-grid { grid-template-columns: 1fr; }
                    }
                    .card {
                        background: linear-gradient(135deg, #111827, #1f2937);
                        border: 1px solid #1f2937;
                        border-radius: 12px;
                        padding: 1.5rem;
                        transition: box-shadow 0.3s ease, background 0.3s ease, color 0.3s ease;
                    }
                    .ad-card img.logo {
                        display: block;
                        height: 3rem;
                        margin: 0 auto 1.5rem;
                        object-fit: contain;
                    }
                    .ad-card img.preview {
                        width: 100%;
                        aspect-ratio: 4 / 3;
                        object-fit: cover;
                        border-radius: 6px;
                        transition: opacity 0.3s ease;
                    }
                    .ad-card:hover { box-shadow: 0 0 30px var(--glow); }
                    .ad-card:hover img.preview { opacity: 0.5; }

                    .step {
                        display: flex;
                        gap: 2rem;
                        align-items: flex-start;
                        margin-bottom: 4rem;
                    }
                    .step-number {
                        font-size: 4.5rem;
                        font-weight: 700;
                        color: #1f2937;
                        flex-shrink: 0;
                    }
                    .step h3 { font-size: 1.875rem; font-weight: 700; margin-bottom: 1rem; }
                    .growth-chart {
                        margin-top: 1.5rem;
                        background: #111827;
                        padding: 1rem;
                        border-radius: 8px;
                    }
                    .growth-bars {
                        position: relative;
                        height: 8rem;
                        display: flex;
                        align-items: flex-end;
                        border-bottom: 1px dashed #374151;
                    }
                    .growth-bar {
                        width: calc(100% / 12);
                        margin: 0 2px;
                        border-radius: 2px 2px 0 0;
                        background: linear-gradient(to top, #3b82f6, #a855f7);
                    }
                    .growth-badge {
                        position: absolute;
                        top: 0;
                        right: 1rem;
                        background: #22c55e;
                        color: #000;
                        font-size: 0.75rem;
                        font-weight: 700;
                        padding: 0.25rem 0.5rem;
                        border-radius: 4px;
                    }
                    .growth-legend {
                        display: flex;
                        justify-content: space-between;
                        font-size: 0.75rem;
                        color: #6b7280;
                        margin-top: 0.5rem;
                    }
                    .roi-badge {
                        margin-top: 1.5rem;
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                    }
                    .roi-badge strong {
                        font-size: 3.75rem;
                        background: linear-gradient(to right, #3b82f6, #a855f7);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                        animation: pulse 2s ease-in-out infinite;
                    }

                    .service-card:hover {
                        background: #fff;
                        color: #000;
                    }
                    .service-card:hover p { color: #374151; }
                    .service-icon { font-size: 2.5rem; margin-bottom: 1rem; }
                    .service-card h3 { font-size: 1.25rem; font-weight: 700; margin-bottom: 0.5rem; }

                    .result-person {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                        margin-bottom: 1rem;
                    }
                    .result-person img {
                        width: 3.5rem;
                        height: 3.5rem;
                        border-radius: 50%;
                        object-fit: cover;
                    }
                    .result-person small { color: #9ca3af; }
                    .result-stat {
                        margin-top: 1.5rem;
                        font-size: 2.25rem;
                        font-weight: 700;
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }
                    .gradient-blue { background-image: linear-gradient(to right, #3b82f6, #a855f7); }
                    .gradient-orange { background-image: linear-gradient(to right, #f97316, #ec4899); }
                    .gradient-green { background-image: linear-gradient(to right, #22c55e, #3b82f6); }
                    .result-label { color: #9ca3af; font-size: 0.875rem; }

                    .contact-wrap { max-width: 48rem; margin: 0 auto; }
                    .contact-card {
                        background: #111827;
                        border: 1px solid #1f2937;
                        border-radius: 12px;
                        padding: 2rem;
                    }
                "#}
            </style>

            <SiteHeader
                items={nav_items()}
                active_anchor={nav.active_anchor()}
                on_section={nav.select_anchor()}
            />

            <Hero on_consult={to_contact} />

            <section id={HomeSection::Products.anchor()} class="bg-dim">
                <div class="container">
                    <Reveal class={classes!("section-title")}>
                        <h2>{"Powerful Ads That Drive Results"}</h2>
                        <p>{"We create high-converting campaigns across Meta and Google platforms."}</p>
                    </Reveal>
                    <div class="ad-grid">
                        { for AD_PREVIEWS.iter().enumerate().map(|(i, ad)| html! {
                            <Reveal from={RevealFrom::alternating(i)} delay_ms={i as u32 * 200}>
                                <div class="card ad-card" style={format!("--glow: {};", ad.glow)}>
                                    <img class="logo" src={ad.logo} alt={format!("{} Logo", ad.platform)} />
                                    <img class="preview" src={ad.preview} alt={format!("{} Ad Preview", ad.platform)} />
                                </div>
                            </Reveal>
                        }) }
                    </div>
                </div>
            </section>

            <section id={HomeSection::Process.anchor()}>
                <div class="container">
                    <Reveal class={classes!("section-title")}>
                        <h2>{"How We Scale Brands"}</h2>
                        <p>{"Our proven methodology delivers consistent results."}</p>
                    </Reveal>
                    { for STEPS.iter().enumerate().map(|(i, step)| html! {
                        <Reveal from={RevealFrom::alternating(i)} delay_ms={i as u32 * 200}>
                            <div class="step">
                                <div class="step-number">{step.number}</div>
                                <div>
                                    <h3>{step.title}</h3>
                                    <p class="muted">{step.description}</p>
                                    { step_visual(step.visual) }
                                </div>
                            </div>
                        </Reveal>
                    }) }
                </div>
            </section>

            <section id={HomeSection::Services.anchor()} class="bg-dim">
                <div class="container">
                    <Reveal class={classes!("section-title")}>
                        <h2>{"Our Services"}</h2>
                        <p>{"Comprehensive digital marketing solutions designed for performance."}</p>
                    </Reveal>
                    <div class="services-grid">
                        { for SERVICES.iter().enumerate().map(|(i, service)| html! {
                            <Reveal delay_ms={i as u32 * 100}>
                                <div class="card service-card">
                                    <div class="service-icon">{service.icon}</div>
                                    <h3>{service.title}</h3>
                                    <p class="muted">{service.description}</p>
                                </div>
                            </Reveal>
                        }) }
                    </div>
                </div>
            </section>

            <section id={HomeSection::Results.anchor()}>
                <div class="container">
                    <Reveal class={classes!("section-title")}>
                        <h2>{"Success Stories"}</h2>
                        <p>{"Real results from our clients."}</p>
                    </Reveal>
                    <div class="results-grid">
                        { for TESTIMONIALS.iter().enumerate().map(|(i, t)| html! {
                            <Reveal delay_ms={i as u32 * 200}>
                                <div class="card">
                                    <div class="result-person">
                                        <img src={t.image} alt={t.name} />
                                        <div>
                                            <h4>{t.name}</h4>
                                            <small>{t.company}</small>
                                        </div>
                                    </div>
                                    <p class="muted">{t.quote}</p>
                                    <div class={classes!("result-stat", t.stat.gradient)}>
                                        <AnimatedCounter to={t.stat.value} suffix="%" />
                                    </div>
                                    <div class="result-label">{t.stat.label}</div>
                                </div>
                            </Reveal>
                        }) }
                    </div>
                </div>
            </section>

            <section id={HomeSection::Contact.anchor()} class="bg-dim">
                <div class="contact-wrap">
                    <Reveal class={classes!("section-title")}>
                        <h2>{"Let's Scale Your Brand Today"}</h2>
                        <p>{"Book a free strategy call and discover how our data-driven approach can transform your marketing results."}</p>
                    </Reveal>
                    <Reveal delay_ms={200}>
                        <div class="contact-card">
                            <ContactForm />
                        </div>
                    </Reveal>
                </div>
            </section>

            <Footer />
        </main>
    }
}

fn step_visual(visual: StepVisual) -> Html {
    match visual {
        StepVisual::None => html! {},
        StepVisual::GrowthChart => html! {
            <div class="growth-chart">
                <div class="growth-bars">
                    { for (0..GROWTH_BARS).map(|i| html! {
                        <div
                            class="growth-bar"
                            style={format!(
                                "height: {:.1}%; opacity: {};",
                                growth_bar_height(i),
                                growth_bar_opacity(i)
                            )}
                        />
                    }) }
                    <span class="growth-badge">{"+127%"}</span>
                </div>
                <div class="growth-legend">
                    <span>{"Campaign Start"}</span>
                    <span>{"After Optimization"}</span>
                </div>
            </div>
        },
        StepVisual::RoiBadge => html! {
            <div class="roi-badge">
                <strong>{"10x ROI"}</strong>
                <span class="muted">{"Average return our clients see when we scale winning campaigns"}</span>
            </div>
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchors_round_trip() {
        for section in HomeSection::ALL {
            assert_eq!(HomeSection::from_anchor(section.anchor()), Some(*section));
        }
        assert_eq!(HomeSection::from_anchor("pricing"), None);
    }

    #[test]
    fn test_hero_unfaded_until_measured() {
        assert_eq!(hero_fade(400.0, None), HeroFade::default());
        assert_eq!(hero_fade(400.0, Some(800.0)), HeroFade::at(400.0, 800.0));
        assert!(hero_fade(800.0, Some(800.0)).opacity.abs() < 1e-9);
    }

    #[test]
    fn test_nav_skips_hero_and_links_pages() {
        let items = nav_items();
        assert_eq!(items[0], NavItem::new("Products", NavTarget::Section("products")));
        assert!(!items.iter().any(|i| i.target == NavTarget::Section("home")));
        assert_eq!(items.last().map(|i| &i.target), Some(&NavTarget::Page(Route::Team)));
    }
}
