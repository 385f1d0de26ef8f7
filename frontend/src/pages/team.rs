use log::{info, warn};
use yew::prelude::*;
use yew_hooks::use_title;

use crate::components::footer::Footer;
use crate::components::header::{NavItem, NavTarget, SiteHeader};
use crate::components::reveal::{Reveal, RevealFrom};
use crate::content::team::{DNA, MEMBERS};
use crate::relay::{open_in_new_tab, RelayError, WhatsAppRelay};
use crate::Route;

fn nav_items() -> Vec<NavItem> {
    vec![
        NavItem::new("Home", NavTarget::Page(Route::Home)),
        NavItem::new("Products", NavTarget::Href("/#products")),
        NavItem::new("Services", NavTarget::Href("/#services")),
        NavItem::new("About Us", NavTarget::Page(Route::About)),
        NavItem::new("Meet Our Team", NavTarget::Page(Route::Team)),
    ]
}

fn open_team_chat() -> Result<(), RelayError> {
    let link = WhatsAppRelay::site()?.chat_link();
    info!("Opening team chat");
    open_in_new_tab(&link)
}

#[function_component(Team)]
pub fn team() -> Html {
    use_title("Meet Our Team | Hynox".to_string());

    let join_error = use_state(|| None::<String>);

    let on_join = {
        let join_error = join_error.clone();
        Callback::from(move |_: MouseEvent| match open_team_chat() {
            Ok(()) => join_error.set(None),
            Err(e) => {
                warn!("Join link failed: {}", e);
                join_error.set(Some(e.to_string()));
            }
        })
    };

    html! {
        <div class="team-page">
            <style>
                {r#"
                    .team-page {
                        min-height: 100vh;
                        background: #fff;
                    }
                    .team-hero {
                        background: #000;
                        color: #fff;
                        padding: 8rem 1rem 5rem;
                        text-align: center;
                    }
                    .team-hero h1 {
                        font-size: clamp(3rem, 7vw, 4.5rem);
                        font-weight: 700;
                        letter-spacing: -0.025em;
                        margin-bottom: 1.5rem;
                    }
                    .team-hero h1 span { display: block; }
                    .team-hero p {
                        font-size: 1.5rem;
                        max-width: 48rem;
                        margin: 0 auto;
                        line-height: 1.6;
                        color: #d1d5db;
                    }
                    .team-grid {
                        max-width: 72rem;
                        margin: 0 auto;
                        padding: 5rem 1rem;
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                    }
                    @media (max-width: 1024px) {
                        .team-grid { grid-template-columns: repeat(2, 1fr); }
                    }
                    @media (max-width: 768px) {
                        .team-grid { grid-template-columns: 1fr; }
                    }
                    .member-card {
                        height: 100%;
                        border: 2px solid #000;
                        border-radius: 12px;
                        overflow: hidden;
                        transition: transform 0.3s ease, box-shadow 0.3s ease;
                    }
                    .member-card:hover {
                        transform: translateY(-8px);
                        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                    }
                    .member-card.light { background: #fff; color: #000; }
                    .member-card.dark { background: #000; color: #fff; }
                    .member-card img {
                        width: 100%;
                        aspect-ratio: 1;
                        object-fit: cover;
                        filter: grayscale(100%);
                        transition: filter 0.3s ease;
                    }
                    .member-card:hover img { filter: none; }
                    .member-body { padding: 1.5rem; }
                    .member-body h3 { font-size: 1.5rem; font-weight: 700; }
                    .member-role { font-size: 1.125rem; font-weight: 500; margin: 0.25rem 0 1rem; opacity: 0.7; }
                    .member-quote { font-style: italic; font-size: 0.875rem; opacity: 0.6; }
                    .dna {
                        background: #000;
                        color: #fff;
                        padding: 5rem 1rem;
                        text-align: center;
                    }
                    .dna h2 { font-size: 3rem; font-weight: 700; margin-bottom: 2rem; }
                    .dna-grid {
                        max-width: 64rem;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                    }
                    @media (max-width: 768px) {
                        .dna-grid { grid-template-columns: 1fr; }
                    }
                    .dna-grid h3 { font-size: 1.5rem; margin-bottom: 1rem; }
                    .dna-grid p { color: #d1d5db; }
                    .join {
                        padding: 5rem 1rem;
                        text-align: center;
                    }
                    .join h2 { font-size: 3rem; font-weight: 700; margin-bottom: 1.5rem; }
                    .join p {
                        font-size: 1.25rem;
                        color: #4b5563;
                        max-width: 42rem;
                        margin: 0 auto 2rem;
                    }
                    .join-button {
                        background: #000;
                        color: #fff;
                        border: none;
                        border-radius: 6px;
                        padding: 1.25rem 2rem;
                        font-size: 1.125rem;
                        cursor: pointer;
                        transition: transform 0.3s ease, background 0.3s ease;
                    }
                    .join-button:hover {
                        background: #1f2937;
                        transform: scale(1.05);
                    }
                    .join .field-error { color: #ef4444; margin-top: 1rem; }
                "#}
            </style>

            <SiteHeader items={nav_items()} />

            <section class="team-hero">
                <h1>{"The Minds Behind"}<span>{"HYNOX"}</span></h1>
                <p>
                    {"We're not your typical team. We're dreamers who code, creators who ship, and rebels who believe fashion and technology can change the world. Meet the humans building tomorrow's wardrobe."}
                </p>
            </section>

            <section class="team-grid">
                { for MEMBERS.iter().enumerate().map(|(i, member)| html! {
                    <Reveal from={RevealFrom::Below} delay_ms={i as u32 * 100}>
                        <div class={classes!("member-card", if i % 2 == 0 { "light" } else { "dark" })}>
                            <img src={member.image} alt={member.name} />
                            <div class="member-body">
                                <h3>{member.name}</h3>
                                <p class="member-role">{member.role}</p>
                                <p class="member-quote">{format!("\"{}\"", member.quote)}</p>
                            </div>
                        </div>
                    </Reveal>
                }) }
            </section>

            <section class="dna">
                <h2>{"Our DNA"}</h2>
                <div class="dna-grid">
                    { for DNA.iter().map(|(title, text)| html! {
                        <Reveal>
                            <h3>{*title}</h3>
                            <p>{*text}</p>
                        </Reveal>
                    }) }
                </div>
            </section>

            <section class="join">
                <h2>{"Ready to Join the Revolution?"}</h2>
                <p>
                    {"We're always looking for brilliant minds who want to reshape how the world thinks about fashion and technology."}
                </p>
                <button class="join-button" onclick={on_join}>{"Join Our Team →"}</button>
                if let Some(err) = &*join_error {
                    <p class="field-error" role="alert">{err.clone()}</p>
                }
            </section>

            <Footer />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storefront_sections_deep_link_home() {
        let hrefs: Vec<_> = nav_items()
            .into_iter()
            .filter_map(|i| match i.target {
                NavTarget::Href(href) => Some(href),
                _ => None,
            })
            .collect();
        assert_eq!(hrefs, vec!["/#products", "/#services"]);
    }
}
