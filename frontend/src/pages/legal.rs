use yew::prelude::*;
use yew_hooks::use_title;
use yew_router::prelude::*;

use crate::content::legal::{
    numbered, sub_numbered, Block, LegalDocument, COMPANY_LINE, POSTAL_ADDRESS, PRIVACY_POLICY,
    TERMS_OF_SERVICE, WEBSITES,
};
use crate::Route;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LegalKind {
    Privacy,
    Terms,
}

impl LegalKind {
    pub fn document(self) -> &'static LegalDocument {
        match self {
            LegalKind::Privacy => &PRIVACY_POLICY,
            LegalKind::Terms => &TERMS_OF_SERVICE,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct LegalPageProps {
    pub kind: LegalKind,
}

fn render_blocks(blocks: &[Block]) -> Html {
    html! {
        { for blocks.iter().map(|block| match block {
            Block::Para(text) => html! { <p>{*text}</p> },
            Block::List(items) => html! {
                <ul>
                    { for items.iter().map(|item| html! {
                        <li>
                            {item.text}
                            if !item.children.is_empty() {
                                <ul>
                                    { for item.children.iter().map(|child| html! { <li>{*child}</li> }) }
                                </ul>
                            }
                        </li>
                    }) }
                </ul>
            },
        }) }
    }
}

#[function_component(LegalPage)]
pub fn legal_page(props: &LegalPageProps) -> Html {
    let doc = props.kind.document();
    use_title(format!("{} | Hynox", doc.title));

    html! {
        <div class="legal-page">
            <style>
                {r#"
                    .legal-page {
                        min-height: 100vh;
                        background: #000;
                        color: #fff;
                    }
                    .legal-header {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        background: rgba(0, 0, 0, 0.9);
                        backdrop-filter: blur(4px);
                        border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                    }
                    .legal-header-inner {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 1rem;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                    }
                    .legal-brand {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        font-size: 1.5rem;
                        font-weight: 700;
                        color: #fff;
                        text-decoration: none;
                    }
                    .legal-brand img {
                        width: 40px;
                        height: 40px;
                        border-radius: 50%;
                    }
                    .back-home {
                        color: #9ca3af;
                        text-decoration: none;
                        transition: color 0.2s ease;
                    }
                    .back-home:hover { color: #fff; }
                    .legal-body {
                        max-width: 56rem;
                        margin: 0 auto;
                        padding: 8rem 1rem 4rem;
                    }
                    .legal-body h1 {
                        font-size: 3rem;
                        font-weight: 700;
                        margin-bottom: 2rem;
                    }
                    .legal-meta p {
                        color: #9ca3af;
                        margin-bottom: 0.25rem;
                    }
                    .legal-preamble {
                        color: #d1d5db;
                        margin: 2rem 0;
                        line-height: 1.7;
                    }
                    .legal-body h2 {
                        font-size: 1.5rem;
                        font-weight: 700;
                        margin: 2.5rem 0 1rem;
                    }
                    .legal-body h3 {
                        font-size: 1.125rem;
                        font-weight: 600;
                        margin: 1.5rem 0 0.75rem;
                    }
                    .legal-body p, .legal-body li {
                        color: #d1d5db;
                        line-height: 1.7;
                    }
                    .legal-body ul {
                        list-style: disc;
                        padding-left: 1.5rem;
                        margin: 0.5rem 0 1rem;
                    }
                    .legal-body ul ul { list-style: circle; }
                    .legal-contact {
                        background: #111827;
                        border: 1px solid #1f2937;
                        border-radius: 8px;
                        padding: 1.5rem;
                    }
                "#}
            </style>

            <header class="legal-header">
                <div class="legal-header-inner">
                    <Link<Route> to={Route::Home} classes="legal-brand">
                        <img src="/assets/hynox_logo.jpg" alt="HYNOX Logo" />
                        {"HYNOX"}
                    </Link<Route>>
                    <Link<Route> to={Route::Home} classes="back-home">{"← Back to Home"}</Link<Route>>
                </div>
            </header>

            <article class="legal-body">
                <h1>{doc.title}</h1>
                <div class="legal-meta">
                    <p>{format!("Effective Date: {}", doc.effective_date)}</p>
                    <p>{COMPANY_LINE}</p>
                    <p>{format!("Websites: {}", WEBSITES)}</p>
                </div>
                <p class="legal-preamble">{doc.preamble}</p>

                { for doc.sections.iter().enumerate().map(|(i, section)| html! {
                    <section>
                        <h2>{numbered(i, section.heading)}</h2>
                        { render_blocks(section.blocks) }
                        { for section.subsections.iter().enumerate().map(|(j, sub)| html! {
                            <>
                                <h3>{sub_numbered(i, j, sub.heading)}</h3>
                                { render_blocks(sub.blocks) }
                            </>
                        }) }
                    </section>
                }) }

                <section>
                    <h2>{doc.contact_heading()}</h2>
                    <div class="legal-contact">
                        <p><strong>{"The Black Crest (Hynox)"}</strong></p>
                        <p>{format!("Email: {}", doc.contact_email)}</p>
                        <p>{format!("Website: {}", WEBSITES)}</p>
                        <p>{format!("Address: {}", POSTAL_ADDRESS)}</p>
                    </div>
                </section>
            </article>
        </div>
    }
}

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    html! { <LegalPage kind={LegalKind::Privacy} /> }
}

#[function_component(TermsAndConditions)]
pub fn terms_and_conditions() -> Html {
    html! { <LegalPage kind={LegalKind::Terms} /> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds_pick_their_documents() {
        assert_eq!(LegalKind::Privacy.document().title, "Privacy Policy");
        assert_eq!(LegalKind::Terms.document().title, "Terms of Service");
    }
}
