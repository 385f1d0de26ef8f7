use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::use_window_scroll;
use yew_router::prelude::*;

use crate::Route;

/// Where a navigation entry leads.
#[derive(Clone, PartialEq, Debug)]
pub enum NavTarget {
    /// Region on the current page, by anchor id.
    Section(&'static str),
    Page(Route),
    /// Same-site href that reloads the document, e.g. `/#services`.
    Href(&'static str),
    /// Another site, opened in a new tab.
    External(String),
}

#[derive(Clone, PartialEq, Debug)]
pub struct NavItem {
    pub label: &'static str,
    pub target: NavTarget,
}

impl NavItem {
    pub fn new(label: &'static str, target: NavTarget) -> Self {
        Self { label, target }
    }

    pub fn is_active(&self, active_anchor: Option<&str>, route: Option<&Route>) -> bool {
        match &self.target {
            NavTarget::Section(anchor) => active_anchor == Some(*anchor),
            NavTarget::Page(page) => route == Some(page),
            NavTarget::Href(_) | NavTarget::External(_) => false,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct SiteHeaderProps {
    pub items: Vec<NavItem>,
    #[prop_or_default]
    pub active_anchor: Option<&'static str>,
    #[prop_or_default]
    pub on_section: Callback<&'static str>,
}

#[function_component(SiteHeader)]
pub fn site_header(props: &SiteHeaderProps) -> Html {
    let menu_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let route = use_route::<Route>();

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: ()| menu_open.set(false))
    };

    let render_item = |item: &NavItem, mobile: bool| -> Html {
        let active = item.is_active(props.active_anchor, route.as_ref());
        let class = classes!(
            if mobile { "mobile-link" } else { "nav-link" },
            active.then_some("active")
        );
        let close = {
            let close_menu = close_menu.clone();
            Callback::from(move |_: MouseEvent| close_menu.emit(()))
        };

        match &item.target {
            NavTarget::Section(anchor) => {
                let anchor = *anchor;
                let on_section = props.on_section.clone();
                let close_menu = close_menu.clone();
                let onclick = Callback::from(move |e: MouseEvent| {
                    e.prevent_default();
                    on_section.emit(anchor);
                    close_menu.emit(());
                });
                html! { <button {class} {onclick}>{item.label}</button> }
            }
            NavTarget::Page(page) => html! {
                <div onclick={close}>
                    <Link<Route> to={page.clone()} classes={class}>{item.label}</Link<Route>>
                </div>
            },
            NavTarget::Href(href) => html! {
                <a {class} href={*href} onclick={close}>{item.label}</a>
            },
            NavTarget::External(url) => html! {
                <a {class} href={url.clone()} target="_blank" rel="noopener noreferrer" onclick={close}>
                    {item.label}
                </a>
            },
        }
    };

    html! {
        <header class={classes!("site-header", (scroll_y > 10.0).then_some("scrolled"))}>
            <style>
                {r#"
                    .site-header {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        background: rgba(0, 0, 0, 0.9);
                        backdrop-filter: blur(4px);
                        border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                        transition: box-shadow 0.3s ease;
                    }
                    .site-header.scrolled {
                        box-shadow: 0 4px 24px rgba(0, 0, 0, 0.5);
                    }
                    .header-content {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 1rem;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                    }
                    .brand {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        font-size: 1.5rem;
                        font-weight: 700;
                        color: #fff;
                        text-decoration: none;
                        animation: brandIn 0.5s ease-out both;
                    }
                    .brand img {
                        width: 40px;
                        height: 40px;
                        border-radius: 50%;
                    }
                    @keyframes brandIn {
                        from { opacity: 0; transform: translateX(-20px); }
                        to { opacity: 1; transform: translateX(0); }
                    }
                    .desktop-nav {
                        display: flex;
                        gap: 2rem;
                        align-items: center;
                    }
                    .nav-link {
                        background: none;
                        border: none;
                        border-bottom: 2px solid transparent;
                        color: #9ca3af;
                        font-size: 1rem;
                        cursor: pointer;
                        text-decoration: none;
                        padding: 0.25rem 0;
                        transition: color 0.2s ease, transform 0.2s ease;
                    }
                    .nav-link:hover {
                        color: #fff;
                        transform: scale(1.05);
                    }
                    .nav-link.active {
                        color: #fff;
                        border-bottom-color: #fff;
                    }
                    .burger-menu {
                        display: none;
                        background: none;
                        border: none;
                        color: #fff;
                        font-size: 1.5rem;
                        cursor: pointer;
                    }
                    .mobile-nav {
                        display: none;
                    }
                    @media (max-width: 768px) {
                        .desktop-nav { display: none; }
                        .burger-menu { display: block; }
                        .mobile-nav.open {
                            display: flex;
                            flex-direction: column;
                            gap: 1rem;
                            padding: 1rem;
                            background: #000;
                            border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                            animation: menuOpen 0.25s ease-out both;
                        }
                    }
                    @keyframes menuOpen {
                        from { opacity: 0; max-height: 0; }
                        to { opacity: 1; max-height: 480px; }
                    }
                    .mobile-link {
                        background: none;
                        border: none;
                        text-align: left;
                        color: #9ca3af;
                        font-size: 1rem;
                        padding: 0.5rem 0;
                        text-decoration: none;
                        cursor: pointer;
                    }
                    .mobile-link.active {
                        color: #fff;
                        border-left: 2px solid #fff;
                        padding-left: 0.5rem;
                    }
                "#}
            </style>
            <div class="header-content">
                <Link<Route> to={Route::Home} classes="brand">
                    <img src="/assets/hynox_logo.jpg" alt="HYNOX Logo" />
                    {"HYNOX"}
                </Link<Route>>

                <nav class="desktop-nav">
                    { for props.items.iter().map(|item| render_item(item, false)) }
                </nav>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                    { if *menu_open { "✕" } else { "☰" } }
                </button>
            </div>
            <nav class={classes!("mobile-nav", (*menu_open).then_some("open"))}>
                { for props.items.iter().map(|item| render_item(item, true)) }
            </nav>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_item_active_by_anchor() {
        let item = NavItem::new("Services", NavTarget::Section("services"));
        assert!(item.is_active(Some("services"), None));
        assert!(!item.is_active(Some("products"), None));
        assert!(!item.is_active(None, Some(&Route::Home)));
    }

    #[test]
    fn test_page_item_active_by_route() {
        let item = NavItem::new("About Us", NavTarget::Page(Route::About));
        assert!(item.is_active(None, Some(&Route::About)));
        assert!(!item.is_active(None, Some(&Route::Team)));
    }

    #[test]
    fn test_links_never_active() {
        let item = NavItem::new("Products", NavTarget::External("https://example.com/#products".into()));
        assert!(!item.is_active(Some("products"), Some(&Route::Home)));
    }
}
