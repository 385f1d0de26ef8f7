use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod relay;
mod animation {
    pub mod counter;
    pub mod scroll_progress;
    pub mod timing;
}
mod navigation {
    pub mod scroll;
    pub mod sections;
}
mod hooks {
    pub mod animated_counter;
    pub mod frame_loop;
    pub mod in_view;
    pub mod observer;
    pub mod pointer;
    pub mod section_tracker;
}
mod components {
    pub mod contact_form;
    pub mod counter;
    pub mod cursor_follower;
    pub mod footer;
    pub mod header;
    pub mod nav_dots;
    pub mod reveal;
}
mod content {
    pub mod about;
    pub mod company;
    pub mod home;
    pub mod legal;
    pub mod team;
}
mod pages {
    pub mod about;
    pub mod home;
    pub mod legal;
    pub mod team;
}

use pages::{
    about::About,
    home::Home,
    legal::{PrivacyPolicy, TermsAndConditions},
    team::Team,
};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/team")]
    Team,
    #[at("/privacy-policy")]
    PrivacyPolicy,
    #[at("/terms-and-conditions")]
    TermsAndConditions,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        }
        Route::Team => {
            info!("Rendering Team page");
            html! { <Team /> }
        }
        Route::PrivacyPolicy => {
            info!("Rendering Privacy Policy page");
            html! { <PrivacyPolicy /> }
        }
        Route::TermsAndConditions => {
            info!("Rendering Terms page");
            html! { <TermsAndConditions /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component(NotFound)]
fn not_found() -> Html {
    html! {
        <div class="not-found">
            <style>
                {r#"
                    .not-found {
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        gap: 1.5rem;
                        background: #000;
                        color: #fff;
                    }
                    .not-found h1 { font-size: 3rem; font-weight: 700; }
                    .not-found a { color: #9ca3af; }
                    .not-found a:hover { color: #fff; }
                "#}
            </style>
            <h1>{"Page not found"}</h1>
            <Link<Route> to={Route::Home}>{"← Back to Home"}</Link<Route>>
        </div>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) { Level::Debug } else { Level::Info };
    console_log::init_with_level(level).expect("error initializing log");

    gloo_console::log!("Hynox site starting, storefront at", config::get_storefront_url());
    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
