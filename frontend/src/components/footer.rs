use chrono::Datelike;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::content::company::{CONTACT, FOOTER_SERVICES};
use crate::Route;

fn copyright_line(year: i32) -> String {
    format!("© {} Hynox. All rights reserved.", year)
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <style>
                {r#"
                    .site-footer {
                        padding: 3rem 1rem;
                        background: #000;
                        color: #fff;
                        border-top: 1px solid #1f2937;
                    }
                    .footer-grid {
                        max-width: 1200px;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 2rem;
                    }
                    @media (max-width: 768px) {
                        .footer-grid { grid-template-columns: 1fr; }
                    }
                    .footer-grid h3 {
                        font-size: 1.1rem;
                        margin-bottom: 1rem;
                    }
                    .footer-grid ul {
                        list-style: none;
                        padding: 0;
                    }
                    .footer-grid li, .footer-grid p {
                        color: #9ca3af;
                        margin-bottom: 0.5rem;
                    }
                    .footer-grid a, .footer-bottom a {
                        color: #9ca3af;
                        text-decoration: none;
                        transition: color 0.2s ease;
                    }
                    .footer-grid a:hover, .footer-bottom a:hover {
                        color: #fff;
                    }
                    .footer-bottom {
                        max-width: 1200px;
                        margin: 3rem auto 0;
                        padding-top: 2rem;
                        border-top: 1px solid #1f2937;
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: space-between;
                        gap: 1rem;
                        color: #6b7280;
                        font-size: 0.875rem;
                    }
                    .footer-bottom nav {
                        display: flex;
                        gap: 1.5rem;
                    }
                "#}
            </style>
            <div class="footer-grid">
                <div>
                    <h3>{"⚡ Hynox"}</h3>
                    <p>{"Delivers cutting-edge IT solutions and efficient manufacturing services."}</p>
                    <p>{"We connect technology and industry to drive innovation and growth."}</p>
                </div>
                <div>
                    <h3>{"Services"}</h3>
                    <ul>
                        { for FOOTER_SERVICES.iter().map(|name| html! { <li>{*name}</li> }) }
                    </ul>
                </div>
                <div>
                    <h3>{"Company"}</h3>
                    <ul>
                        <li><Link<Route> to={Route::About}>{"About Us"}</Link<Route>></li>
                        <li><Link<Route> to={Route::Team}>{"Meet Our Team"}</Link<Route>></li>
                    </ul>
                </div>
                <div>
                    <h3>{"Contact"}</h3>
                    <ul>
                        <li>{CONTACT.email}</li>
                        <li>{CONTACT.phone}</li>
                        <li>{CONTACT.address}</li>
                    </ul>
                </div>
            </div>
            <div class="footer-bottom">
                <span>{copyright_line(year)}</span>
                <nav>
                    <Link<Route> to={Route::PrivacyPolicy}>{"Privacy Policy"}</Link<Route>>
                    <Link<Route> to={Route::TermsAndConditions}>{"Terms of Service"}</Link<Route>>
                </nav>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copyright_uses_given_year() {
        assert_eq!(copyright_line(2025), "© 2025 Hynox. All rights reserved.");
    }
}
