use log::{info, warn};
use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

use crate::relay::{open_in_new_tab, ContactMessage, WhatsAppRelay};

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let message = use_state(String::new);
    let error = use_state(|| None::<String>);
    // Live validation starts after the first submit attempt.
    let attempted = use_state(|| false);

    let oninput = {
        let message = message.clone();
        let error = error.clone();
        let attempted = attempted.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            let text = input.value();
            if *attempted {
                error.set(ContactMessage::parse(&text).err().map(|e| e.to_string()));
            }
            message.set(text);
        })
    };

    let onsubmit = {
        let message = message.clone();
        let error = error.clone();
        let attempted = attempted.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            attempted.set(true);

            let link = WhatsAppRelay::site().and_then(|relay| relay.link_for(&message));
            match link {
                Ok(url) => {
                    info!("Relaying contact message to WhatsApp");
                    match open_in_new_tab(&url) {
                        Ok(()) => error.set(None),
                        Err(e) => error.set(Some(e.to_string())),
                    }
                }
                Err(e) => {
                    warn!("Contact form rejected: {}", e);
                    error.set(Some(e.to_string()));
                }
            }
        })
    };

    html! {
        <form class="contact-form" {onsubmit} novalidate={true}>
            <style>
                {r#"
                    .contact-form {
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                    }
                    .contact-form label {
                        font-weight: 500;
                    }
                    .contact-form textarea {
                        min-height: 120px;
                        padding: 0.75rem;
                        background: #1f2937;
                        border: 1px solid #374151;
                        border-radius: 6px;
                        color: #fff;
                        font: inherit;
                        resize: vertical;
                        transition: border-color 0.2s ease;
                    }
                    .contact-form textarea:focus {
                        outline: none;
                        border-color: #fff;
                    }
                    .contact-form textarea.invalid {
                        border-color: #ef4444;
                    }
                    .field-error {
                        color: #ef4444;
                        font-size: 0.875rem;
                        margin-top: 0.25rem;
                    }
                    .contact-submit {
                        width: 100%;
                        padding: 1.25rem;
                        background: #fff;
                        color: #000;
                        font-size: 1.125rem;
                        border: none;
                        border-radius: 6px;
                        cursor: pointer;
                        transition: background 0.3s ease;
                    }
                    .contact-submit:hover {
                        background: #e5e7eb;
                    }
                "#}
            </style>
            <div>
                <label for="contact-message">{"Message"}</label>
                <textarea
                    id="contact-message"
                    name="message"
                    placeholder="Tell us about your project"
                    class={classes!(error.is_some().then_some("invalid"))}
                    value={(*message).clone()}
                    {oninput}
                />
                {
                    if let Some(err) = &*error {
                        html! { <p class="field-error" role="alert">{err.clone()}</p> }
                    } else {
                        html! {}
                    }
                }
            </div>
            <button type="submit" class="contact-submit">{"Chat with us →"}</button>
        </form>
    }
}
