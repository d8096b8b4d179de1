//! "Get in touch" form.
//!
//! Submission is simulated in the browser; see `state::contact`.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use leptos::prelude::*;

use crate::components::reveal::{self, Reveal};
use crate::state::contact::{ContactDraft, SubmitStatus};

pub fn submit_label(status: SubmitStatus) -> &'static str {
    if status.is_sending() { "Sending..." } else { "Send Message" }
}

#[component]
pub fn Contact() -> impl IntoView {
    let draft = RwSignal::new(ContactDraft::default());
    let status = RwSignal::new(SubmitStatus::Idle);

    let submit = move || {
        if status.get_untracked().is_sending() {
            return;
        }
        let message = match draft.with_untracked(ContactDraft::validate) {
            Ok(message) => message,
            Err(reason) => {
                status.set(SubmitStatus::Rejected(reason));
                return;
            }
        };
        leptos::logging::log!("contact form: message from {} <{}>", message.name, message.email);
        status.set(SubmitStatus::Sending);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::state::contact::{NOTICE_TTL_MS, SEND_DELAY_MS};
            use gloo_timers::future::TimeoutFuture;

            TimeoutFuture::new(SEND_DELAY_MS).await;
            status.set(SubmitStatus::Sent);
            draft.set(ContactDraft::default());

            TimeoutFuture::new(NOTICE_TTL_MS).await;
            if status.get_untracked() == SubmitStatus::Sent {
                status.set(SubmitStatus::Idle);
            }
        });
    };

    view! {
        <section id="contact" class="section contact">
            <Reveal animation=reveal::FADE>
                <h2 class="section__title">"Get In Touch"</h2>
                <Reveal class="contact__form-wrap" animation=reveal::SLIDE_UP>
                    <form
                        class="contact__form"
                        novalidate=true
                        on:submit=move |ev| {
                            ev.prevent_default();
                            submit();
                        }
                    >
                        <label class="field">
                            <span class="field__label">"Name"</span>
                            <input
                                type="text"
                                name="name"
                                prop:value=move || draft.with(|d| d.name.clone())
                                on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                            />
                        </label>
                        <label class="field">
                            <span class="field__label">"Email"</span>
                            <input
                                type="email"
                                name="email"
                                prop:value=move || draft.with(|d| d.email.clone())
                                on:input=move |ev| draft.update(|d| d.email = event_target_value(&ev))
                            />
                        </label>
                        <label class="field">
                            <span class="field__label">"Message"</span>
                            <textarea
                                name="message"
                                rows="5"
                                prop:value=move || draft.with(|d| d.message.clone())
                                on:input=move |ev| draft.update(|d| d.message = event_target_value(&ev))
                            ></textarea>
                        </label>

                        <button type="submit" class="button button--solid" disabled=move || status.get().is_sending()>
                            {move || submit_label(status.get())}
                        </button>

                        {move || {
                            status
                                .get()
                                .notice()
                                .map(|(text, modifier)| {
                                    view! { <p class=format!("contact-notice {modifier}") role="status">{text}</p> }
                                })
                        }}
                    </form>
                </Reveal>
            </Reveal>
        </section>
    }
}
