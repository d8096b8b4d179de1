//! Landing section with greeting, typed tagline, and calls to action.

use leptos::prelude::*;

use crate::components::reveal::{self, Reveal};
use crate::components::social_links::SocialLinks;
use crate::content::{OWNER_NAME, RESUME_DOWNLOAD_NAME, RESUME_PATH, TAGLINE};
use crate::util::{scroll_spy, typewriter};

#[component]
pub fn Hero() -> impl IntoView {
    let typed = RwSignal::new(0_usize);

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        leptos::task::spawn_local(async move {
            use gloo_timers::future::TimeoutFuture;

            TimeoutFuture::new(typewriter::START_DELAY_MS).await;
            while !typewriter::is_complete(TAGLINE, typed.get_untracked()) {
                typed.update(|n| *n += 1);
                TimeoutFuture::new(typewriter::CHAR_INTERVAL_MS).await;
            }
        });
    });

    view! {
        <section id="hero" class="section hero">
            <Reveal class="hero__inner" animation=reveal::FADE>
                <p class="hero__greeting">"Hello,"</p>
                <h1 class="hero__name">
                    "I'm " <span class="hero__name-accent">{OWNER_NAME}</span>
                </h1>
                <p class="hero__tagline" aria-label=TAGLINE>
                    {move || typewriter::typed_prefix(TAGLINE, typed.get())}
                    <span class="hero__cursor"></span>
                </p>

                <div class="hero__actions">
                    <a class="button button--outline" href=RESUME_PATH download=RESUME_DOWNLOAD_NAME>
                        "Download Resume"
                    </a>
                    <button
                        class="button button--solid"
                        on:click=move |_| {
                            scroll_spy::scroll_to_section("contact");
                        }
                    >
                        "Contact Me"
                    </button>
                </div>

                <SocialLinks class="hero__social"/>
            </Reveal>
        </section>
    }
}
