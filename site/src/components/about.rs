//! Biography section.

use leptos::prelude::*;

use crate::components::reveal::{self, Reveal};
use crate::content::{ABOUT_PARAGRAPHS, OWNER_NAME, PROFILE_IMAGE, Span};

fn render_span(span: Span) -> AnyView {
    match span {
        Span::Plain(text) => text.into_any(),
        Span::Highlight(text) => view! { <span class="highlight">{text}</span> }.into_any(),
    }
}

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="section about">
            <Reveal animation=reveal::FADE>
                <h2 class="section__title">"About Me"</h2>
                <div class="about__body">
                    <Reveal class="about__portrait" animation=reveal::SLIDE_UP>
                        <img src=PROFILE_IMAGE alt=format!("{OWNER_NAME} - Developer portrait")/>
                    </Reveal>
                    <Reveal class="about__text" animation=reveal::SLIDE_UP>
                        {ABOUT_PARAGRAPHS
                            .iter()
                            .map(|spans| {
                                view! { <p>{spans.iter().copied().map(render_span).collect_view()}</p> }
                            })
                            .collect_view()}
                    </Reveal>
                </div>
            </Reveal>
        </section>
    }
}
