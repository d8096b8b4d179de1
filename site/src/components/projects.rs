//! Project cards.

use leptos::prelude::*;

use crate::components::reveal::{self, Reveal};
use crate::content::{PROJECTS, Project};

fn project_card(project: &'static Project) -> impl IntoView {
    view! {
        <Reveal class="project-card" animation=reveal::SCALE>
            <div class="project-card__media">
                <img src=project.image alt=project.title loading="lazy"/>
                <div class="project-card__overlay">
                    <a href=project.github target="_blank" rel="noopener noreferrer" class="project-card__link">
                        "Code"
                    </a>
                    <a href=project.demo target="_blank" rel="noopener noreferrer" class="project-card__link">
                        "Live Demo"
                    </a>
                </div>
            </div>
            <div class="project-card__body">
                <h3 class="project-card__title">{project.title}</h3>
                <p class="project-card__description">{project.description}</p>
                <ul class="project-card__tech">
                    {project.tech.iter().map(|&tech| view! { <li class="tag">{tech}</li> }).collect_view()}
                </ul>
            </div>
        </Reveal>
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id="projects" class="section projects">
            <Reveal animation=reveal::FADE>
                <h2 class="section__title">"My Projects"</h2>
                <div class="projects__grid">{PROJECTS.iter().map(project_card).collect_view()}</div>
            </Reveal>
        </section>
    }
}
