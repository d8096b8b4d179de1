//! Skill categories grid.

#[cfg(test)]
#[path = "skills_test.rs"]
mod skills_test;

use leptos::prelude::*;

use crate::components::reveal::{self, Reveal};
use crate::content::{SKILL_CATEGORIES, SkillCategory, skill_glyph};

/// Per-card animation delay; cards enter one after another.
pub fn stagger_delay_ms(index: usize) -> usize {
    (index + 1) * 100
}

fn category_view(category: &'static SkillCategory) -> impl IntoView {
    view! {
        <Reveal class="skill-category" animation=reveal::SLIDE_UP>
            <h3 class=format!("skill-category__title {}", category.accent)>{category.name}</h3>
            <div class="skill-category__grid">
                {category
                    .skills
                    .iter()
                    .enumerate()
                    .map(|(i, &skill)| {
                        view! {
                            <div class="skill-card" style=format!("animation-delay: {}ms", stagger_delay_ms(i))>
                                <span class="skill-card__glyph">{skill_glyph(skill)}</span>
                                <span class="skill-card__name">{skill}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </Reveal>
    }
}

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class="section skills">
            <Reveal animation=reveal::FADE>
                <h2 class="section__title">"My Skills"</h2>
                <div class="skills__categories">
                    {SKILL_CATEGORIES.iter().map(category_view).collect_view()}
                </div>
            </Reveal>
        </section>
    }
}
