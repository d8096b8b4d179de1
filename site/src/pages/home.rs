//! Single-page portfolio layout.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::components::about::About;
use crate::components::contact::Contact;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::navbar::Navbar;
use crate::components::projects::Projects;
use crate::components::skills::Skills;
use crate::components::stats::Stats;
use crate::components::theme_provider::use_theme;

/// Color transitions are enabled only after the theme is mounted, so the
/// first paint never animates from the default palette.
pub fn page_class(mounted: bool) -> &'static str {
    if mounted { "page page--mounted" } else { "page" }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let theme = use_theme();

    view! {
        <div class=move || page_class(theme.mounted())>
            <Navbar/>
            <main>
                <Hero/>
                <About/>
                <Skills/>
                <Projects/>
                <Stats/>
                <Contact/>
            </main>
            <Footer/>
        </div>
    }
}

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"Page not found"</h1>
            <a href="/">"Back to the portfolio"</a>
        </div>
    }
}
