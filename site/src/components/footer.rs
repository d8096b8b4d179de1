//! Page footer.

#[cfg(test)]
#[path = "footer_test.rs"]
mod footer_test;

use leptos::prelude::*;

use crate::components::social_links::SocialLinks;
use crate::content::{COPYRIGHT_YEAR, OWNER_FULL_NAME};

pub fn copyright_line(year: i32) -> String {
    format!("© {year} {OWNER_FULL_NAME}. All rights reserved.")
}

#[component]
pub fn Footer() -> impl IntoView {
    // Server markup carries the fixed year; the browser swaps in its own
    // after hydration.
    let year = RwSignal::new(COPYRIGHT_YEAR);

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let now = js_sys::Date::new_0().get_full_year();
        year.set(i32::try_from(now).unwrap_or(COPYRIGHT_YEAR));
    });

    view! {
        <footer class="footer">
            <div class="footer__inner">
                <p class="footer__copyright">{move || copyright_line(year.get())}</p>
                <SocialLinks class="footer__social"/>
            </div>
        </footer>
    }
}
