//! Light/dark toggle button shown in the navbar.

#[cfg(test)]
#[path = "theme_toggle_test.rs"]
mod theme_toggle_test;

use leptos::prelude::*;

use crate::components::theme_provider::use_theme;
use crate::state::theme::ResolvedTheme;

/// Icon offering the opposite mode: a sun while dark, a moon while light.
pub fn toggle_icon(resolved: ResolvedTheme) -> &'static str {
    match resolved {
        ResolvedTheme::Dark => "☀",
        ResolvedTheme::Light => "☾",
    }
}

pub fn toggle_label(resolved: ResolvedTheme) -> &'static str {
    match resolved {
        ResolvedTheme::Dark => "Switch to light mode",
        ResolvedTheme::Light => "Switch to dark mode",
    }
}

/// Toggle button. Renders an empty placeholder until the theme is mounted so
/// the server-rendered icon never disagrees with the stored preference.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();

    view! {
        <button
            class="theme-toggle"
            on:click=move |_| theme.toggle_theme()
            title=move || toggle_label(theme.resolved())
            aria-label="Toggle theme"
        >
            <Show
                when=move || theme.mounted()
                fallback=|| view! { <span class="theme-toggle__placeholder"></span> }
            >
                <span class="theme-toggle__icon">{move || toggle_icon(theme.resolved())}</span>
            </Show>
        </button>
    }
}
