//! Fixed top navigation with scroll-spy, mobile menu, and theme toggle.
//!
//! SYSTEM CONTEXT
//! ==============
//! The navbar is the only component that listens to window scroll for
//! navigation purposes. It measures sections on each scroll event and
//! highlights the one under the probe line.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;

use crate::components::theme_toggle::ThemeToggle;
use crate::content::{NAV_ITEMS, NavItem};
use crate::state::nav::NavState;
use crate::util::scroll_spy;

pub fn header_class(scrolled: bool) -> &'static str {
    if scrolled { "navbar navbar--scrolled" } else { "navbar" }
}

pub fn link_class(active: bool) -> &'static str {
    if active { "navbar__link navbar__link--active" } else { "navbar__link" }
}

pub fn menu_icon(open: bool) -> &'static str {
    if open { "✕" } else { "☰" }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let nav = RwSignal::new(NavState::default());

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            let sections = scroll_spy::measure_sections(crate::content::SECTION_IDS);
            let mut next = nav.get_untracked();
            next.on_scroll(scroll_spy::window_scroll_y(), &sections);
            if next != nav.get_untracked() {
                nav.set(next);
            }
        });
        on_cleanup(move || handle.remove());
    }

    let go_to = move |section: &'static str| {
        if scroll_spy::scroll_to_section(section) {
            nav.update(|n| n.navigated(section));
        }
    };

    let links = move |extra: &'static str| {
        NAV_ITEMS
            .iter()
            .map(|&NavItem { label, section }| {
                view! {
                    <a
                        href=format!("#{section}")
                        class=move || format!("{} {extra}", link_class(nav.with(|n| n.is_active(section))))
                        on:click=move |ev| {
                            ev.prevent_default();
                            go_to(section);
                        }
                    >
                        {label}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <header class=move || header_class(nav.with(|n| n.scrolled))>
            <div class="navbar__inner">
                <a
                    href="#hero"
                    class="navbar__brand"
                    on:click=move |ev| {
                        ev.prevent_default();
                        go_to("hero");
                    }
                >
                    <span class="navbar__brand-primary">"Dev"</span>
                    <span class="navbar__brand-secondary">"Portfolio"</span>
                </a>

                <nav class="navbar__links">{links("navbar__link--desktop")}</nav>

                <div class="navbar__actions">
                    <ThemeToggle/>
                    <button
                        class="navbar__menu-button"
                        on:click=move |_| nav.update(NavState::toggle_menu)
                        aria-label="Toggle menu"
                    >
                        {move || menu_icon(nav.with(|n| n.menu_open))}
                    </button>
                </div>
            </div>

            <Show when=move || nav.with(|n| n.menu_open)>
                <nav class="navbar__mobile">{links("navbar__link--mobile")}</nav>
            </Show>
        </header>
    }
}
