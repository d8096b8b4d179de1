//! Wrapper that animates its children in once they scroll into view.
//!
//! Revealed elements stay revealed. Outside the browser nothing is watched
//! and the wrapper renders in its hidden state; the stylesheet keeps hidden
//! content visible when scripting is unavailable.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use leptos::prelude::*;

/// Fade in place.
pub const FADE: &str = "reveal--fade";
/// Slide up while fading.
pub const SLIDE_UP: &str = "reveal--slide-up";
/// Grow from slightly smaller.
pub const SCALE: &str = "reveal--scale";

/// Class list for a reveal wrapper.
pub fn reveal_class(base: &str, animation: &str, revealed: bool) -> String {
    let state = if revealed { "reveal is-revealed" } else { "reveal" };
    if base.is_empty() { format!("{state} {animation}") } else { format!("{base} {state} {animation}") }
}

#[component]
pub fn Reveal(
    /// Extra classes for the wrapper element.
    #[prop(into, optional)]
    class: String,
    /// One of `FADE`, `SLIDE_UP`, or `SCALE`.
    #[prop(default = FADE)]
    animation: &'static str,
    children: Children,
) -> impl IntoView {
    let node = NodeRef::<leptos::html::Div>::new();
    let revealed = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    watch_visibility(node, revealed);

    view! {
        <div node_ref=node class=move || reveal_class(&class, animation, revealed.get())>
            {children()}
        </div>
    }
}

#[cfg(feature = "hydrate")]
fn watch_visibility(node: NodeRef<leptos::html::Div>, revealed: RwSignal<bool>) {
    use crate::util::reveal::{REVEAL_THRESHOLD, is_revealed, viewport_height};

    let check = move || {
        if revealed.get_untracked() {
            return;
        }
        let Some(el) = node.get_untracked() else {
            return;
        };
        let rect = el.get_bounding_client_rect();
        if is_revealed(rect.top(), rect.height(), viewport_height(), REVEAL_THRESHOLD) {
            revealed.set(true);
        }
    };

    Effect::new(move || {
        if node.get().is_some() {
            check();
        }
    });

    let handle = window_event_listener(leptos::ev::scroll, move |_| check());
    on_cleanup(move || handle.remove());
}
