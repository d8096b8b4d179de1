//! Row of social profile links used by the hero and footer.

use leptos::prelude::*;

use crate::content::SOCIAL_LINKS;

#[component]
pub fn SocialLinks(#[prop(into)] class: String) -> impl IntoView {
    view! {
        <div class=class>
            {SOCIAL_LINKS
                .iter()
                .map(|link| {
                    let (target, rel) = if link.is_external() {
                        (Some("_blank"), Some("noopener noreferrer"))
                    } else {
                        (None, None)
                    };
                    view! {
                        <a class="social-link" href=link.href target=target rel=rel aria-label=link.label title=link.label>
                            {link.icon}
                        </a>
                    }
                })
                .collect_view()}
        </div>
    }
}
