//! Competitive-programming ratings, GitHub counters, and the placeholder
//! contribution graph.
//!
//! DESIGN
//! ======
//! The grid is generated once per component from `GRAPH_SEED` so server and
//! client markup agree. The loading placeholder renders on both sides and is
//! only cleared in the browser after `LOADING_MS`.

#[cfg(test)]
#[path = "stats_test.rs"]
mod stats_test;

use leptos::prelude::*;

use crate::components::reveal::{self, Reveal};
use crate::content::{GITHUB_STATS, PLATFORM_RATINGS, PlatformRating};
use crate::util::contributions::{self, GRAPH_SEED, Week};

/// Simulated fetch delay before the graph is shown.
pub const LOADING_MS: u32 = 1_000;

pub const MONTHS: [&str; 12] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"];
pub const DAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Weekday labels shown beside the grid; alternate rows stay blank.
pub fn day_label(day: usize) -> &'static str {
    if day % 2 == 1 { DAYS.get(day).copied().unwrap_or("") } else { "" }
}

/// Summary line under the graph.
pub fn contribution_summary(weeks: &[Week]) -> String {
    format!("{} contributions in the last year", contributions::total(weeks))
}

fn rating_card(rating: &'static PlatformRating) -> impl IntoView {
    view! {
        <a class=format!("rating-card {}", rating.accent) href=rating.profile_url target="_blank" rel="noopener noreferrer">
            <span class="rating-card__platform">{rating.platform}</span>
            <span class="rating-card__value">{rating.rating}</span>
            <span class="rating-card__detail">{rating.detail}</span>
            <span class="rating-card__cta">"View profile →"</span>
        </a>
    }
}

fn contribution_graph(weeks: &[Week]) -> AnyView {
    let columns = weeks
        .iter()
        .map(|week| {
            let cells = week
                .iter()
                .map(|&level| view! { <span class=contributions::level_class(level) title=contributions::cell_title(level)></span> })
                .collect_view();
            view! { <div class="contrib-week">{cells}</div> }
        })
        .collect_view();

    view! {
        <div class="contrib-graph">
            <div class="contrib-graph__months">
                {MONTHS.iter().map(|&m| view! { <span>{m}</span> }).collect_view()}
            </div>
            <div class="contrib-graph__body">
                <div class="contrib-graph__days">
                    {(0..DAYS.len()).map(|d| view! { <span>{day_label(d)}</span> }).collect_view()}
                </div>
                <div class="contrib-graph__weeks">{columns}</div>
            </div>
            <div class="contrib-graph__legend">
                <span>"Less"</span>
                {(0..=contributions::MAX_LEVEL)
                    .map(|level| view! { <span class=contributions::level_class(level)></span> })
                    .collect_view()}
                <span>"More"</span>
            </div>
            <p class="contrib-graph__summary">{contribution_summary(weeks)}</p>
        </div>
    }
    .into_any()
}

#[component]
pub fn Stats() -> impl IntoView {
    let weeks = StoredValue::new(contributions::generate(GRAPH_SEED));
    let loading = RwSignal::new(true);

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(LOADING_MS).await;
            loading.set(false);
        });
    });

    let stats = GITHUB_STATS;

    view! {
        <section id="github-activity" class="section stats">
            <Reveal animation=reveal::FADE>
                <h2 class="section__title">"Coding Stats"</h2>

                <div class="stats__ratings">{PLATFORM_RATINGS.iter().map(rating_card).collect_view()}</div>

                <div class="stats__github">
                    <div class="stats__github-header">
                        <img class="stats__avatar" src=stats.avatar_url alt=stats.handle/>
                        <a href=stats.profile_url target="_blank" rel="noopener noreferrer">
                            {format!("@{}", stats.handle)}
                        </a>
                    </div>
                    <div class="stats__counters">
                        {stats
                            .counters()
                            .into_iter()
                            .map(|(label, value)| {
                                view! {
                                    <div class="stat-tile">
                                        <span class="stat-tile__value">{value}</span>
                                        <span class="stat-tile__label">{label}</span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>

                    <Show
                        when=move || !loading.get()
                        fallback=|| view! { <div class="contrib-graph contrib-graph--loading">"Loading activity..."</div> }
                    >
                        {move || weeks.with_value(|w| contribution_graph(w))}
                    </Show>
                </div>
            </Reveal>
        </section>
    }
}
