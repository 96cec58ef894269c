//! Activity Feed Component
//!
//! Home screen: the most recent actions, newest first.

use leptos::prelude::*;

use crate::context::use_activity;
use crate::store::Activity;

#[component]
pub fn ActivityFeed() -> impl IntoView {
    let activity = use_activity();

    view! {
        <section class="activity-feed">
            <h2>"Letzte Aktivitäten"</h2>
            <Show
                when=move || !activity.is_empty()
                fallback=|| view! { <p class="empty-hint">"Noch keine Aktivitäten"</p> }
            >
                <ul class="activity-list">
                    {move || activity.entries().into_iter().map(|entry| {
                        let Activity { kind, text, time_label, icon, .. } = entry;
                        view! {
                            <li class=format!("activity activity-{}", kind.tag())>
                                <span class="activity-icon">{icon.glyph()}</span>
                                <span class="activity-text">{text}</span>
                                <span class="activity-time">{time_label}</span>
                            </li>
                        }
                    }).collect_view()}
                </ul>
            </Show>
        </section>
    }
}
