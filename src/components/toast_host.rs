//! Toast Host Component
//!
//! Renders the toast queue and expires entries once a second.

use chrono::Utc;
use gloo_timers::callback::Interval;
use leptos::prelude::*;

use crate::context::use_toasts;
use crate::store::Toast;

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_toasts();

    // Mounted once at the root for the lifetime of the page
    Interval::new(1_000, move || toasts.expire(Utc::now())).forget();

    view! {
        <div class="toast-host">
            <For
                each=move || toasts.visible()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let Toast { id, title, message, severity, icon, .. } = toast;
                    view! {
                        <div class=format!("toast toast-{}", severity.as_str()) role="alert">
                            <span class="toast-icon">{icon.glyph()}</span>
                            <div class="toast-body">
                                <strong class="toast-title">{title}</strong>
                                <p class="toast-message">{message}</p>
                            </div>
                            <button class="toast-close" on:click=move |_| toasts.dismiss(id)>
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
