//! Taskboard Frontend App
//!
//! Root component: wires the stores, the navigation bar and the screens.

use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::HttpApi;
use crate::components::{ActivityFeed, AssigneePanel, NewTodoForm, ToastHost, TodoList};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::routes::Screen;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_env();
    log::info!("[APP] API base URL: {}", config.api_base_url);

    let api = Arc::new(HttpApi::new(&config.api_base_url));
    let ctx = AppContext::new(api.clone(), api, config.toast_seconds);
    ctx.provide();

    let initial = window()
        .location()
        .hash()
        .ok()
        .and_then(|hash| Screen::from_hash(&hash))
        .unwrap_or(Screen::Home);
    let (screen, set_screen) = signal(initial);

    // Reload the cache for the screen being entered
    {
        let todos = ctx.todos.clone();
        let assignees = ctx.assignees.clone();
        Effect::new(move |_| {
            let current = screen.get();
            log::debug!("[APP] Entering {:?}", current);
            let todos = todos.clone();
            let assignees = assignees.clone();
            spawn_local(async move {
                match current {
                    Screen::Assignees => assignees.fetch_all_assignees().await,
                    _ => {
                        todos.fetch_todos().await;
                        assignees.fetch_all_assignees().await;
                    }
                }
            });
        });
    }

    let navigate = move |target: Screen| {
        if let Err(err) = window().location().set_hash(&target.hash()) {
            log::warn!("[APP] Failed to update location hash: {:?}", err);
        }
        set_screen.set(target);
    };

    view! {
        <div class="app-layout">
            <nav class="nav-bar">
                <h1>"Taskboard"</h1>
                {Screen::ALL.into_iter().map(move |target| view! {
                    <button
                        class="nav-btn"
                        class:active=move || screen.get() == target
                        on:click=move |_| navigate(target)
                    >
                        {target.label()}
                    </button>
                }).collect_view()}
            </nav>

            <main class="main-content">
                {move || match screen.get() {
                    Screen::Home => view! { <ActivityFeed /> }.into_any(),
                    Screen::CreateTodo => view! { <NewTodoForm /> }.into_any(),
                    Screen::Assignees => view! { <AssigneePanel /> }.into_any(),
                    Screen::Todos => view! { <TodoList /> }.into_any(),
                }}
            </main>

            <ToastHost />
        </div>
    }
}
