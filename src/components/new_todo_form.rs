//! New Todo Form Component
//!
//! Create screen: title, description, due date and assignees.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::AssigneePicker;
use crate::context::{use_toasts, use_todos};
use crate::models::{Assignee, AssigneeId, TodoPayload};
use crate::time::parse_date_input;

#[component]
pub fn NewTodoForm() -> impl IntoView {
    let todos = use_todos();
    let toasts = use_toasts();

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (due, set_due) = signal(String::new());
    let selected = RwSignal::new(Vec::<AssigneeId>::new());

    let on_toggle = Callback::new(move |assignee: Assignee| {
        selected.update(|ids| match ids.iter().position(|id| *id == assignee.id) {
            Some(pos) => {
                ids.remove(pos);
            }
            None => ids.push(assignee.id),
        });
    });

    let create = move |event: SubmitEvent| {
        event.prevent_default();
        let description = description.get_untracked();
        let payload = TodoPayload {
            title: title.get_untracked().trim().to_string(),
            description: (!description.trim().is_empty()).then_some(description),
            finished: false,
            due_date: parse_date_input(&due.get_untracked()),
            assignee_id_list: selected.get_untracked(),
        };
        let todos = todos.clone();
        spawn_local(async move {
            if let Ok(created) = todos.create_todo(payload).await {
                toasts.success(&format!("\"{}\" wurde angelegt", created.title));
                set_title.set(String::new());
                set_description.set(String::new());
                set_due.set(String::new());
                selected.set(Vec::new());
            }
        });
    };

    view! {
        <form class="new-todo-form" on:submit=create>
            <h2>"Neues Todo"</h2>
            <input
                type="text"
                placeholder="Titel"
                prop:value=move || title.get()
                on:input=move |ev| set_title.set(event_target_value(&ev))
            />
            <textarea
                placeholder="Beschreibung"
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(event_target_value(&ev))
            ></textarea>
            <input
                type="date"
                prop:value=move || due.get()
                on:change=move |ev| set_due.set(event_target_value(&ev))
            />
            <AssigneePicker selected=selected on_toggle=on_toggle />
            <button type="submit">"Anlegen"</button>
        </form>
    }
}
