//! Todo Editor Component
//!
//! Edit form bound to the todo store's edit session. Rebuilt only when a
//! different todo is opened, not on every keystroke.

use leptos::ev::{Event, MouseEvent, SubmitEvent};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::AssigneePicker;
use crate::context::use_todos;
use crate::models::{Assignee, AssigneeId};
use crate::time::{parse_date_input, to_date_input};

#[component]
pub fn TodoEditor() -> impl IntoView {
    let todos = use_todos();
    let editing = Memo::new(move |_| todos.session().map(|s| s.todo_id()));

    move || editing.get().map(|_| view! { <EditForm /> })
}

#[component]
fn EditForm() -> impl IntoView {
    let todos = use_todos();
    let Some(session) = todos.session_untracked() else {
        return ().into_any();
    };
    let original = session.original().clone();

    let selected = {
        let todos = todos.clone();
        Signal::derive(move || {
            todos
                .session()
                .map(|s| s.effective_assignees().iter().map(|a| a.id).collect::<Vec<AssigneeId>>())
                .unwrap_or_default()
        })
    };
    let on_toggle = {
        let todos = todos.clone();
        Callback::new(move |assignee: Assignee| todos.edit(|s| s.toggle_assignee(assignee)))
    };

    let on_title = {
        let todos = todos.clone();
        move |event: Event| {
            let value = event_target_value(&event);
            todos.edit(|s| s.title = Some(value));
        }
    };
    let on_description = {
        let todos = todos.clone();
        move |event: Event| {
            let value = event_target_value(&event);
            todos.edit(|s| s.description = Some(value));
        }
    };
    let on_due = {
        let todos = todos.clone();
        move |event: Event| {
            let value = event_target_value(&event);
            todos.edit(|s| s.due_date = parse_date_input(&value));
        }
    };
    let on_save = {
        let todos = todos.clone();
        move |event: SubmitEvent| {
            event.prevent_default();
            let todos = todos.clone();
            spawn_local(async move {
                // errors are already toasted; the form stays open
                let _ = todos.update_todo().await;
            });
        }
    };
    let on_cancel = move |_: MouseEvent| todos.cancel_edit();

    let description = original.description.clone().unwrap_or_default();
    let due = original.due_date.map(to_date_input).unwrap_or_default();

    view! {
        <form class="todo-editor" on:submit=on_save>
            <h3>"Todo bearbeiten"</h3>
            <input type="text" placeholder="Titel" prop:value=original.title.clone() on:input=on_title />
            <textarea placeholder="Beschreibung" prop:value=description on:input=on_description></textarea>
            <input type="date" prop:value=due on:change=on_due />
            <AssigneePicker selected=selected on_toggle=on_toggle />
            <div class="editor-actions">
                <button type="submit">"Speichern"</button>
                <button type="button" class="cancel-btn" on:click=on_cancel>"Abbrechen"</button>
            </div>
        </form>
    }
    .into_any()
}
