//! Todo List Component
//!
//! All cached todos with toggle, edit and delete actions.

use leptos::ev::{Event, MouseEvent};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{DeleteConfirmButton, TodoEditor};
use crate::context::use_todos;
use crate::models::{Assignee, Todo};
use crate::time::format_date;

#[component]
pub fn TodoList() -> impl IntoView {
    let todos = use_todos();
    let counter = todos.clone();

    view! {
        <section class="todo-list">
            <h2>"Todos"</h2>
            <TodoEditor />
            <ul class="todo-items">
                {move || todos.todos().into_iter().map(|todo| view! { <TodoRow todo=todo /> }).collect_view()}
            </ul>
            <p class="item-count">{move || format!("{} Todos", counter.todos().len())}</p>
        </section>
    }
}

#[component]
fn TodoRow(todo: Todo) -> impl IntoView {
    let todos = use_todos();
    let id = todo.id;

    let row_class = if todo.finished { "todo-row finished" } else { "todo-row" };
    let assignees = todo
        .assignee_list
        .iter()
        .map(Assignee::full_name)
        .collect::<Vec<_>>()
        .join(", ");
    let due = todo.due_date.map(|d| format!("Fällig: {}", format_date(d)));

    let on_toggle = {
        let todos = todos.clone();
        move |_: Event| {
            let todos = todos.clone();
            spawn_local(async move {
                if todos.toggle_finished(id).await.is_err() {
                    // resync the row so the checkbox shows the server's state
                    let _ = todos.refresh_todo(id).await;
                }
            });
        }
    };
    let on_edit = {
        let todos = todos.clone();
        move |_: MouseEvent| {
            todos.begin_edit(id);
        }
    };
    let on_delete = Callback::new(move |_: ()| {
        let todos = todos.clone();
        spawn_local(async move {
            let _ = todos.delete_todo(id).await;
        });
    });

    view! {
        <li class=row_class>
            <input type="checkbox" prop:checked=todo.finished on:change=on_toggle />
            <div class="todo-body">
                <span class="todo-title">{todo.title.clone()}</span>
                {todo.category.clone().map(|c| view! { <span class="todo-category">{c}</span> })}
                {todo.description.clone().map(|d| view! { <p class="todo-description">{d}</p> })}
                {due.map(|d| view! { <span class="todo-due">{d}</span> })}
                {(!assignees.is_empty()).then(|| view! { <span class="todo-assignees">{assignees}</span> })}
            </div>
            <button class="edit-btn" on:click=on_edit>"Bearbeiten"</button>
            <DeleteConfirmButton on_confirm=on_delete title="Todo löschen" />
        </li>
    }
}
