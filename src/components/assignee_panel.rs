//! Assignee Panel Component
//!
//! Assignee screen: search, list with delete, and a shared create/edit form.

use leptos::ev::{MouseEvent, SubmitEvent};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::DeleteConfirmButton;
use crate::context::use_assignees;
use crate::models::{Assignee, AssigneeId, AssigneePayload};

#[component]
pub fn AssigneePanel() -> impl IntoView {
    let assignees = use_assignees();
    let filtered = assignees.filtered();

    let (prename, set_prename) = signal(String::new());
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    // None = the form creates, Some(id) = the form edits that assignee
    let (editing, set_editing) = signal::<Option<AssigneeId>>(None);

    let reset = move || {
        set_prename.set(String::new());
        set_name.set(String::new());
        set_email.set(String::new());
        set_editing.set(None);
    };

    let save = {
        let assignees = assignees.clone();
        move |event: SubmitEvent| {
            event.prevent_default();
            let payload = AssigneePayload {
                prename: prename.get_untracked().trim().to_string(),
                name: name.get_untracked().trim().to_string(),
                email: email.get_untracked().trim().to_string(),
            };
            let target = editing.get_untracked();
            let assignees = assignees.clone();
            spawn_local(async move {
                let result = match target {
                    Some(id) => assignees.update_assignee(id, payload).await,
                    None => assignees.create_assignee(payload).await,
                };
                if result.is_ok() {
                    reset();
                }
            });
        }
    };

    let search = assignees.clone();
    let search_value = assignees.clone();
    let rows = assignees;

    view! {
        <section class="assignee-panel">
            <h2>"Assignees"</h2>
            <input
                type="search"
                class="assignee-search"
                placeholder="Suchen..."
                prop:value=move || search_value.query()
                on:input=move |ev| search.set_query(event_target_value(&ev))
            />
            <ul class="assignee-list">
                <For
                    each=move || filtered.get()
                    key=|a| (a.id, a.full_name(), a.email.clone())
                    children=move |assignee: Assignee| {
                        let id = assignee.id;
                        let on_edit = {
                            let assignee = assignee.clone();
                            move |_: MouseEvent| {
                                set_prename.set(assignee.prename.clone());
                                set_name.set(assignee.name.clone());
                                set_email.set(assignee.email.clone());
                                set_editing.set(Some(assignee.id));
                            }
                        };
                        let store = rows.clone();
                        let on_delete = Callback::new(move |_: ()| {
                            let store = store.clone();
                            spawn_local(async move {
                                let _ = store.delete_assignee(id).await;
                            });
                        });
                        view! {
                            <li class="assignee-row">
                                <span class="assignee-name">{assignee.full_name()}</span>
                                <span class="assignee-email">{assignee.email.clone()}</span>
                                <button class="edit-btn" on:click=on_edit>"Bearbeiten"</button>
                                <DeleteConfirmButton on_confirm=on_delete title="Assignee löschen" />
                            </li>
                        }
                    }
                />
            </ul>

            <form class="assignee-form" on:submit=save>
                <h3>{move || if editing.get().is_some() { "Assignee bearbeiten" } else { "Neuer Assignee" }}</h3>
                <input
                    type="text"
                    placeholder="Vorname"
                    prop:value=move || prename.get()
                    on:input=move |ev| set_prename.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Name"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
                <input
                    type="email"
                    placeholder="E-Mail"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                <div class="editor-actions">
                    <button type="submit">"Speichern"</button>
                    <Show when=move || editing.get().is_some()>
                        <button type="button" class="cancel-btn" on:click=move |_| reset()>"Abbrechen"</button>
                    </Show>
                </div>
            </form>
        </section>
    }
}
