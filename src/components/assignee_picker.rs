//! Assignee Picker Component
//!
//! Checkbox list over all cached assignees.

use leptos::prelude::*;

use crate::context::use_assignees;
use crate::models::{Assignee, AssigneeId};

#[component]
pub fn AssigneePicker(
    #[prop(into)] selected: Signal<Vec<AssigneeId>>,
    #[prop(into)] on_toggle: Callback<Assignee>,
) -> impl IntoView {
    let assignees = use_assignees();

    view! {
        <fieldset class="assignee-picker">
            <legend>"Assignees"</legend>
            <For
                each=move || assignees.assignees()
                key=|assignee| assignee.id
                children=move |assignee: Assignee| {
                    let id = assignee.id;
                    let label = assignee.full_name();
                    view! {
                        <label class="assignee-option">
                            <input
                                type="checkbox"
                                prop:checked=move || selected.get().contains(&id)
                                on:change=move |_| on_toggle.run(assignee.clone())
                            />
                            {label}
                        </label>
                    }
                }
            />
        </fieldset>
    }
}
