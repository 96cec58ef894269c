//! Application Context
//!
//! Wires the stores together once and hands them to the component tree
//! via the Leptos Context API.

use std::sync::Arc;

use leptos::prelude::*;

use crate::api::{AssigneeApi, TodoApi};
use crate::store::{ActivityStore, AssigneeStore, ToastStore, TodoStore};

/// Every store the UI needs, sharing one activity feed and one toast queue
#[derive(Clone)]
pub struct AppContext {
    pub todos: TodoStore,
    pub assignees: AssigneeStore,
    pub activity: ActivityStore,
    pub toasts: ToastStore,
}

impl AppContext {
    pub fn new(todo_api: Arc<dyn TodoApi>, assignee_api: Arc<dyn AssigneeApi>, toast_seconds: u32) -> Self {
        let toasts = ToastStore::new(toast_seconds);
        let activity = ActivityStore::new();
        Self {
            todos: TodoStore::new(todo_api, activity, toasts),
            assignees: AssigneeStore::new(assignee_api, activity, toasts),
            activity,
            toasts,
        }
    }

    /// Make each store available to `expect_context` below the current owner
    pub fn provide(&self) {
        provide_context(self.todos.clone());
        provide_context(self.assignees.clone());
        provide_context(self.activity);
        provide_context(self.toasts);
    }
}

pub fn use_todos() -> TodoStore {
    expect_context::<TodoStore>()
}

pub fn use_assignees() -> AssigneeStore {
    expect_context::<AssigneeStore>()
}

pub fn use_activity() -> ActivityStore {
    expect_context::<ActivityStore>()
}

pub fn use_toasts() -> ToastStore {
    expect_context::<ToastStore>()
}
