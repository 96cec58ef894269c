//! Todo Store
//!
//! Cached todos plus the edit session, backed by `reactive_stores` for
//! field-level reactivity. Mutations record activity entries; failures
//! become toasts.

use std::collections::HashSet;
use std::sync::Arc;

use leptos::prelude::*;
use reactive_stores::Store;

use super::{ActivityStore, EditSession, ToastStore};
use crate::api::TodoApi;
use crate::error::{AppError, AppResult};
use crate::models::{Todo, TodoId, TodoPayload};

#[derive(Clone, Debug, Default, Store)]
pub struct TodoState {
    /// Server order, replaced on fetch
    pub todos: Vec<Todo>,
    /// Open edit form, if any
    pub session: Option<EditSession>,
    /// Deletes waiting for the server
    pub deleting: HashSet<TodoId>,
}

#[derive(Clone)]
pub struct TodoStore {
    state: Store<TodoState>,
    api: Arc<dyn TodoApi>,
    activity: ActivityStore,
    toasts: ToastStore,
}

impl TodoStore {
    pub fn new(api: Arc<dyn TodoApi>, activity: ActivityStore, toasts: ToastStore) -> Self {
        Self {
            state: Store::new(TodoState::default()),
            api,
            activity,
            toasts,
        }
    }

    /// Cached todos (tracked)
    pub fn todos(&self) -> Vec<Todo> {
        self.state.todos().get()
    }

    pub fn todos_untracked(&self) -> Vec<Todo> {
        self.state.todos().get_untracked()
    }

    /// Open edit session (tracked)
    pub fn session(&self) -> Option<EditSession> {
        self.state.session().get()
    }

    pub fn session_untracked(&self) -> Option<EditSession> {
        self.state.session().get_untracked()
    }

    fn find(&self, id: TodoId) -> Option<Todo> {
        self.state
            .todos()
            .with_untracked(|todos| todos.iter().find(|t| t.id == id).cloned())
    }

    fn fail(&self, err: AppError) -> AppError {
        if !err.is_silent() {
            self.toasts.error(&err.to_string());
        }
        err
    }

    // ========================
    // Remote Operations
    // ========================

    /// Replace the cache with the server's list. Failures only toast.
    pub async fn fetch_todos(&self) {
        match self.api.list_todos().await {
            Ok(todos) => {
                log::info!("[TodoStore] Loaded {} todos", todos.len());
                *self.state.todos().write() = todos;
            }
            Err(err) => {
                log::warn!("[TodoStore] Loading todos failed: {}", err);
                self.fail(err);
            }
        }
    }

    /// Reload a single todo from the server
    pub async fn refresh_todo(&self, id: TodoId) -> AppResult<()> {
        let todo = self.api.get_todo(id).await.map_err(|e| self.fail(e))?;
        self.state.todos().update(|todos| match todos.iter_mut().find(|t| t.id == id) {
            Some(cached) => *cached = todo,
            None => todos.push(todo),
        });
        Ok(())
    }

    pub async fn create_todo(&self, payload: TodoPayload) -> AppResult<Todo> {
        if payload.title.trim().is_empty() {
            return Err(self.fail(AppError::Validation("title must not be empty".to_string())));
        }
        let created = self.api.create_todo(&payload).await.map_err(|e| self.fail(e))?;
        log::info!("[TodoStore] Created todo {}", created.id);
        self.state.todos().write().push(created.clone());
        self.activity.add_todo_created(&created.title);
        Ok(created)
    }

    pub async fn delete_todo(&self, id: TodoId) -> AppResult<()> {
        let already_running = !self.state.deleting().write().insert(id);
        if already_running {
            log::debug!("[TodoStore] Delete of {} already in flight", id);
            return Err(AppError::DeleteInFlight(id));
        }
        let title = self
            .find(id)
            .map(|t| t.title)
            .unwrap_or_else(|| format!("#{}", id));

        let result = self.api.delete_todo(id).await;
        self.state.deleting().write().remove(&id);

        match result {
            Ok(()) => {
                log::info!("[TodoStore] Deleted todo {}", id);
                self.state.todos().write().retain(|t| t.id != id);
                self.activity.add_todo_deleted(&title);
                Ok(())
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    /// Send the open edit session. Without a session nothing is sent.
    /// On success the session is closed unless a different todo was opened
    /// in the meantime.
    pub async fn update_todo(&self) -> AppResult<Todo> {
        let Some(session) = self.session_untracked() else {
            return Err(self.fail(AppError::NoSelection));
        };
        let id = session.todo_id();
        let payload = session.payload();

        let response = self
            .api
            .update_todo(id, &payload)
            .await
            .map_err(|e| self.fail(e))?;

        let mut merged = session.original().clone();
        self.state.todos().update(|todos| match todos.iter_mut().find(|t| t.id == id) {
            Some(cached) => {
                cached.apply(response);
                merged = cached.clone();
            }
            None => merged.apply(response),
        });
        self.activity.add_todo_updated(&merged.title);

        // Another todo may have been opened while the request was pending
        if self.session_untracked().map(|s| s.todo_id()) == Some(id) {
            *self.state.session().write() = None;
        }
        Ok(merged)
    }

    /// Flip the completion flag of a cached todo
    pub async fn toggle_finished(&self, id: TodoId) -> AppResult<()> {
        let Some(todo) = self.find(id) else {
            return Err(self.fail(AppError::Validation(format!("todo {} is not loaded", id))));
        };
        let mut payload = todo.to_payload();
        payload.finished = !todo.finished;

        let response = self
            .api
            .update_todo(id, &payload)
            .await
            .map_err(|e| self.fail(e))?;

        let mut finished = payload.finished;
        if let Some(cached) = self.state.todos().write().iter_mut().find(|t| t.id == id) {
            cached.apply(response);
            finished = cached.finished;
        }
        self.activity.add_todo_status_changed(&todo.title, finished);
        Ok(())
    }

    // ========================
    // Edit Session
    // ========================

    /// Open the edit form for a cached todo. Returns false if it is not loaded.
    pub fn begin_edit(&self, id: TodoId) -> bool {
        match self.find(id) {
            Some(todo) => {
                *self.state.session().write() = Some(EditSession::open(todo));
                true
            }
            None => false,
        }
    }

    pub fn cancel_edit(&self) {
        *self.state.session().write() = None;
    }

    /// Change the open session's scratch fields; no-op when none is open.
    pub fn edit(&self, f: impl FnOnce(&mut EditSession)) {
        if let Some(session) = self.state.session().write().as_mut() {
            f(session);
        }
    }
}
