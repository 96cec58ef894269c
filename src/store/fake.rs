//! In-memory API used by the store tests.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use crate::api::{AssigneeApi, TodoApi};
use crate::error::{AppError, AppResult};
use crate::models::{Assignee, AssigneeId, AssigneePayload, Todo, TodoId, TodoPayload, TodoUpdate};

#[derive(Default)]
struct FakeState {
    todos: Vec<Todo>,
    assignees: Vec<Assignee>,
    calls: Vec<String>,
    payloads: Vec<TodoPayload>,
    failure: Option<AppError>,
    update_response: Option<TodoUpdate>,
    next_id: u64,
}

#[derive(Default)]
pub struct FakeApi {
    state: Mutex<FakeState>,
    /// Make delete yield once so two deletes can overlap
    yield_on_delete: bool,
    /// Make update yield once so the UI can act while a save is pending
    yield_on_update: bool,
}

impl FakeApi {
    pub fn with_todos(todos: Vec<Todo>) -> Self {
        let api = Self::default();
        api.state.lock().unwrap().todos = todos;
        api
    }

    pub fn with_assignees(self, assignees: Vec<Assignee>) -> Self {
        self.state.lock().unwrap().assignees = assignees;
        self
    }

    pub fn yielding_deletes(mut self) -> Self {
        self.yield_on_delete = true;
        self
    }

    pub fn yielding_updates(mut self) -> Self {
        self.yield_on_update = true;
        self
    }

    /// Every following call fails with `err` until `recover`
    pub fn fail_with(&self, err: AppError) {
        self.state.lock().unwrap().failure = Some(err);
    }

    pub fn recover(&self) {
        self.state.lock().unwrap().failure = None;
    }

    /// Answer the next PUT /todos with exactly this body. The stored todo
    /// is still updated from the payload.
    pub fn respond_to_update(&self, update: TodoUpdate) {
        self.state.lock().unwrap().update_response = Some(update);
    }

    pub fn calls(&self) -> Vec<String> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn last_payload(&self) -> Option<TodoPayload> {
        self.state.lock().unwrap().payloads.last().cloned()
    }

    fn begin(&self, call: String) -> AppResult<()> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(call);
        match state.failure.clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn resolve_assignees(state: &FakeState, ids: &[AssigneeId]) -> Vec<Assignee> {
        ids.iter()
            .filter_map(|id| state.assignees.iter().find(|a| a.id == *id).cloned())
            .collect()
    }
}

#[async_trait(?Send)]
impl TodoApi for FakeApi {
    async fn list_todos(&self) -> AppResult<Vec<Todo>> {
        self.begin("GET /todos".to_string())?;
        Ok(self.state.lock().unwrap().todos.clone())
    }

    async fn get_todo(&self, id: TodoId) -> AppResult<Todo> {
        self.begin(format!("GET /todos/{}", id))?;
        let state = self.state.lock().unwrap();
        state.todos.iter().find(|t| t.id == id).cloned().ok_or(AppError::Status {
            status: 404,
            message: format!("ToDo with ID {} not found", id),
        })
    }

    async fn create_todo(&self, payload: &TodoPayload) -> AppResult<Todo> {
        self.begin("POST /todos".to_string())?;
        let mut state = self.state.lock().unwrap();
        state.payloads.push(payload.clone());
        state.next_id += 1;
        let todo = Todo {
            id: 100 + state.next_id,
            title: payload.title.clone(),
            description: payload.description.clone(),
            finished: payload.finished,
            assignee_list: Self::resolve_assignees(&state, &payload.assignee_id_list),
            created_date: Utc::now(),
            due_date: payload.due_date,
            finished_date: None,
            category: None,
        };
        state.todos.push(todo.clone());
        Ok(todo)
    }

    async fn update_todo(&self, id: TodoId, payload: &TodoPayload) -> AppResult<TodoUpdate> {
        self.begin(format!("PUT /todos/{}", id))?;
        if self.yield_on_update {
            tokio::task::yield_now().await;
        }
        let mut state = self.state.lock().unwrap();
        state.payloads.push(payload.clone());
        let canned = state.update_response.take();
        let assignees = Self::resolve_assignees(&state, &payload.assignee_id_list);
        let Some(todo) = state.todos.iter_mut().find(|t| t.id == id) else {
            return Err(AppError::Status {
                status: 404,
                message: format!("ToDo with ID {} not found", id),
            });
        };
        todo.title = payload.title.clone();
        todo.description = payload.description.clone();
        todo.finished = payload.finished;
        todo.assignee_list = assignees;
        if payload.due_date.is_some() {
            todo.due_date = payload.due_date;
        }
        todo.finished_date = payload.finished.then(Utc::now);
        if let Some(response) = canned {
            return Ok(response);
        }
        Ok(TodoUpdate {
            id: Some(todo.id),
            title: Some(todo.title.clone()),
            description: Some(todo.description.clone()),
            finished: Some(todo.finished),
            assignee_list: Some(todo.assignee_list.clone()),
            created_date: Some(todo.created_date),
            due_date: Some(todo.due_date),
            finished_date: Some(todo.finished_date),
            category: Some(todo.category.clone()),
        })
    }

    async fn delete_todo(&self, id: TodoId) -> AppResult<()> {
        self.begin(format!("DELETE /todos/{}", id))?;
        if self.yield_on_delete {
            tokio::task::yield_now().await;
        }
        let mut state = self.state.lock().unwrap();
        let before = state.todos.len();
        state.todos.retain(|t| t.id != id);
        if state.todos.len() == before {
            return Err(AppError::Status {
                status: 404,
                message: format!("ToDo with ID {} not found", id),
            });
        }
        Ok(())
    }
}

#[async_trait(?Send)]
impl AssigneeApi for FakeApi {
    async fn list_assignees(&self) -> AppResult<Vec<Assignee>> {
        self.begin("GET /assignees".to_string())?;
        Ok(self.state.lock().unwrap().assignees.clone())
    }

    async fn create_assignee(&self, payload: &AssigneePayload) -> AppResult<Assignee> {
        self.begin("POST /assignees".to_string())?;
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let assignee = Assignee {
            id: 500 + state.next_id,
            name: payload.name.clone(),
            prename: payload.prename.clone(),
            email: payload.email.clone(),
        };
        state.assignees.push(assignee.clone());
        Ok(assignee)
    }

    async fn update_assignee(&self, id: AssigneeId, payload: &AssigneePayload) -> AppResult<Assignee> {
        self.begin(format!("PUT /assignees/{}", id))?;
        let mut state = self.state.lock().unwrap();
        let assignee = state
            .assignees
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(AppError::Status {
                status: 404,
                message: "Duplicate Assignee ID: ".to_string(),
            })?;
        assignee.prename = payload.prename.clone();
        assignee.name = payload.name.clone();
        assignee.email = payload.email.clone();
        Ok(assignee.clone())
    }

    async fn delete_assignee(&self, id: AssigneeId) -> AppResult<()> {
        self.begin(format!("DELETE /assignees/{}", id))?;
        self.state.lock().unwrap().assignees.retain(|a| a.id != id);
        Ok(())
    }
}
