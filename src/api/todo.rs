//! Todo Endpoints

use async_trait::async_trait;

use super::HttpApi;
use crate::error::AppResult;
use crate::models::{Todo, TodoId, TodoPayload, TodoUpdate};

#[async_trait(?Send)]
pub trait TodoApi: Send + Sync {
    /// GET /todos
    async fn list_todos(&self) -> AppResult<Vec<Todo>>;

    /// GET /todos/{id}
    async fn get_todo(&self, id: TodoId) -> AppResult<Todo>;

    /// POST /todos
    async fn create_todo(&self, payload: &TodoPayload) -> AppResult<Todo>;

    /// PUT /todos/{id}
    async fn update_todo(&self, id: TodoId, payload: &TodoPayload) -> AppResult<TodoUpdate>;

    /// DELETE /todos/{id}
    async fn delete_todo(&self, id: TodoId) -> AppResult<()>;
}

#[async_trait(?Send)]
impl TodoApi for HttpApi {
    async fn list_todos(&self) -> AppResult<Vec<Todo>> {
        self.fetch_json(self.client.get(self.url("todos"))).await
    }

    async fn get_todo(&self, id: TodoId) -> AppResult<Todo> {
        self.fetch_json(self.client.get(self.url(&format!("todos/{}", id)))).await
    }

    async fn create_todo(&self, payload: &TodoPayload) -> AppResult<Todo> {
        self.fetch_json(self.client.post(self.url("todos")).json(payload)).await
    }

    async fn update_todo(&self, id: TodoId, payload: &TodoPayload) -> AppResult<TodoUpdate> {
        self.fetch_json(self.client.put(self.url(&format!("todos/{}", id))).json(payload))
            .await
    }

    async fn delete_todo(&self, id: TodoId) -> AppResult<()> {
        self.fetch_empty(self.client.delete(self.url(&format!("todos/{}", id)))).await
    }
}
