//! Assignee Endpoints

use async_trait::async_trait;

use super::HttpApi;
use crate::error::AppResult;
use crate::models::{Assignee, AssigneeId, AssigneePayload};

#[async_trait(?Send)]
pub trait AssigneeApi: Send + Sync {
    /// GET /assignees
    async fn list_assignees(&self) -> AppResult<Vec<Assignee>>;

    /// POST /assignees
    async fn create_assignee(&self, payload: &AssigneePayload) -> AppResult<Assignee>;

    /// PUT /assignees/{id}
    async fn update_assignee(&self, id: AssigneeId, payload: &AssigneePayload) -> AppResult<Assignee>;

    /// DELETE /assignees/{id}
    async fn delete_assignee(&self, id: AssigneeId) -> AppResult<()>;
}

#[async_trait(?Send)]
impl AssigneeApi for HttpApi {
    async fn list_assignees(&self) -> AppResult<Vec<Assignee>> {
        self.fetch_json(self.client.get(self.url("assignees"))).await
    }

    async fn create_assignee(&self, payload: &AssigneePayload) -> AppResult<Assignee> {
        self.fetch_json(self.client.post(self.url("assignees")).json(payload)).await
    }

    async fn update_assignee(&self, id: AssigneeId, payload: &AssigneePayload) -> AppResult<Assignee> {
        let url = self.url(&format!("assignees/{}", id));
        self.fetch_json(self.client.put(url).json(payload)).await
    }

    async fn delete_assignee(&self, id: AssigneeId) -> AppResult<()> {
        self.fetch_empty(self.client.delete(self.url(&format!("assignees/{}", id)))).await
    }
}
