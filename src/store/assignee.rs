//! Assignee Store
//!
//! Cached assignees and a search-filtered view that recomputes whenever
//! the query or the cache changes.

use std::sync::Arc;

use leptos::prelude::*;

use super::{ActivityStore, ToastStore};
use crate::api::AssigneeApi;
use crate::error::{AppError, AppResult};
use crate::models::{Assignee, AssigneeId, AssigneePayload};

/// Case-insensitive substring match against "prename name".
/// An empty query keeps everything.
pub fn filter_assignees(assignees: &[Assignee], query: &str) -> Vec<Assignee> {
    let needle = query.to_lowercase();
    assignees
        .iter()
        .filter(|a| a.full_name().to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[derive(Clone)]
pub struct AssigneeStore {
    assignees: RwSignal<Vec<Assignee>>,
    query: RwSignal<String>,
    filtered: Memo<Vec<Assignee>>,
    api: Arc<dyn AssigneeApi>,
    activity: ActivityStore,
    toasts: ToastStore,
}

impl AssigneeStore {
    pub fn new(api: Arc<dyn AssigneeApi>, activity: ActivityStore, toasts: ToastStore) -> Self {
        let assignees = RwSignal::new(Vec::<Assignee>::new());
        let query = RwSignal::new(String::new());
        let filtered = Memo::new(move |_| {
            let query = query.get();
            assignees.with(|all| filter_assignees(all, &query))
        });
        Self {
            assignees,
            query,
            filtered,
            api,
            activity,
            toasts,
        }
    }

    /// All cached assignees (tracked)
    pub fn assignees(&self) -> Vec<Assignee> {
        self.assignees.get()
    }

    pub fn assignees_untracked(&self) -> Vec<Assignee> {
        self.assignees.get_untracked()
    }

    pub fn query(&self) -> String {
        self.query.get()
    }

    pub fn set_query(&self, query: impl Into<String>) {
        self.query.set(query.into());
    }

    /// Assignees matching the current query
    pub fn filtered(&self) -> Memo<Vec<Assignee>> {
        self.filtered
    }

    fn find(&self, id: AssigneeId) -> Option<Assignee> {
        self.assignees
            .with_untracked(|all| all.iter().find(|a| a.id == id).cloned())
    }

    fn fail(&self, err: AppError) -> AppError {
        self.toasts.error(&err.to_string());
        err
    }

    /// Replace the cache with the server's list. Failures only toast.
    pub async fn fetch_all_assignees(&self) {
        match self.api.list_assignees().await {
            Ok(assignees) => {
                log::info!("[AssigneeStore] Loaded {} assignees", assignees.len());
                self.assignees.set(assignees);
            }
            Err(err) => {
                log::warn!("[AssigneeStore] Loading assignees failed: {}", err);
                self.fail(err);
            }
        }
    }

    pub async fn create_assignee(&self, payload: AssigneePayload) -> AppResult<Assignee> {
        let created = self
            .api
            .create_assignee(&payload)
            .await
            .map_err(|e| self.fail(e))?;
        self.assignees.update(|all| all.push(created.clone()));
        self.activity.add_assignee_added(&created.prename, &created.name);
        Ok(created)
    }

    pub async fn update_assignee(&self, id: AssigneeId, payload: AssigneePayload) -> AppResult<Assignee> {
        let updated = self
            .api
            .update_assignee(id, &payload)
            .await
            .map_err(|e| self.fail(e))?;
        self.assignees.update(|all| {
            if let Some(cached) = all.iter_mut().find(|a| a.id == id) {
                *cached = updated.clone();
            }
        });
        self.activity.add_assignee_updated(&updated.prename, &updated.name);
        Ok(updated)
    }

    pub async fn delete_assignee(&self, id: AssigneeId) -> AppResult<()> {
        let known = self.find(id);
        self.api.delete_assignee(id).await.map_err(|e| self.fail(e))?;
        self.assignees.update(|all| all.retain(|a| a.id != id));
        match known {
            Some(assignee) => self.activity.add_assignee_deleted(&assignee.prename, &assignee.name),
            None => log::debug!("[AssigneeStore] Deleted uncached assignee {}", id),
        }
        Ok(())
    }
}
