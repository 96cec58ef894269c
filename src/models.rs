//! Frontend Models
//!
//! Data structures matching the REST API's JSON.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

pub type TodoId = u64;
pub type AssigneeId = u64;

/// Assignee (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignee {
    pub id: AssigneeId,
    pub name: String,
    #[serde(alias = "preName")]
    pub prename: String,
    pub email: String,
}

impl Assignee {
    /// "Prename Name", the string search and activity texts use
    pub fn full_name(&self) -> String {
        format!("{} {}", self.prename, self.name)
    }
}

/// Todo (matches backend GetDTO)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub finished: bool,
    #[serde(default, alias = "assigneeIdList")]
    pub assignee_list: Vec<Assignee>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_date: DateTime<Utc>,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub finished_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub category: Option<String>,
}

impl Todo {
    pub fn assignee_ids(&self) -> Vec<AssigneeId> {
        self.assignee_list.iter().map(|a| a.id).collect()
    }

    /// Overwrite every field the server sent back, keep the rest.
    pub fn apply(&mut self, update: TodoUpdate) {
        if let Some(id) = update.id {
            self.id = id;
        }
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(finished) = update.finished {
            self.finished = finished;
        }
        if let Some(assignees) = update.assignee_list {
            self.assignee_list = assignees;
        }
        if let Some(created) = update.created_date {
            self.created_date = created;
        }
        if let Some(due) = update.due_date {
            self.due_date = due;
        }
        if let Some(finished_date) = update.finished_date {
            self.finished_date = finished_date;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
    }

    /// Body that re-sends this todo unchanged
    pub fn to_payload(&self) -> TodoPayload {
        TodoPayload {
            title: self.title.clone(),
            description: self.description.clone(),
            finished: self.finished,
            due_date: self.due_date,
            assignee_id_list: self.assignee_ids(),
        }
    }
}

/// PUT /todos/{id} response. `None` means the field was absent;
/// nullable fields use a nested `Option` so an explicit `null` still clears.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoUpdate {
    pub id: Option<TodoId>,
    pub title: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub description: Option<Option<String>>,
    pub finished: Option<bool>,
    #[serde(default, alias = "assigneeIdList")]
    pub assignee_list: Option<Vec<Assignee>>,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub created_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "present_millis")]
    pub due_date: Option<Option<DateTime<Utc>>>,
    #[serde(default, deserialize_with = "present_millis")]
    pub finished_date: Option<Option<DateTime<Utc>>>,
    #[serde(default, deserialize_with = "present")]
    pub category: Option<Option<String>>,
}

/// Request body for POST /todos and PUT /todos/{id}
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoPayload {
    pub title: String,
    pub description: Option<String>,
    pub finished: bool,
    #[serde(with = "chrono::serde::ts_milliseconds_option")]
    pub due_date: Option<DateTime<Utc>>,
    pub assignee_id_list: Vec<AssigneeId>,
}

/// Request body for POST /assignees and PUT /assignees/{id}
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssigneePayload {
    pub prename: String,
    pub name: String,
    pub email: String,
}

impl From<&Assignee> for AssigneePayload {
    fn from(assignee: &Assignee) -> Self {
        Self {
            prename: assignee.prename.clone(),
            name: assignee.name.clone(),
            email: assignee.email.clone(),
        }
    }
}

fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

fn present_millis<'de, D>(deserializer: D) -> Result<Option<Option<DateTime<Utc>>>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match Option::<i64>::deserialize(deserializer)? {
        None => Ok(Some(None)),
        Some(millis) => DateTime::<Utc>::from_timestamp_millis(millis)
            .map(|dt| Some(Some(dt)))
            .ok_or_else(|| D::Error::custom(format!("timestamp out of range: {}", millis))),
    }
}
