//! Todo Edit Session
//!
//! Scratch state for the edit form. Unedited fields fall back to the
//! todo as it was when the session opened.

use chrono::{DateTime, Utc};

use crate::models::{Assignee, AssigneeId, Todo, TodoId, TodoPayload};

#[derive(Debug, Clone, PartialEq)]
pub struct EditSession {
    original: Todo,
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    /// Newly selected assignees; empty means "keep the current ones"
    pub selected_assignees: Vec<Assignee>,
}

impl EditSession {
    pub fn open(todo: Todo) -> Self {
        Self {
            original: todo,
            title: None,
            description: None,
            due_date: None,
            selected_assignees: Vec::new(),
        }
    }

    pub fn todo_id(&self) -> TodoId {
        self.original.id
    }

    pub fn original(&self) -> &Todo {
        &self.original
    }

    pub fn effective_title(&self) -> &str {
        non_empty(&self.title).unwrap_or(&self.original.title)
    }

    pub fn effective_description(&self) -> Option<&str> {
        non_empty(&self.description).or(self.original.description.as_deref())
    }

    pub fn effective_due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date.or(self.original.due_date)
    }

    pub fn effective_assignees(&self) -> &[Assignee] {
        if self.selected_assignees.is_empty() {
            &self.original.assignee_list
        } else {
            &self.selected_assignees
        }
    }

    pub fn is_assigned(&self, id: AssigneeId) -> bool {
        self.effective_assignees().iter().any(|a| a.id == id)
    }

    /// Flip one assignee. The first toggle starts from the todo's current
    /// assignees so unchecking one does not drop the rest.
    ///
    /// An empty selection always means "keep the current assignees", so a
    /// todo cannot lose its last assignee through this form: unchecking it
    /// empties the selection and the checkbox reads as checked again.
    pub fn toggle_assignee(&mut self, assignee: Assignee) {
        if self.selected_assignees.is_empty() {
            self.selected_assignees = self.original.assignee_list.clone();
        }
        if let Some(pos) = self.selected_assignees.iter().position(|a| a.id == assignee.id) {
            self.selected_assignees.remove(pos);
        } else {
            self.selected_assignees.push(assignee);
        }
    }

    /// PUT body: edited values where present, original values otherwise
    pub fn payload(&self) -> TodoPayload {
        TodoPayload {
            title: self.effective_title().to_string(),
            description: self.effective_description().map(str::to_string),
            finished: self.original.finished,
            due_date: self.effective_due_date(),
            assignee_id_list: self.effective_assignees().iter().map(|a| a.id).collect(),
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assignee(id: AssigneeId, prename: &str) -> Assignee {
        Assignee {
            id,
            name: "Muster".to_string(),
            prename: prename.to_string(),
            email: format!("{}@iste.uni-stuttgart.de", prename.to_lowercase()),
        }
    }

    fn todo() -> Todo {
        Todo {
            id: 7,
            title: "Bericht".to_string(),
            description: Some("Entwurf".to_string()),
            finished: true,
            assignee_list: vec![assignee(1, "Anna"), assignee(2, "Ben")],
            created_date: Utc::now(),
            due_date: None,
            finished_date: None,
            category: None,
        }
    }

    #[test]
    fn test_untouched_session_resends_original() {
        let session = EditSession::open(todo());
        assert_eq!(session.payload(), todo().to_payload());
    }

    #[test]
    fn test_empty_edits_fall_back() {
        let mut session = EditSession::open(todo());
        session.title = Some(String::new());
        session.description = Some(String::new());

        let payload = session.payload();
        assert_eq!(payload.title, "Bericht");
        assert_eq!(payload.description.as_deref(), Some("Entwurf"));
    }

    #[test]
    fn test_edits_win() {
        let mut session = EditSession::open(todo());
        let due = crate::time::parse_date_input("2025-01-31");
        session.title = Some("Bericht v2".to_string());
        session.due_date = due;
        session.selected_assignees = vec![assignee(3, "Cem")];

        let payload = session.payload();
        assert_eq!(payload.title, "Bericht v2");
        assert_eq!(payload.due_date, due);
        assert_eq!(payload.assignee_id_list, vec![3]);
        assert!(payload.finished);
    }

    #[test]
    fn test_toggle_starts_from_current_assignees() {
        let mut session = EditSession::open(todo());
        assert!(session.is_assigned(2));

        session.toggle_assignee(assignee(2, "Ben"));
        assert_eq!(session.payload().assignee_id_list, vec![1]);
        assert!(!session.is_assigned(2));

        session.toggle_assignee(assignee(4, "Dana"));
        assert_eq!(session.payload().assignee_id_list, vec![1, 4]);
    }

    #[test]
    fn test_unchecking_every_assignee_keeps_the_original_ones() {
        let mut session = EditSession::open(todo());

        session.toggle_assignee(assignee(1, "Anna"));
        session.toggle_assignee(assignee(2, "Ben"));

        assert!(session.selected_assignees.is_empty());
        assert!(session.is_assigned(1));
        assert!(session.is_assigned(2));
        assert_eq!(session.payload().assignee_id_list, vec![1, 2]);
    }
}
