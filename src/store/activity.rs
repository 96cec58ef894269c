//! Activity Feed
//!
//! Recent user actions, newest first. Labels are computed once when an
//! entry is recorded and never refreshed.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use leptos::prelude::*;

use crate::icon::Icon;
use crate::time::format_relative;

/// Maximum number of entries kept in the feed
pub const ACTIVITY_CAPACITY: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    Created,
    Completed,
    Reopened,
    TeamAdded,
    Updated,
    Deleted,
    TeamUpdated,
    TeamDeleted,
}

impl ActivityKind {
    /// Stable tag, also used as CSS modifier
    pub fn tag(self) -> &'static str {
        match self {
            ActivityKind::Created => "neu",
            ActivityKind::Completed => "abgeschlossen",
            ActivityKind::Reopened => "wieder-offen",
            ActivityKind::TeamAdded => "team",
            ActivityKind::Updated => "update",
            ActivityKind::Deleted => "delete",
            ActivityKind::TeamUpdated => "team-update",
            ActivityKind::TeamDeleted => "team-delete",
        }
    }
}

/// What happened, before it gets a timestamp
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityEntry {
    pub kind: ActivityKind,
    pub text: String,
    pub icon: Icon,
}

impl ActivityEntry {
    pub fn todo_created(title: &str) -> Self {
        Self {
            kind: ActivityKind::Created,
            text: format!("Neues Todo \"{}\" wurde erstellt", title),
            icon: Icon::Plus,
        }
    }

    pub fn todo_updated(title: &str) -> Self {
        Self {
            kind: ActivityKind::Updated,
            text: format!("Todo \"{}\" wurde aktualisiert", title),
            icon: Icon::Pencil,
        }
    }

    pub fn todo_deleted(title: &str) -> Self {
        Self {
            kind: ActivityKind::Deleted,
            text: format!("Das Todo \"{}\" wurde gelöscht", title),
            icon: Icon::Trash,
        }
    }

    pub fn todo_status_changed(title: &str, completed: bool) -> Self {
        if completed {
            Self {
                kind: ActivityKind::Completed,
                text: format!("Todo \"{}\" wurde abgeschlossen", title),
                icon: Icon::Check,
            }
        } else {
            Self {
                kind: ActivityKind::Reopened,
                text: format!("Todo \"{}\" wurde wieder geöffnet", title),
                icon: Icon::Plus,
            }
        }
    }

    pub fn assignee_added(prename: &str, name: &str) -> Self {
        Self {
            kind: ActivityKind::TeamAdded,
            text: format!("Neuer Assignee \"{} {}\" wurde hinzugefügt", prename, name),
            icon: Icon::Users,
        }
    }

    pub fn assignee_updated(prename: &str, name: &str) -> Self {
        Self {
            kind: ActivityKind::TeamUpdated,
            text: format!("Assignee \"{} {}\" wurde aktualisiert", prename, name),
            icon: Icon::Pencil,
        }
    }

    pub fn assignee_deleted(prename: &str, name: &str) -> Self {
        Self {
            kind: ActivityKind::TeamDeleted,
            text: format!("Assignee \"{} {}\" wurde entfernt", prename, name),
            icon: Icon::Trash,
        }
    }
}

/// A recorded entry with its frozen relative-time label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub kind: ActivityKind,
    pub text: String,
    pub time_label: String,
    pub icon: Icon,
    pub recorded_at: DateTime<Utc>,
}

/// Bounded deque, newest at the front
#[derive(Debug, Clone)]
pub struct ActivityLog {
    entries: VecDeque<Activity>,
    capacity: usize,
}

impl Default for ActivityLog {
    fn default() -> Self {
        Self::with_capacity(ACTIVITY_CAPACITY)
    }
}

impl ActivityLog {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Record `entry` as having happened at `at`, labelled relative to `now`.
    pub fn record(&mut self, entry: ActivityEntry, at: DateTime<Utc>, now: DateTime<Utc>) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_back();
        }
        self.entries.push_front(Activity {
            kind: entry.kind,
            text: entry.text,
            time_label: format_relative(at, now),
            icon: entry.icon,
            recorded_at: at,
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Activity> {
        self.entries.iter()
    }
}

/// Activity feed shared via context
#[derive(Clone, Copy)]
pub struct ActivityStore {
    log: RwSignal<ActivityLog>,
}

impl Default for ActivityStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ActivityStore {
    pub fn new() -> Self {
        Self {
            log: RwSignal::new(ActivityLog::default()),
        }
    }

    pub fn add_activity(&self, entry: ActivityEntry) {
        let now = Utc::now();
        log::debug!("[Activity] {}", entry.text);
        self.log.update(|log| log.record(entry, now, now));
    }

    pub fn add_todo_created(&self, title: &str) {
        self.add_activity(ActivityEntry::todo_created(title));
    }

    pub fn add_todo_updated(&self, title: &str) {
        self.add_activity(ActivityEntry::todo_updated(title));
    }

    pub fn add_todo_deleted(&self, title: &str) {
        self.add_activity(ActivityEntry::todo_deleted(title));
    }

    pub fn add_todo_status_changed(&self, title: &str, completed: bool) {
        self.add_activity(ActivityEntry::todo_status_changed(title, completed));
    }

    pub fn add_assignee_added(&self, prename: &str, name: &str) {
        self.add_activity(ActivityEntry::assignee_added(prename, name));
    }

    pub fn add_assignee_updated(&self, prename: &str, name: &str) {
        self.add_activity(ActivityEntry::assignee_updated(prename, name));
    }

    pub fn add_assignee_deleted(&self, prename: &str, name: &str) {
        self.add_activity(ActivityEntry::assignee_deleted(prename, name));
    }

    /// Entries, newest first (tracked)
    pub fn entries(&self) -> Vec<Activity> {
        self.log.with(|log| log.iter().cloned().collect())
    }

    pub fn entries_untracked(&self) -> Vec<Activity> {
        self.log.with_untracked(|log| log.iter().cloned().collect())
    }

    pub fn is_empty(&self) -> bool {
        self.log.with(ActivityLog::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_log_keeps_newest_ten() {
        let mut log = ActivityLog::default();
        let now = Utc::now();
        for i in 1..=11 {
            log.record(ActivityEntry::todo_created(&format!("T{}", i)), now, now);
        }

        assert_eq!(log.len(), ACTIVITY_CAPACITY);
        let texts: Vec<_> = log.iter().map(|a| a.text.as_str()).collect();
        assert_eq!(texts[0], "Neues Todo \"T11\" wurde erstellt");
        assert_eq!(texts[9], "Neues Todo \"T2\" wurde erstellt");
        assert!(!texts.contains(&"Neues Todo \"T1\" wurde erstellt"));
    }

    #[test]
    fn test_zero_capacity_stays_empty() {
        let mut log = ActivityLog::with_capacity(0);
        let now = Utc::now();
        log.record(ActivityEntry::todo_deleted("x"), now, now);
        assert!(log.is_empty());
    }

    #[test]
    fn test_label_is_frozen_at_record_time() {
        let mut log = ActivityLog::default();
        let now = Utc::now();
        log.record(ActivityEntry::todo_updated("A"), now - Duration::minutes(5), now);
        log.record(ActivityEntry::todo_updated("B"), now, now);

        let labels: Vec<_> = log.iter().map(|a| a.time_label.clone()).collect();
        assert_eq!(labels, vec!["Gerade eben".to_string(), "Vor 5 Minuten".to_string()]);
    }

    #[test]
    fn test_entry_wording() {
        assert_eq!(ActivityEntry::todo_deleted("A").text, "Das Todo \"A\" wurde gelöscht");
        assert_eq!(ActivityEntry::todo_deleted("A").kind.tag(), "delete");

        let done = ActivityEntry::todo_status_changed("A", true);
        assert_eq!(done.kind, ActivityKind::Completed);
        assert_eq!(done.icon, Icon::Check);
        let reopened = ActivityEntry::todo_status_changed("A", false);
        assert_eq!(reopened.kind, ActivityKind::Reopened);
        assert_eq!(reopened.text, "Todo \"A\" wurde wieder geöffnet");

        assert_eq!(
            ActivityEntry::assignee_added("Erika", "Muster").text,
            "Neuer Assignee \"Erika Muster\" wurde hinzugefügt"
        );
        assert_eq!(ActivityEntry::assignee_deleted("Erika", "Muster").kind.tag(), "team-delete");
    }

    #[test]
    fn test_store_prepends_and_caps() {
        let owner = Owner::new();
        owner.set();
        let activity = ActivityStore::new();

        for i in 0..12 {
            activity.add_todo_updated(&format!("#{}", i));
        }
        activity.add_assignee_updated("Jane", "Doe");

        let entries = activity.entries_untracked();
        assert_eq!(entries.len(), ACTIVITY_CAPACITY);
        assert_eq!(entries[0].kind, ActivityKind::TeamUpdated);
        assert_eq!(entries[0].time_label, "Gerade eben");
        assert_eq!(entries[1].text, "Todo \"#11\" wurde aktualisiert");
    }
}
