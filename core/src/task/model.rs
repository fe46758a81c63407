//! Task model definitions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Error, Result};

/// A single to-do item
///
/// `id` and `created_date` are fixed at construction. `completed_date` is
/// only ever written by [`Task::set_complete`], so it is present exactly
/// when `is_complete` is true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "StoredTask")]
pub struct Task {
    id: Uuid,
    title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    note: Option<String>,
    due_date: DateTime<Utc>,
    is_complete: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    completed_date: Option<DateTime<Utc>>,
    created_date: DateTime<Utc>,
}

/// On-disk shape of a task, checked before it becomes a [`Task`]
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredTask {
    id: Uuid,
    title: String,
    #[serde(default)]
    note: Option<String>,
    due_date: DateTime<Utc>,
    is_complete: bool,
    #[serde(default)]
    completed_date: Option<DateTime<Utc>>,
    created_date: DateTime<Utc>,
}

impl TryFrom<StoredTask> for Task {
    type Error = Error;

    fn try_from(stored: StoredTask) -> Result<Self> {
        // Stored titles are taken as-is; older data may hold empty ones.
        if stored.is_complete != stored.completed_date.is_some() {
            return Err(Error::InvalidInput(format!(
                "Task {} has isComplete={} but completedDate is {}",
                stored.id,
                stored.is_complete,
                if stored.completed_date.is_some() {
                    "present"
                } else {
                    "absent"
                }
            )));
        }

        Ok(Self {
            id: stored.id,
            title: stored.title,
            note: stored.note,
            due_date: stored.due_date,
            is_complete: stored.is_complete,
            completed_date: stored.completed_date,
            created_date: stored.created_date,
        })
    }
}

fn validate_title(title: String) -> Result<String> {
    if title.trim().is_empty() {
        return Err(Error::InvalidInput(
            "Task title cannot be empty".to_string(),
        ));
    }
    Ok(title)
}

impl Task {
    /// Create a new task with the given title
    ///
    /// The due date defaults to the creation time.
    pub fn new(title: impl Into<String>) -> Result<Self> {
        Self::new_at(title, Utc::now())
    }

    /// Create a new task as if it had been created at `now`
    pub fn new_at(title: impl Into<String>, now: DateTime<Utc>) -> Result<Self> {
        let title = validate_title(title.into())?;
        Ok(Self {
            id: Uuid::new_v4(),
            title,
            note: None,
            due_date: now,
            is_complete: false,
            completed_date: None,
            created_date: now,
        })
    }

    /// Set the note
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Set the due date
    pub fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = due_date;
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    pub fn due_date(&self) -> DateTime<Utc> {
        self.due_date
    }

    pub fn is_complete(&self) -> bool {
        self.is_complete
    }

    pub fn completed_date(&self) -> Option<DateTime<Utc>> {
        self.completed_date
    }

    pub fn created_date(&self) -> DateTime<Utc> {
        self.created_date
    }

    /// Replace the title, rejecting empty text
    pub fn rename(&mut self, title: impl Into<String>) -> Result<()> {
        self.title = validate_title(title.into())?;
        Ok(())
    }

    pub fn set_note(&mut self, note: Option<String>) {
        self.note = note;
    }

    pub fn set_due_date(&mut self, due_date: DateTime<Utc>) {
        self.due_date = due_date;
    }

    /// Mark the task complete or incomplete
    ///
    /// Completing always stamps a fresh completion date, even when the
    /// task was already complete. Un-completing clears it.
    pub fn set_complete(&mut self, value: bool) {
        self.set_complete_at(value, Utc::now());
    }

    /// Same as [`Task::set_complete`] with an explicit clock reading
    pub fn set_complete_at(&mut self, value: bool, now: DateTime<Utc>) {
        self.is_complete = value;
        self.completed_date = value.then_some(now);
    }
}
