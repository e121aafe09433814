//! Task record and the priority and status value types it carries.

use super::{DraftTask, ParsePriorityError, ParseTaskStatusError, TaskDomainError, TaskId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task priority.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Can wait.
    Low,
    /// Normal urgency.
    #[default]
    Medium,
    /// Needs attention first.
    High,
}

impl Priority {
    /// All priorities from highest to lowest rank.
    pub const ALL: [Self; 3] = [Self::High, Self::Medium, Self::Low];

    /// Returns the canonical wire label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Returns the capitalised label shown on task cards.
    #[must_use]
    pub const fn display_label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    /// Returns the sort rank: high(3) > medium(2) > low(1).
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
        }
    }
}

impl TryFrom<&str> for Priority {
    type Error = ParsePriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|priority| priority.as_str() == value)
            .ok_or_else(|| ParsePriorityError(value.to_owned()))
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Task status. Each status is one board column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TaskStatus {
    /// Not started.
    #[default]
    Todo,
    /// Being worked on.
    InProgress,
    /// Finished.
    Completed,
}

impl TaskStatus {
    /// All statuses in column order.
    pub const ALL: [Self; 3] = [Self::Todo, Self::InProgress, Self::Completed];

    /// Returns the canonical wire label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "inProgress",
            Self::Completed => "completed",
        }
    }

    /// Returns the heading of the column holding tasks in this status.
    #[must_use]
    pub const fn column_title(self) -> &'static str {
        match self {
            Self::Todo => "To Do",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }

    /// Returns `true` for [`TaskStatus::Completed`].
    #[must_use]
    pub const fn is_completed(self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == value)
            .ok_or_else(|| ParseTaskStatusError(value.to_owned()))
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A committed task on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    title: String,
    description: Option<String>,
    priority: Priority,
    status: TaskStatus,
    due_date: DateTime<Utc>,
    tags: Vec<String>,
}

/// Parameter object for building a task from already validated values.
///
/// Used for seed records, which start in arbitrary columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskData {
    /// Task identifier.
    pub id: TaskId,
    /// Task title.
    pub title: String,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Task priority.
    pub priority: Priority,
    /// Current column.
    pub status: TaskStatus,
    /// Due date.
    pub due_date: DateTime<Utc>,
    /// Tag labels.
    pub tags: Vec<String>,
}

impl Task {
    /// Commits a draft as a new `todo` task with a fresh identifier.
    ///
    /// Blank tags are dropped and a blank description is stored as absent.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the draft title is blank
    /// and [`TaskDomainError::InvalidDueDate`] when the due date text does
    /// not parse.
    pub fn from_draft(draft: &DraftTask) -> Result<Self, TaskDomainError> {
        if draft.title().trim().is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }
        let due_date = super::parse_due_date(draft.due_date())?;
        let description = Some(draft.description())
            .filter(|text| !text.trim().is_empty())
            .map(ToOwned::to_owned);

        Ok(Self {
            id: TaskId::new(),
            title: draft.title().to_owned(),
            description,
            priority: draft.priority(),
            status: TaskStatus::Todo,
            due_date,
            tags: draft.committed_tags(),
        })
    }

    /// Builds a task from already validated values.
    ///
    /// Blank tags are still dropped so committed tasks never carry them.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the title is blank.
    pub fn from_data(data: TaskData) -> Result<Self, TaskDomainError> {
        if data.title.trim().is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }
        Ok(Self {
            id: data.id,
            title: data.title,
            description: data.description,
            priority: data.priority,
            status: data.status,
            due_date: data.due_date,
            tags: data
                .tags
                .into_iter()
                .filter(|tag| !tag.trim().is_empty())
                .collect(),
        })
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the current status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the due date.
    #[must_use]
    pub const fn due_date(&self) -> DateTime<Utc> {
        self.due_date
    }

    /// Returns the tags in entry order.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Returns `true` when the due date has passed and the task is not
    /// completed.
    #[must_use]
    pub fn is_overdue_at(&self, now: DateTime<Utc>) -> bool {
        self.due_date < now && !self.status.is_completed()
    }

    /// Moves the task to `status`.
    ///
    /// Returns `false` and leaves the task untouched when it is already in
    /// that status.
    pub fn change_status(&mut self, status: TaskStatus) -> bool {
        if self.status == status {
            return false;
        }
        self.status = status;
        true
    }
}
