//! Task filters.

use super::ViewError;
use crate::board::domain::{Priority, Task, TaskStatus};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Field value a filter compares against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldFilter {
    /// A priority label.
    Priority(Priority),
    /// A status label.
    Status(TaskStatus),
}

impl FieldFilter {
    /// Returns the wire label being matched.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Priority(priority) => priority.as_str(),
            Self::Status(status) => status.as_str(),
        }
    }

    /// Returns `true` when either the task's priority label or its status
    /// label equals this filter's label.
    ///
    /// A single label is matched against both fields. Priority and status
    /// labels are disjoint today, so the result is the same as matching the
    /// field the label came from.
    #[must_use]
    pub fn matches(self, task: &Task) -> bool {
        let label = self.label();
        task.priority().as_str() == label || task.status().as_str() == label
    }
}

/// The single active filter of a board view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TaskFilter {
    /// Every task.
    #[default]
    All,
    /// Tasks past their due date that are not completed.
    Overdue,
    /// Tasks due after now and within the upcoming window.
    Upcoming,
    /// Tasks whose priority or status carries the label.
    Field(FieldFilter),
}

impl TaskFilter {
    /// Filters offered to the user, in display order.
    pub const OPTIONS: [Self; 6] = [
        Self::All,
        Self::Overdue,
        Self::Upcoming,
        Self::Field(FieldFilter::Priority(Priority::High)),
        Self::Field(FieldFilter::Priority(Priority::Medium)),
        Self::Field(FieldFilter::Priority(Priority::Low)),
    ];

    /// Shorthand for a priority filter.
    #[must_use]
    pub const fn priority(priority: Priority) -> Self {
        Self::Field(FieldFilter::Priority(priority))
    }

    /// Shorthand for a status filter.
    #[must_use]
    pub const fn status(status: TaskStatus) -> Self {
        Self::Field(FieldFilter::Status(status))
    }

    /// Returns the wire label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Overdue => "overdue",
            Self::Upcoming => "upcoming",
            Self::Field(field) => field.label(),
        }
    }

    /// Returns the label shown on the filter button.
    #[must_use]
    pub const fn display_label(self) -> &'static str {
        match self {
            Self::All => "All Tasks",
            Self::Overdue => "Overdue",
            Self::Upcoming => "Upcoming",
            Self::Field(FieldFilter::Priority(priority)) => priority.display_label(),
            Self::Field(FieldFilter::Status(status)) => status.column_title(),
        }
    }

    /// Returns `true` when `task` passes this filter at time `now`.
    #[must_use]
    pub fn matches(
        self,
        task: &Task,
        now: DateTime<Utc>,
        upcoming_window: Duration,
    ) -> bool {
        match self {
            Self::All => true,
            Self::Overdue => task.is_overdue_at(now),
            Self::Upcoming => task.due_date() > now && task.due_date() < now + upcoming_window,
            Self::Field(field) => field.matches(task),
        }
    }
}

impl TryFrom<&str> for TaskFilter {
    type Error = ViewError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let keyword = [Self::All, Self::Overdue, Self::Upcoming]
            .into_iter()
            .find(|filter| filter.as_str() == value);
        if let Some(filter) = keyword {
            return Ok(filter);
        }
        if let Ok(priority) = Priority::try_from(value) {
            return Ok(Self::priority(priority));
        }
        TaskStatus::try_from(value)
            .map(Self::status)
            .map_err(|_| ViewError::UnknownFilter(value.to_owned()))
    }
}

impl TryFrom<String> for TaskFilter {
    type Error = ViewError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

impl From<TaskFilter> for String {
    fn from(filter: TaskFilter) -> Self {
        filter.as_str().to_owned()
    }
}

impl fmt::Display for TaskFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
