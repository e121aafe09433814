//! Serialisable presentation model of a board.
//!
//! A snapshot carries everything a renderer needs: the active selections,
//! the selectable options, the three columns with their cards, and the form
//! and drag state.

use super::{ColumnView, SortKey, TaskFilter};
use crate::board::domain::{DraftTask, Priority, Task, TaskId, TaskStatus};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Format of the short due-date label on cards, e.g. `Mar 07`.
pub const DUE_LABEL_FORMAT: &str = "%b %d";

/// Selectable option with its display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectOption {
    /// Wire value.
    pub value: &'static str,
    /// Display label.
    pub label: &'static str,
}

/// One task as rendered on a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskCard {
    /// Task identifier.
    pub id: TaskId,
    /// Title.
    pub title: String,
    /// Description, when present.
    pub description: Option<String>,
    /// Priority.
    pub priority: Priority,
    /// Capitalised priority label.
    pub priority_label: &'static str,
    /// Due date.
    pub due_date: DateTime<Utc>,
    /// Short due-date label.
    pub due_label: String,
    /// Whether the card is emphasised as overdue.
    pub overdue: bool,
    /// Tags shown on the card.
    pub visible_tags: Vec<String>,
    /// Number of tags collapsed into a `+N` badge.
    pub hidden_tag_count: usize,
}

impl TaskCard {
    /// Renders a task as a card at time `now`, showing at most `tag_limit`
    /// tags.
    #[must_use]
    pub fn new(task: &Task, now: DateTime<Utc>, tag_limit: usize) -> Self {
        let tags = task.tags();
        Self {
            id: task.id(),
            title: task.title().to_owned(),
            description: task.description().map(ToOwned::to_owned),
            priority: task.priority(),
            priority_label: task.priority().display_label(),
            due_date: task.due_date(),
            due_label: task.due_date().format(DUE_LABEL_FORMAT).to_string(),
            overdue: super::is_overdue(task, now),
            visible_tags: tags.iter().take(tag_limit).cloned().collect(),
            hidden_tag_count: tags.len().saturating_sub(tag_limit),
        }
    }
}

/// One status column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnSnapshot {
    /// Column status.
    pub id: TaskStatus,
    /// Column heading.
    pub title: &'static str,
    /// Number of cards in the column.
    pub count: usize,
    /// Cards in display order.
    pub cards: Vec<TaskCard>,
}

impl ColumnSnapshot {
    /// Renders a derived column.
    #[must_use]
    pub fn new(column: &ColumnView<'_>, now: DateTime<Utc>, tag_limit: usize) -> Self {
        Self {
            id: column.status,
            title: column.status.column_title(),
            count: column.tasks.len(),
            cards: column
                .tasks
                .iter()
                .map(|task| TaskCard::new(task, now, tag_limit))
                .collect(),
        }
    }
}

/// Complete presentation state of a board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardSnapshot {
    /// Active filter.
    pub filter: TaskFilter,
    /// Active sort key.
    pub sort: SortKey,
    /// Filter buttons.
    pub filter_options: Vec<SelectOption>,
    /// Sort selector entries.
    pub sort_options: Vec<SelectOption>,
    /// Columns in fixed order.
    pub columns: Vec<ColumnSnapshot>,
    /// Whether the new-task form is open.
    pub form_open: bool,
    /// Current draft.
    pub draft: DraftTask,
    /// Task currently being dragged.
    pub dragging: Option<TaskId>,
}

/// Filter buttons in display order.
#[must_use]
pub fn filter_options() -> Vec<SelectOption> {
    TaskFilter::OPTIONS
        .into_iter()
        .map(|filter| SelectOption {
            value: filter.as_str(),
            label: filter.display_label(),
        })
        .collect()
}

/// Sort selector entries in display order.
#[must_use]
pub fn sort_options() -> Vec<SelectOption> {
    SortKey::OPTIONS
        .into_iter()
        .map(|key| SelectOption {
            value: key.as_str(),
            label: key.display_label(),
        })
        .collect()
}
