//! Pure view derivation.
//!
//! The derived view is recomputed in full from the store contents on every
//! call. Nothing here mutates or caches state.

use super::{SortKey, TaskFilter};
use crate::board::domain::{Task, TaskStatus};
use chrono::{DateTime, Duration, Utc};

/// Inputs of a view derivation besides the tasks themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewQuery {
    /// Active filter.
    pub filter: TaskFilter,
    /// Active sort key.
    pub sort: SortKey,
    /// Reference time for the date-based filters.
    pub now: DateTime<Utc>,
    /// Width of the upcoming window.
    pub upcoming_window: Duration,
}

impl ViewQuery {
    /// Creates a query with the default three-day upcoming window.
    #[must_use]
    pub fn new(filter: TaskFilter, sort: SortKey, now: DateTime<Utc>) -> Self {
        Self {
            filter,
            sort,
            now,
            upcoming_window: Duration::days(3),
        }
    }

    /// Overrides the upcoming window.
    #[must_use]
    pub const fn with_upcoming_window(mut self, window: Duration) -> Self {
        self.upcoming_window = window;
        self
    }
}

/// Tasks of one status column, in derived order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnView<'a> {
    /// Status shared by every task in the column.
    pub status: TaskStatus,
    /// Tasks in display order.
    pub tasks: Vec<&'a Task>,
}

/// Filters and sorts `tasks` for display.
///
/// Sorting is stable, so tasks that compare equal keep store order.
#[must_use]
pub fn derive_view<'a>(tasks: &'a [Task], query: &ViewQuery) -> Vec<&'a Task> {
    let mut view: Vec<&Task> = tasks
        .iter()
        .filter(|task| {
            query
                .filter
                .matches(task, query.now, query.upcoming_window)
        })
        .collect();
    view.sort_by(|left, right| query.sort.compare(left, right));
    tracing::debug!(
        filter = %query.filter,
        sort = %query.sort,
        total = tasks.len(),
        shown = view.len(),
        "derived board view"
    );
    view
}

/// Splits a derived view into the three status columns, in column order.
#[must_use]
pub fn partition_columns<'a>(view: &[&'a Task]) -> Vec<ColumnView<'a>> {
    TaskStatus::ALL
        .into_iter()
        .map(|status| ColumnView {
            status,
            tasks: view
                .iter()
                .copied()
                .filter(|task| task.status() == status)
                .collect(),
        })
        .collect()
}

/// Returns `true` when the task should be shown as overdue at `now`,
/// whatever filter is active.
#[must_use]
pub fn is_overdue(task: &Task, now: DateTime<Utc>) -> bool {
    task.is_overdue_at(now)
}
