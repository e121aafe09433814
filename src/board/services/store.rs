//! Task store service: the mutations of the board and their notifications.

use crate::board::{
    domain::{DraftTask, Task, TaskDomainError, TaskId, TaskStatus},
    ports::{Notification, Notifier, TaskRepository, TaskRepositoryError},
};
use thiserror::Error;

/// Confirmation shown after a task is created.
pub const TASK_CREATED: &str = "Task created successfully!";
/// Confirmation shown after a task is deleted.
pub const TASK_DELETED: &str = "Task deleted successfully!";
/// Confirmation shown after a task changes column.
pub const TASK_STATUS_UPDATED: &str = "Task status updated!";

/// Service-level errors for task store operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskStoreError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task store service operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Applies store mutations and reports each outcome to the user.
///
/// Successful mutations send one success notification. A rejected create
/// sends one error notification and leaves the store untouched. Deleting or
/// moving a task that does not exist, or moving a task to the column it is
/// already in, changes nothing and sends nothing.
#[derive(Debug, Clone)]
pub struct TaskStoreService<R, N>
where
    R: TaskRepository,
    N: Notifier,
{
    repository: R,
    notifier: N,
}

impl<R, N> TaskStoreService<R, N>
where
    R: TaskRepository,
    N: Notifier,
{
    /// Creates a new task store service.
    #[must_use]
    pub const fn new(repository: R, notifier: N) -> Self {
        Self {
            repository,
            notifier,
        }
    }

    /// Inserts tasks without notifying, e.g. the sample tasks of a new
    /// board.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Repository`] when a task ID is already
    /// present.
    pub fn load(&mut self, tasks: impl IntoIterator<Item = Task>) -> TaskStoreResult<()> {
        for task in tasks {
            self.repository.insert(task)?;
        }
        Ok(())
    }

    /// Commits a draft as a new `todo` task appended to the store.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Domain`] when the draft title is blank or
    /// its due date does not parse, and [`TaskStoreError::Repository`] when
    /// the store rejects the task. The error is also sent to the notifier.
    pub fn create(&mut self, draft: &DraftTask) -> TaskStoreResult<Task> {
        match self.try_create(draft) {
            Ok(task) => {
                tracing::info!(task_id = %task.id(), priority = %task.priority(), "task created");
                self.notifier.notify(Notification::success(TASK_CREATED));
                Ok(task)
            }
            Err(err) => {
                tracing::debug!(error = %err, "task creation rejected");
                self.notifier.notify(Notification::error(err.to_string()));
                Err(err)
            }
        }
    }

    fn try_create(&mut self, draft: &DraftTask) -> TaskStoreResult<Task> {
        let task = Task::from_draft(draft)?;
        self.repository.insert(task.clone())?;
        Ok(task)
    }

    /// Removes a task.
    ///
    /// Returns the removed task, or `None` when no task has that ID.
    pub fn delete(&mut self, id: TaskId) -> Option<Task> {
        let removed = self.repository.remove(id)?;
        tracing::info!(task_id = %id, "task deleted");
        self.notifier.notify(Notification::success(TASK_DELETED));
        Some(removed)
    }

    /// Moves a task to another column.
    ///
    /// Returns the updated task, or `None` when the task does not exist or
    /// is already in `status`.
    pub fn change_status(&mut self, id: TaskId, status: TaskStatus) -> Option<Task> {
        let updated = self.repository.set_status(id, status)?;
        tracing::info!(task_id = %id, status = %status, "task status changed");
        self.notifier
            .notify(Notification::success(TASK_STATUS_UPDATED));
        Some(updated)
    }

    /// Finds a task by identifier.
    #[must_use]
    pub fn find_by_id(&self, id: TaskId) -> Option<Task> {
        self.repository.find_by_id(id)
    }

    /// Returns every task in insertion order.
    #[must_use]
    pub fn tasks(&self) -> Vec<Task> {
        self.repository.list()
    }

    /// Returns the number of stored tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.repository.len()
    }

    /// Returns `true` when the store holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.repository.is_empty()
    }

    /// Returns the notifier.
    #[must_use]
    pub const fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Returns the notifier mutably, e.g. to drain pending messages.
    pub const fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }
}
