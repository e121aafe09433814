//! Repository port for the in-memory task store.

use crate::board::domain::{Task, TaskId, TaskStatus};
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task store contract.
///
/// Implementations keep tasks in insertion order. Mutations take `&mut self`:
/// the board has exactly one writer.
#[cfg_attr(test, mockall::automock)]
pub trait TaskRepository {
    /// Appends a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when the task ID already
    /// exists.
    fn insert(&mut self, task: Task) -> TaskRepositoryResult<()>;

    /// Removes the task with the given identifier.
    ///
    /// Returns the removed task, or `None` when no task matched.
    fn remove(&mut self, id: TaskId) -> Option<Task>;

    /// Sets the status of the task with the given identifier.
    ///
    /// Returns the updated task when the status changed, or `None` when the
    /// task does not exist or already has that status.
    fn set_status(&mut self, id: TaskId, status: TaskStatus) -> Option<Task>;

    /// Finds a task by identifier.
    fn find_by_id(&self, id: TaskId) -> Option<Task>;

    /// Returns every task in insertion order.
    fn list(&self) -> Vec<Task>;

    /// Returns the number of stored tasks.
    fn len(&self) -> usize;

    /// Returns `true` when the store holds no tasks.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskRepositoryError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),
}
