//! In-memory task repository.

use crate::board::{
    domain::{Task, TaskId, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Insertion-ordered in-memory task repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    tasks: Vec<Task>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub const fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id() == id)
    }
}

impl TaskRepository for InMemoryTaskRepository {
    fn insert(&mut self, task: Task) -> TaskRepositoryResult<()> {
        if self.position(task.id()).is_some() {
            return Err(TaskRepositoryError::DuplicateTask(task.id()));
        }
        self.tasks.push(task);
        Ok(())
    }

    fn remove(&mut self, id: TaskId) -> Option<Task> {
        self.position(id).map(|index| self.tasks.remove(index))
    }

    fn set_status(&mut self, id: TaskId, status: TaskStatus) -> Option<Task> {
        let task = self.tasks.iter_mut().find(|task| task.id() == id)?;
        task.change_status(status).then(|| task.clone())
    }

    fn find_by_id(&self, id: TaskId) -> Option<Task> {
        self.tasks.iter().find(|task| task.id() == id).cloned()
    }

    fn list(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    fn len(&self) -> usize {
        self.tasks.len()
    }
}
