//! Application services for the task board.

mod board;
mod store;

pub use board::{BoardEvent, TaskBoard};
pub use store::{
    TASK_CREATED, TASK_DELETED, TASK_STATUS_UPDATED, TaskStoreError, TaskStoreResult,
    TaskStoreService,
};
