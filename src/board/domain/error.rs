//! Error types for task board domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("Task title is required")]
    EmptyTitle,

    /// The due date text is neither a calendar date nor an RFC 3339 timestamp.
    #[error("Invalid due date: {0}")]
    InvalidDueDate(String),
}

/// Error returned while parsing a priority label.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown priority: {0}")]
pub struct ParsePriorityError(pub String);

/// Error returned while parsing a task status label.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
