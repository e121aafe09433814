//! Sample tasks a new board starts with.

use super::domain::{Priority, Task, TaskData, TaskDomainError, TaskId, TaskStatus};
use chrono::{DateTime, Duration, Utc};

/// Returns the two sample tasks, due relative to `now`.
///
/// # Errors
///
/// Returns [`TaskDomainError`] if a sample record fails validation.
pub fn sample_tasks(now: DateTime<Utc>) -> Result<Vec<Task>, TaskDomainError> {
    let samples = [
        TaskData {
            id: TaskId::new(),
            title: "Design new landing page".to_owned(),
            description: Some(
                "Create a modern, responsive landing page for the product launch".to_owned(),
            ),
            priority: Priority::High,
            status: TaskStatus::InProgress,
            due_date: now + Duration::days(2),
            tags: vec!["design".to_owned(), "urgent".to_owned()],
        },
        TaskData {
            id: TaskId::new(),
            title: "Review user feedback".to_owned(),
            description: Some("Analyze customer feedback from the last quarter".to_owned()),
            priority: Priority::Medium,
            status: TaskStatus::Todo,
            due_date: now + Duration::days(5),
            tags: vec!["research".to_owned(), "analysis".to_owned()],
        },
    ];
    samples.into_iter().map(Task::from_data).collect()
}
