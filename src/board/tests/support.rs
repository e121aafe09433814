//! Shared fixtures for task board unit tests.

use crate::board::domain::{Priority, Task, TaskData, TaskId, TaskStatus};
use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use mockable::Clock;
use rstest::fixture;

/// Clock frozen at a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Reference instant used across tests: 2024-03-10 12:00 UTC.
#[fixture]
pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0)
        .single()
        .expect("valid reference time")
}

#[fixture]
pub fn clock(now: DateTime<Utc>) -> FixedClock {
    FixedClock(now)
}

/// Builds a task directly, bypassing the draft form.
pub fn task(
    title: &str,
    priority: Priority,
    status: TaskStatus,
    due_date: DateTime<Utc>,
) -> Task {
    Task::from_data(TaskData {
        id: TaskId::new(),
        title: title.to_owned(),
        description: None,
        priority,
        status,
        due_date,
        tags: Vec::new(),
    })
    .expect("valid task data")
}

/// The two-task store from the board scenarios: A due in two days, high,
/// in progress; B due in five days, medium, to do.
pub fn scenario_tasks(now: DateTime<Utc>) -> (Task, Task) {
    (
        task(
            "Task A",
            Priority::High,
            TaskStatus::InProgress,
            now + Duration::days(2),
        ),
        task(
            "Task B",
            Priority::Medium,
            TaskStatus::Todo,
            now + Duration::days(5),
        ),
    )
}
