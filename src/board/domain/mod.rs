//! Domain model for the task board.
//!
//! Tasks, their priority and status, and the draft form they are created
//! from. All infrastructure concerns stay outside this boundary.

mod draft;
mod due_date;
mod error;
mod ids;
mod task;

pub use draft::{DraftEdit, DraftTask};
pub use due_date::{DUE_DATE_INPUT_FORMAT, format_due_date_input, parse_due_date};
pub use error::{ParsePriorityError, ParseTaskStatusError, TaskDomainError};
pub use ids::TaskId;
pub use task::{Priority, Task, TaskData, TaskStatus};
