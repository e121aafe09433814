//! Board configuration.
//!
//! # Examples
//!
//! ```
//! use chrono::Duration;
//! use taskboard::board::config::BoardConfig;
//!
//! let config = BoardConfig::default();
//! assert_eq!(config.upcoming_window, Duration::days(3));
//!
//! let empty = BoardConfig::default().with_seed_tasks(false);
//! assert!(!empty.seed_tasks);
//! ```

use super::domain::Priority;
use chrono::Duration;

/// Tunables for a [`TaskBoard`](super::services::TaskBoard).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    /// How far ahead of now a due date counts as upcoming.
    pub upcoming_window: Duration,
    /// Offset from now used for a fresh draft's due date.
    pub default_due_offset: Duration,
    /// Priority a fresh draft starts with.
    pub default_priority: Priority,
    /// Number of tags shown on a card before the rest collapse into a count.
    pub visible_tag_limit: usize,
    /// Whether a new board starts with the two sample tasks.
    pub seed_tasks: bool,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            upcoming_window: Duration::days(3),
            default_due_offset: Duration::days(1),
            default_priority: Priority::Medium,
            visible_tag_limit: 3,
            seed_tasks: true,
        }
    }
}

impl BoardConfig {
    /// Sets the upcoming window.
    #[must_use]
    pub const fn with_upcoming_window(mut self, window: Duration) -> Self {
        self.upcoming_window = window;
        self
    }

    /// Sets the default due offset for new drafts.
    #[must_use]
    pub const fn with_default_due_offset(mut self, offset: Duration) -> Self {
        self.default_due_offset = offset;
        self
    }

    /// Sets the default priority for new drafts.
    #[must_use]
    pub const fn with_default_priority(mut self, priority: Priority) -> Self {
        self.default_priority = priority;
        self
    }

    /// Sets the number of tags shown per card.
    #[must_use]
    pub const fn with_visible_tag_limit(mut self, limit: usize) -> Self {
        self.visible_tag_limit = limit;
        self
    }

    /// Enables or disables the sample tasks.
    #[must_use]
    pub const fn with_seed_tasks(mut self, seed_tasks: bool) -> Self {
        self.seed_tasks = seed_tasks;
        self
    }
}
