//! Draft task form state.
//!
//! The draft is edited freely and only validated when it is committed as a
//! [`Task`](super::Task). Tag slots may be blank or duplicated while editing.

use super::{Priority, format_due_date_input};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Editable, not yet committed task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftTask {
    title: String,
    description: String,
    priority: Priority,
    due_date: String,
    tags: Vec<String>,
}

/// A single edit applied to a [`DraftTask`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DraftEdit {
    /// Replaces the title text.
    SetTitle(String),
    /// Replaces the description text.
    SetDescription(String),
    /// Selects a priority.
    SetPriority(Priority),
    /// Replaces the due-date text.
    SetDueDate(String),
    /// Appends a blank tag slot.
    AddTag,
    /// Replaces the tag at `index`.
    UpdateTag {
        /// Tag slot position.
        index: usize,
        /// New tag text.
        value: String,
    },
    /// Removes the tag at the given position.
    RemoveTag(usize),
}

impl DraftTask {
    /// Creates an empty draft due on the given date.
    #[must_use]
    pub fn new(priority: Priority, due_date: DateTime<Utc>) -> Self {
        Self {
            priority,
            due_date: format_due_date_input(due_date),
            ..Self::default()
        }
    }

    /// Sets the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the due-date text.
    #[must_use]
    pub fn with_due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = due_date.into();
        self
    }

    /// Sets the tag slots.
    #[must_use]
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = String>) -> Self {
        self.tags = tags.into_iter().collect();
        self
    }

    /// Returns the title text.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description text.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the selected priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the due-date text.
    #[must_use]
    pub fn due_date(&self) -> &str {
        &self.due_date
    }

    /// Returns the tag slots, including blank ones.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Returns the tags that survive commit: every slot that is not blank
    /// after trimming, in order.
    #[must_use]
    pub fn committed_tags(&self) -> Vec<String> {
        self.tags
            .iter()
            .filter(|tag| !tag.trim().is_empty())
            .cloned()
            .collect()
    }

    /// Appends a blank tag slot.
    pub fn add_tag(&mut self) {
        self.tags.push(String::new());
    }

    /// Replaces the tag at `index`.
    ///
    /// Returns `false` when there is no slot at `index`.
    pub fn update_tag(&mut self, index: usize, value: impl Into<String>) -> bool {
        let Some(slot) = self.tags.get_mut(index) else {
            return false;
        };
        *slot = value.into();
        true
    }

    /// Removes the tag at `index`, returning it when the slot existed.
    pub fn remove_tag(&mut self, index: usize) -> Option<String> {
        (index < self.tags.len()).then(|| self.tags.remove(index))
    }

    /// Applies a single form edit.
    pub fn apply(&mut self, edit: DraftEdit) {
        match edit {
            DraftEdit::SetTitle(title) => self.title = title,
            DraftEdit::SetDescription(description) => self.description = description,
            DraftEdit::SetPriority(priority) => self.priority = priority,
            DraftEdit::SetDueDate(due_date) => self.due_date = due_date,
            DraftEdit::AddTag => self.add_tag(),
            DraftEdit::UpdateTag { index, value } => {
                self.update_tag(index, value);
            }
            DraftEdit::RemoveTag(index) => {
                self.remove_tag(index);
            }
        }
    }
}
