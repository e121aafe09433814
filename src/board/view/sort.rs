//! Sort keys for board views.

use super::ViewError;
use crate::board::domain::Task;
use icu_collator::{
    Collator, CollatorBorrowed, CollatorPreferences,
    options::{CollatorOptions, Strength},
};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::sync::LazyLock;

static TITLE_COLLATOR: LazyLock<Option<CollatorBorrowed<'static>>> = LazyLock::new(|| {
    let mut options = CollatorOptions::default();
    options.strength = Some(Strength::Tertiary);
    Collator::try_new(CollatorPreferences::default(), options)
        .inspect_err(|err| tracing::warn!(error = %err, "title collator unavailable"))
        .ok()
});

/// The single active sort key of a board view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    /// Earliest due date first.
    #[default]
    DueDate,
    /// Highest priority first.
    Priority,
    /// Alphabetical by title.
    Title,
}

impl SortKey {
    /// Sort keys offered to the user, in display order.
    pub const OPTIONS: [Self; 3] = [Self::DueDate, Self::Priority, Self::Title];

    /// Returns the wire label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DueDate => "dueDate",
            Self::Priority => "priority",
            Self::Title => "title",
        }
    }

    /// Returns the label shown in the sort selector.
    #[must_use]
    pub const fn display_label(self) -> &'static str {
        match self {
            Self::DueDate => "Sort by Due Date",
            Self::Priority => "Sort by Priority",
            Self::Title => "Sort by Title",
        }
    }

    /// Orders two tasks under this key.
    #[must_use]
    pub fn compare(self, left: &Task, right: &Task) -> Ordering {
        match self {
            Self::DueDate => left.due_date().cmp(&right.due_date()),
            Self::Priority => right.priority().rank().cmp(&left.priority().rank()),
            Self::Title => compare_titles(left.title(), right.title()),
        }
    }
}

/// Compares titles the way a reader scans an alphabetical list.
///
/// Uses root-locale Unicode collation at tertiary strength: letters compare
/// by base letter first, so `Éclair` sorts before `Zebra`, then by accent,
/// then by case with the lowercase spelling first.
#[must_use]
pub fn compare_titles(left: &str, right: &str) -> Ordering {
    TITLE_COLLATOR.as_ref().map_or_else(
        || fold_case_compare(left, right),
        |collator| collator.compare(left, right),
    )
    .then_with(|| left.cmp(right))
}

fn fold_case_compare(left: &str, right: &str) -> Ordering {
    left.chars()
        .flat_map(char::to_lowercase)
        .cmp(right.chars().flat_map(char::to_lowercase))
        .then_with(|| right.cmp(left))
}

impl TryFrom<&str> for SortKey {
    type Error = ViewError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::OPTIONS
            .into_iter()
            .find(|key| key.as_str() == value)
            .ok_or_else(|| ViewError::UnknownSortKey(value.to_owned()))
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
