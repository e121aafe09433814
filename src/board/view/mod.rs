//! Derived views of the task store.
//!
//! [`derive_view`] is a pure function of the store contents, the active
//! filter and sort key, and the current time. [`snapshot`] turns a derived
//! view into the presentation model.

mod derive;
mod error;
mod filter;
pub mod snapshot;
mod sort;

pub use derive::{ColumnView, ViewQuery, derive_view, is_overdue, partition_columns};
pub use error::ViewError;
pub use filter::{FieldFilter, TaskFilter};
pub use snapshot::{BoardSnapshot, ColumnSnapshot, SelectOption, TaskCard};
pub use sort::{SortKey, compare_titles};
