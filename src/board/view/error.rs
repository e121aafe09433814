//! Errors raised while reading view selections.

use thiserror::Error;

/// Errors returned while parsing filter and sort selections.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ViewError {
    /// The filter label is not one the board knows.
    #[error("unknown filter: {0}")]
    UnknownFilter(String),

    /// The sort key label is not one the board knows.
    #[error("unknown sort key: {0}")]
    UnknownSortKey(String),
}
