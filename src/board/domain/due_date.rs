//! Due-date text handling for the draft form.

use super::TaskDomainError;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

/// Format of the date-only text the draft form edits.
pub const DUE_DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// Parses draft due-date text.
///
/// Accepts a `YYYY-MM-DD` calendar date, read as midnight UTC, or an
/// RFC 3339 timestamp. Surrounding whitespace is ignored.
///
/// # Errors
///
/// Returns [`TaskDomainError::InvalidDueDate`] for any other input.
pub fn parse_due_date(text: &str) -> Result<DateTime<Utc>, TaskDomainError> {
    let trimmed = text.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, DUE_DATE_INPUT_FORMAT) {
        return Ok(date.and_time(NaiveTime::MIN).and_utc());
    }
    DateTime::parse_from_rfc3339(trimmed)
        .map(|timestamp| timestamp.with_timezone(&Utc))
        .map_err(|_| TaskDomainError::InvalidDueDate(text.to_owned()))
}

/// Renders a timestamp as the date-only text the draft form edits.
#[must_use]
pub fn format_due_date_input(due_date: DateTime<Utc>) -> String {
    due_date.format(DUE_DATE_INPUT_FORMAT).to_string()
}
