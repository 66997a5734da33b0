//! Display formatting shared by the screens.

use chrono::NaiveDate;

/// Layout used wherever a task date is shown, e.g. `Wed 10, January 2024`.
pub const DATE_LABEL_FORMAT: &str = "%a %d, %B %Y";

/// Formats a task date for display.
#[must_use]
pub fn date_label(date: NaiveDate) -> String {
    date.format(DATE_LABEL_FORMAT).to_string()
}

/// Formats an optional task date, yielding an empty label when absent.
#[must_use]
pub fn optional_date_label(date: Option<NaiveDate>) -> String {
    date.map(date_label).unwrap_or_default()
}
