//! Error types for task field validation.

use chrono::NaiveDate;
use thiserror::Error;

/// Notice shown when a required field is missing on save.
pub const MISSING_FIELDS_NOTICE: &str = "Please fill all data.";

/// Errors returned while validating task fields.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The active save rule requires a description and none was given.
    #[error("task description is required")]
    MissingDescription,

    /// The active save rule requires a date and none was given.
    #[error("task date is required")]
    MissingDate,

    /// The title exceeds the configured character limit.
    #[error("task title has {actual} characters, exceeds limit of {max}")]
    TitleTooLong {
        /// Number of characters in the rejected title.
        actual: usize,
        /// Configured maximum.
        max: usize,
    },

    /// The description exceeds the configured character limit.
    #[error("task description has {actual} characters, exceeds limit of {max}")]
    DescriptionTooLong {
        /// Number of characters in the rejected description.
        actual: usize,
        /// Configured maximum.
        max: usize,
    },

    /// A newly picked date lies before the current day.
    #[error("task date {date} is before {today}")]
    DateInPast {
        /// The rejected date.
        date: NaiveDate,
        /// The current local date when validation ran.
        today: NaiveDate,
    },
}

impl TaskDomainError {
    /// Returns the blocking notice presented to the user for this failure.
    #[must_use]
    pub const fn notice(&self) -> &'static str {
        match self {
            Self::EmptyTitle | Self::MissingDescription | Self::MissingDate => {
                MISSING_FIELDS_NOTICE
            }
            Self::TitleTooLong { .. } => "Please shorten the title.",
            Self::DescriptionTooLong { .. } => "Please shorten the description.",
            Self::DateInPast { .. } => "Please pick today or a later date.",
        }
    }
}
