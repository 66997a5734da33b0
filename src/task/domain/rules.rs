//! Save rules and field limits applied whenever a task is committed.

use super::TaskDomainError;
use chrono::NaiveDate;

/// Which fields must be present before a task may be saved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SaveRule {
    /// Only a non-blank title is required (the quick-add modal).
    TitleOnly,
    /// Title, description and date are all required (the full task form).
    Complete,
}

/// Configuration for task validation.
///
/// # Examples
///
/// ```
/// use todolist::task::domain::{SaveRule, TaskRules};
///
/// let rules = TaskRules::default();
/// assert_eq!(rules.save_rule, SaveRule::Complete);
///
/// let quick = TaskRules::quick_add();
/// assert_eq!(quick.save_rule, SaveRule::TitleOnly);
///
/// assert!(rules.allow_past_dates);
/// assert!(!rules.rejecting_past_dates().allow_past_dates);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRules {
    /// Required-field rule.
    pub save_rule: SaveRule,
    /// Maximum title length in characters.
    pub max_title_chars: usize,
    /// Maximum description length in characters.
    pub max_description_chars: usize,
    /// Whether a newly set date may lie before today. Off only when opted
    /// into with [`rejecting_past_dates`](Self::rejecting_past_dates).
    pub allow_past_dates: bool,
}

impl Default for TaskRules {
    fn default() -> Self {
        Self::full_form()
    }
}

impl TaskRules {
    /// Rules for the full task form: every field is required.
    #[must_use]
    pub const fn full_form() -> Self {
        Self {
            save_rule: SaveRule::Complete,
            max_title_chars: 120,
            max_description_chars: 500,
            allow_past_dates: true,
        }
    }

    /// Returns these rules with newly set dates before today rejected.
    #[must_use]
    pub const fn rejecting_past_dates(self) -> Self {
        Self {
            allow_past_dates: false,
            ..self
        }
    }

    /// Rules for the single-field quick-add modal.
    #[must_use]
    pub const fn quick_add() -> Self {
        Self {
            save_rule: SaveRule::TitleOnly,
            ..Self::full_form()
        }
    }

    /// Validates normalized task fields against these rules.
    ///
    /// `date_changed` is false when the date is carried over unchanged from
    /// an existing record, in which case it is not checked against `today`.
    pub(crate) fn check(
        &self,
        fields: &FieldSet<'_>,
        today: NaiveDate,
    ) -> Result<(), TaskDomainError> {
        if fields.title.is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }
        let title_chars = fields.title.chars().count();
        if title_chars > self.max_title_chars {
            return Err(TaskDomainError::TitleTooLong {
                actual: title_chars,
                max: self.max_title_chars,
            });
        }

        match fields.description {
            None if self.save_rule == SaveRule::Complete => {
                return Err(TaskDomainError::MissingDescription);
            }
            Some(description) => {
                let description_chars = description.chars().count();
                if description_chars > self.max_description_chars {
                    return Err(TaskDomainError::DescriptionTooLong {
                        actual: description_chars,
                        max: self.max_description_chars,
                    });
                }
            }
            None => {}
        }

        match fields.date {
            None if self.save_rule == SaveRule::Complete => Err(TaskDomainError::MissingDate),
            Some(date) if fields.date_changed && !self.allow_past_dates && date < today => {
                Err(TaskDomainError::DateInPast { date, today })
            }
            _ => Ok(()),
        }
    }
}

/// Borrowed, already-normalized view of the fields being validated.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FieldSet<'a> {
    pub(crate) title: &'a str,
    pub(crate) description: Option<&'a str>,
    pub(crate) date: Option<NaiveDate>,
    pub(crate) date_changed: bool,
}
