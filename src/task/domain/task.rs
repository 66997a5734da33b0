//! Task aggregate root.

use super::{
    TaskDomainError, TaskDraft, TaskId, TaskPatch, TaskRules,
    draft::{normalize_description, normalize_title},
    rules::FieldSet,
};
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A user-created to-do record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    description: Option<String>,
    date: Option<NaiveDate>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task from a draft, assigning a fresh identifier.
    ///
    /// The title is stored trimmed and a blank description is stored as
    /// absent.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError`] when the draft does not satisfy `rules`.
    pub fn create(
        draft: &TaskDraft,
        rules: &TaskRules,
        clock: &impl Clock,
    ) -> Result<Self, TaskDomainError> {
        let title = normalize_title(draft.title());
        let description = normalize_description(draft.description());
        let fields = FieldSet {
            title,
            description: description.as_deref(),
            date: draft.date(),
            date_changed: true,
        };
        rules.check(&fields, today(clock))?;

        let timestamp = clock.utc();
        Ok(Self {
            id: TaskId::random(),
            title: title.to_owned(),
            description,
            date: draft.date(),
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the associated calendar date, if any.
    #[must_use]
    pub const fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Merges `patch` into this task.
    ///
    /// The merged record is validated as a whole before anything is written,
    /// so a rejected patch leaves the task untouched. An empty patch is a
    /// no-op and does not advance `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError`] when the merged fields violate `rules`.
    pub fn apply(
        &mut self,
        patch: TaskPatch,
        rules: &TaskRules,
        clock: &impl Clock,
    ) -> Result<(), TaskDomainError> {
        if patch.is_empty() {
            return Ok(());
        }
        let TaskPatch {
            title: new_title,
            description: new_description,
            date: new_date,
        } = patch;

        let title = new_title
            .as_deref()
            .map_or_else(|| self.title.clone(), |raw| normalize_title(raw).to_owned());
        let description = match new_description {
            Some(Some(raw)) => normalize_description(&raw),
            Some(None) => None,
            None => self.description.clone(),
        };
        let date = new_date.unwrap_or(self.date);

        let fields = FieldSet {
            title: &title,
            description: description.as_deref(),
            date,
            date_changed: date != self.date,
        };
        rules.check(&fields, today(clock))?;

        self.title = title;
        self.description = description;
        self.date = date;
        self.updated_at = clock.utc();
        Ok(())
    }
}

/// Returns the current calendar day in the clock's local time zone.
fn today(clock: &impl Clock) -> NaiveDate {
    clock.local().date_naive()
}
