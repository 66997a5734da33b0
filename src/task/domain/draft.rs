//! Unsaved task input: drafts held by edit sessions and field patches.

use super::Task;
use chrono::NaiveDate;

/// In-progress edit of a task's fields.
///
/// A draft holds raw form input exactly as typed and is independent of the
/// store until it is saved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    title: String,
    description: String,
    date: Option<NaiveDate>,
}

impl TaskDraft {
    /// Creates an empty draft.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a draft seeded with the fields of an existing task.
    #[must_use]
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title().to_owned(),
            description: task.description().unwrap_or_default().to_owned(),
            date: task.date(),
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

    /// Sets the date.
    #[must_use]
    pub const fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Returns the raw title input.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the raw description input.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the picked date, if any.
    #[must_use]
    pub const fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    /// Replaces the title input.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Replaces the description input.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Replaces or clears the picked date.
    pub const fn set_date(&mut self, date: Option<NaiveDate>) {
        self.date = date;
    }

    /// Builds a patch containing only the fields that differ from `task`.
    #[must_use]
    pub fn changes_from(&self, task: &Task) -> TaskPatch {
        let mut patch = TaskPatch::new();
        if normalize_title(&self.title) != task.title() {
            patch = patch.with_title(self.title.clone());
        }
        match normalize_description(&self.description) {
            Some(description) if Some(description.as_str()) != task.description() => {
                patch = patch.with_description(description);
            }
            None if task.description().is_some() => patch = patch.clear_description(),
            _ => {}
        }
        match self.date {
            Some(date) if task.date() != Some(date) => patch = patch.with_date(date),
            None if task.date().is_some() => patch = patch.clear_date(),
            _ => {}
        }
        patch
    }
}

/// Partial update applied to a stored task.
///
/// Fields left untouched by the builder are not changed on the target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub(crate) title: Option<String>,
    pub(crate) description: Option<Option<String>>,
    pub(crate) date: Option<Option<NaiveDate>>,
}

impl TaskPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replaces the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(Some(description.into()));
        self
    }

    /// Removes the description.
    #[must_use]
    pub fn clear_description(mut self) -> Self {
        self.description = Some(None);
        self
    }

    /// Replaces the date.
    #[must_use]
    pub const fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(Some(date));
        self
    }

    /// Removes the date.
    #[must_use]
    pub const fn clear_date(mut self) -> Self {
        self.date = Some(None);
        self
    }

    /// Returns `true` when the patch changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.date.is_none()
    }
}

pub(crate) fn normalize_title(raw: &str) -> &str {
    raw.trim()
}

pub(crate) fn normalize_description(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}
