//! The add/edit task form.

use super::{format::date_label, route::Route};
use crate::task::{
    domain::Task,
    ports::TaskRepository,
    services::{EditMode, EditSession, EditSessionError, TaskStore},
};
use chrono::NaiveDate;
use mockable::Clock;

/// Header shown when adding a task.
pub const ADD_TASK_HEADING: &str = "Add New Task";

/// Placeholder of the title input.
pub const TITLE_PLACEHOLDER: &str = "e.g Grab a coffee.";

/// Placeholder of the description input.
pub const DESCRIPTION_PLACEHOLDER: &str = "e.g grab a coffee and leave for office.";

/// Placeholder of the date field while no date is set.
pub const DATE_PLACEHOLDER: &str = "e.g 10 Jan 2020";

/// Notice shown when a save fails for a reason other than validation.
pub const SAVE_FAILED_NOTICE: &str = "The task could not be saved.";

/// Result of pressing the save button.
pub enum SaveResponse<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// The task was stored; navigate to `next`.
    Saved {
        /// The stored task.
        task: Task,
        /// Where the form hands control back to.
        next: Route,
    },
    /// Nothing was stored; the form stays open with its input intact.
    Rejected {
        /// The form, unchanged.
        screen: TaskSaveScreen<R, C>,
        /// Why the save failed.
        reason: EditSessionError,
    },
}

impl<R, C> SaveResponse<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Returns the blocking notice to show for a rejected save.
    #[must_use]
    pub const fn notice(&self) -> Option<&'static str> {
        match self {
            Self::Saved { .. } => None,
            Self::Rejected { reason, .. } => match reason.notice() {
                Some(notice) => Some(notice),
                None => Some(SAVE_FAILED_NOTICE),
            },
        }
    }
}

/// Form screen wrapping an [`EditSession`].
pub struct TaskSaveScreen<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    store: TaskStore<R, C>,
    session: EditSession,
    heading: String,
}

impl<R, C> TaskSaveScreen<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Opens the form in the given mode.
    ///
    /// The header reads [`ADD_TASK_HEADING`] when adding and the task's
    /// title when editing. A new task's date field starts on today.
    ///
    /// # Errors
    ///
    /// Returns [`EditSessionError`] when the task to edit cannot be loaded.
    pub fn open(store: TaskStore<R, C>, mode: EditMode) -> Result<Self, EditSessionError> {
        let session = EditSession::begin(&store, mode)?;
        let heading = match mode {
            EditMode::Create => ADD_TASK_HEADING.to_owned(),
            EditMode::EditExisting(_) => session.draft().title().to_owned(),
        };
        Ok(Self {
            store,
            session,
            heading,
        })
    }

    /// Returns the header title.
    #[must_use]
    pub fn heading(&self) -> &str {
        &self.heading
    }

    /// Returns the underlying session.
    #[must_use]
    pub const fn session(&self) -> &EditSession {
        &self.session
    }

    /// Title input changed.
    pub fn title_changed(&mut self, text: impl Into<String>) {
        self.session.set_title(text);
    }

    /// Description input changed.
    pub fn description_changed(&mut self, text: impl Into<String>) {
        self.session.set_description(text);
    }

    /// Earliest date the picker offers. Saving does not enforce it.
    #[must_use]
    pub fn min_date(&self) -> NaiveDate {
        self.store.today()
    }

    /// A date was confirmed in the picker.
    pub const fn date_picked(&mut self, date: NaiveDate) {
        self.session.set_date(Some(date));
    }

    /// Returns the description counter, e.g. `"480 characters left."`, or an
    /// empty string while the description is empty.
    #[must_use]
    pub fn char_count_label(&self) -> String {
        if self.session.draft().description().is_empty() {
            return String::new();
        }
        format!("{} characters left.", self.session.description_chars_left())
    }

    /// Returns the date field text.
    #[must_use]
    pub fn date_field_label(&self) -> String {
        self.session
            .draft()
            .date()
            .map_or_else(|| DATE_PLACEHOLDER.to_owned(), date_label)
    }

    /// Save button: commits the draft and returns to the list on success.
    pub fn save_pressed(self) -> SaveResponse<R, C> {
        let Self {
            store,
            session,
            heading,
        } = self;
        match session.save(&store) {
            Ok(task) => SaveResponse::Saved {
                task,
                next: Route::TaskList,
            },
            Err(rejected) => {
                tracing::debug!(reason = %rejected.reason(), "save rejected");
                let (session, reason) = rejected.into_parts();
                SaveResponse::Rejected {
                    screen: Self {
                        store,
                        session,
                        heading,
                    },
                    reason,
                }
            }
        }
    }

    /// Back button: leaves the form without saving.
    #[must_use]
    pub fn back_pressed(self) -> Route {
        self.session.back();
        Route::TaskList
    }
}
