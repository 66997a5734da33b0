//! Confirmation gate that must precede every task removal.

use crate::task::domain::TaskId;

/// Heading of the removal confirmation prompt.
pub const REMOVAL_PROMPT_TITLE: &str = "Are you sure ?";

/// Body of the removal confirmation prompt.
pub const REMOVAL_PROMPT_MESSAGE: &str = "Do you want to delete the task?";

/// Answer given to a removal confirmation prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RemovalChoice {
    /// Keep the task.
    Discard,
    /// Delete the task.
    Confirm,
}

impl RemovalChoice {
    /// Choices in the order they are offered.
    pub const ALL: [Self; 2] = [Self::Discard, Self::Confirm];

    /// Returns the button label for this choice.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Discard => "Discard",
            Self::Confirm => "Confirm",
        }
    }
}

/// A removal awaiting the user's answer.
///
/// Obtained from [`TaskStore::request_removal`](super::TaskStore::request_removal).
/// The prompt is not cancelable: it must be answered with either
/// [`confirm`](Self::confirm) or [`discard`](Self::discard).
#[derive(Debug, PartialEq, Eq)]
#[must_use = "a removal request does nothing until it is confirmed or discarded"]
pub struct PendingRemoval {
    id: TaskId,
}

impl PendingRemoval {
    pub(crate) const fn new(id: TaskId) -> Self {
        Self { id }
    }

    /// Returns the identifier of the task awaiting removal.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.id
    }

    /// Returns the prompt heading.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        REMOVAL_PROMPT_TITLE
    }

    /// Returns the prompt body.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        REMOVAL_PROMPT_MESSAGE
    }

    /// Returns the offered choices.
    #[must_use]
    pub const fn choices(&self) -> [RemovalChoice; 2] {
        RemovalChoice::ALL
    }

    /// Accepts the removal, yielding the token required by
    /// [`TaskStore::remove`](super::TaskStore::remove).
    pub const fn confirm(self) -> ConfirmedRemoval {
        ConfirmedRemoval { id: self.id }
    }

    /// Declines the removal. The store is not touched.
    pub fn discard(self) {
        tracing::debug!(task_id = %self.id, "task removal discarded");
    }

    /// Applies the given answer, returning a token only on confirmation.
    pub fn resolve(self, choice: RemovalChoice) -> Option<ConfirmedRemoval> {
        match choice {
            RemovalChoice::Confirm => Some(self.confirm()),
            RemovalChoice::Discard => {
                self.discard();
                None
            }
        }
    }
}

/// Proof that the user confirmed removing a task.
///
/// Only [`PendingRemoval::confirm`] can produce this token and it is consumed
/// by a single removal.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "a confirmed removal does nothing until passed to the store"]
pub struct ConfirmedRemoval {
    id: TaskId,
}

impl ConfirmedRemoval {
    /// Returns the identifier of the task to remove.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.id
    }
}
