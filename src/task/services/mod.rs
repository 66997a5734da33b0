//! Application services: the task store, edit sessions and the removal
//! confirmation gate.

mod removal;
mod session;
mod store;

pub use removal::{
    ConfirmedRemoval, PendingRemoval, REMOVAL_PROMPT_MESSAGE, REMOVAL_PROMPT_TITLE, RemovalChoice,
};
pub use session::{EditMode, EditSession, EditSessionError, SaveRejected};
pub use store::{TaskStore, TaskStoreError, TaskStoreResult};
