//! Domain model for the to-do list.
//!
//! Tasks are validated and constructed here; storage and presentation stay
//! outside of the domain boundary.

mod draft;
mod error;
mod ids;
mod rules;
mod task;

pub use draft::{TaskDraft, TaskPatch};
pub use error::{MISSING_FIELDS_NOTICE, TaskDomainError};
pub use ids::TaskId;
pub use rules::{SaveRule, TaskRules};
pub use task::Task;
