//! Headless screens for the to-do list.
//!
//! Each screen takes a [`TaskStore`](crate::task::services::TaskStore)
//! handle in its constructor, renders plain view data and turns user
//! gestures into store calls or [`Route`]s for the [`Navigator`].
//!
//! - [`list`]: all tasks with add, view, edit and delete actions
//! - [`details`]: a single task
//! - [`save`]: the add/edit form
//! - [`quick_add`]: the single-screen variant's add and details modals

pub mod details;
pub mod format;
pub mod list;
pub mod quick_add;
pub mod route;
pub mod save;

pub use details::{TaskDetailsScreen, TaskDetailsView};
pub use list::{TaskListScreen, TaskListView, TaskRow};
pub use quick_add::{QuickAddModal, QuickDetailsModal};
pub use route::{Navigator, Route};
pub use save::{SaveResponse, TaskSaveScreen};

#[cfg(test)]
mod tests;
