//! Screen routes and the navigation stack.

use crate::task::{domain::TaskId, services::EditMode};

/// A screen the user can be on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// All tasks.
    TaskList,
    /// A single task, read-only.
    TaskDetails(TaskId),
    /// The add/edit form.
    TaskSave(EditMode),
}

impl Route {
    /// Returns the default header title of the route.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::TaskList => "Task List",
            Self::TaskDetails(_) => "Task Details",
            Self::TaskSave(_) => "Add or Edit Task",
        }
    }
}

/// Stack of visited routes. The task list is always at the bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    stack: Vec<Route>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    /// Creates a navigator showing the task list.
    #[must_use]
    pub fn new() -> Self {
        Self {
            stack: vec![Route::TaskList],
        }
    }

    /// Returns the route on top of the stack.
    #[must_use]
    pub fn current(&self) -> Route {
        self.stack.last().copied().unwrap_or(Route::TaskList)
    }

    /// Returns the number of routes on the stack.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Moves to `route`.
    ///
    /// When the route is already on the stack, everything above it is popped
    /// so returning to the list does not grow the history.
    pub fn navigate(&mut self, route: Route) {
        match self.stack.iter().position(|visited| *visited == route) {
            Some(index) => self.stack.truncate(index.saturating_add(1)),
            None => self.stack.push(route),
        }
        tracing::debug!(?route, depth = self.stack.len(), "navigated");
    }

    /// Pops the current route. The root route is never popped.
    ///
    /// Returns `true` when a route was popped.
    pub fn go_back(&mut self) -> bool {
        if self.stack.len() <= 1 {
            return false;
        }
        self.stack.pop();
        tracing::debug!(route = ?self.current(), "navigated back");
        true
    }
}
