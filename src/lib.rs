//! Todolist: an in-memory to-do list.
//!
//! Tasks are created, listed, viewed, edited and deleted through a single
//! store handle that is passed explicitly to every screen. Nothing is
//! persisted; the list lives as long as the process.
//!
//! # Architecture
//!
//! Todolist follows hexagonal architecture principles:
//!
//! - **Domain**: Task validation and patching with no infrastructure
//!   dependencies
//! - **Ports**: Abstract trait interfaces for task storage
//! - **Adapters**: The in-memory repository
//! - **Services**: The task store, edit sessions and the removal
//!   confirmation gate
//!
//! # Modules
//!
//! - [`task`]: Task model, storage and lifecycle services
//! - [`screen`]: Headless list, details and form screens plus navigation

pub mod screen;
pub mod task;
