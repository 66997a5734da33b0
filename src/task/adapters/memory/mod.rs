//! In-memory adapters. Contents live for the lifetime of the process.

mod task;

pub use task::InMemoryTaskRepository;
