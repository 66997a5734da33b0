//! Task management for the to-do list.
//!
//! Tasks are created, listed, edited and removed through a
//! [`services::TaskStore`] handle that is passed explicitly to every screen.
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
