//! Unit tests for the task module.


pub(super) use crate::test_support::{FixedClock, date};
