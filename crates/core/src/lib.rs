//! Shared domain primitives for the todo service.
//!
//! Holds the identifier and timestamp types, the [`error::CoreError`]
//! taxonomy, and the field rules applied to todo input.

pub mod error;
pub mod todo;
pub mod types;
