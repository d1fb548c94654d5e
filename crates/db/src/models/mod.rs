//! Persisted record shapes.

pub mod todo;
