//! Application services sitting between handlers and the store.

pub mod todo_service;

pub use todo_service::TodoService;
