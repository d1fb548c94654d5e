//! [`TodoStore`](crate::store::TodoStore) implementations.

pub mod memory_todo_repo;
pub mod todo_repo;

pub use memory_todo_repo::MemoryTodoRepo;
pub use todo_repo::PgTodoRepo;
