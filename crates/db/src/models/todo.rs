//! Todo record and the draft shape handed to `save`.

use sqlx::FromRow;
use todo_core::types::{Timestamp, TodoId};

/// A row from the `todos` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A record about to be saved.
///
/// `id: None` asks the store to assign a fresh identifier; `Some` replaces
/// (or inserts) the record with that identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoDraft {
    pub id: Option<TodoId>,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl TodoDraft {
    /// Attach an identifier, producing the persisted shape.
    pub fn with_id(self, id: TodoId) -> Todo {
        Todo {
            id,
            title: self.title,
            description: self.description,
            completed: self.completed,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl From<Todo> for TodoDraft {
    fn from(todo: Todo) -> Self {
        Self {
            id: Some(todo.id),
            title: todo.title,
            description: todo.description,
            completed: todo.completed,
            created_at: todo.created_at,
            updated_at: todo.updated_at,
        }
    }
}
