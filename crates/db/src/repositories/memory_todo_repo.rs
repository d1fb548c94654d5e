//! In-process [`TodoStore`] used when no database is configured, and in tests.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use todo_core::types::TodoId;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::StoreResult;
use crate::models::todo::{Todo, TodoDraft};
use crate::store::TodoStore;

/// Map-backed store. Clones share the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct MemoryTodoRepo {
    todos: Arc<RwLock<HashMap<TodoId, Todo>>>,
}

impl MemoryTodoRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.todos.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.todos.read().await.is_empty()
    }
}

/// Sort newest first, breaking `created_at` ties by id so the order is total.
fn newest_first(mut todos: Vec<Todo>) -> Vec<Todo> {
    todos.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| b.id.cmp(&a.id))
    });
    todos
}

#[async_trait]
impl TodoStore for MemoryTodoRepo {
    async fn find_all(&self) -> StoreResult<Vec<Todo>> {
        let todos = self.todos.read().await;
        Ok(newest_first(todos.values().cloned().collect()))
    }

    async fn find_by_completed(&self, completed: bool) -> StoreResult<Vec<Todo>> {
        let todos = self.todos.read().await;
        Ok(newest_first(
            todos
                .values()
                .filter(|t| t.completed == completed)
                .cloned()
                .collect(),
        ))
    }

    async fn find_by_id(&self, id: TodoId) -> StoreResult<Option<Todo>> {
        Ok(self.todos.read().await.get(&id).cloned())
    }

    async fn exists_by_id(&self, id: TodoId) -> StoreResult<bool> {
        Ok(self.todos.read().await.contains_key(&id))
    }

    async fn save(&self, draft: TodoDraft) -> StoreResult<Todo> {
        let id = draft.id.unwrap_or_else(Uuid::now_v7);
        let todo = draft.with_id(id);
        self.todos.write().await.insert(id, todo.clone());
        Ok(todo)
    }

    async fn delete_by_id(&self, id: TodoId) -> StoreResult<()> {
        self.todos.write().await.remove(&id);
        Ok(())
    }

    async fn health_check(&self) -> StoreResult<()> {
        Ok(())
    }
}
