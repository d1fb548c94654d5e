//! Todo business rules on top of a [`TodoStore`].

use std::sync::Arc;

use chrono::Utc;
use todo_core::types::TodoId;
use todo_db::models::todo::TodoDraft;
use todo_db::{StoreResult, TodoStore};

use crate::dto::todo::{TodoRequest, TodoResponse};

/// Application service for todos.
///
/// Owns defaulting (`completed = false`) and timestamp stamping. Holds no
/// state of its own, so clones are cheap and can be shared across requests.
///
/// Ids arrive as text from the transport. Text that is not a valid id can
/// never name a record, so it behaves exactly like an unknown id.
#[derive(Clone)]
pub struct TodoService {
    store: Arc<dyn TodoStore>,
}

impl TodoService {
    pub fn new(store: Arc<dyn TodoStore>) -> Self {
        Self { store }
    }

    /// All todos, newest first.
    pub async fn list_all(&self) -> StoreResult<Vec<TodoResponse>> {
        let todos = self.store.find_all().await?;
        Ok(todos.into_iter().map(TodoResponse::from).collect())
    }

    /// Todos whose `completed` flag matches, newest first.
    pub async fn list_by_status(&self, completed: bool) -> StoreResult<Vec<TodoResponse>> {
        let todos = self.store.find_by_completed(completed).await?;
        Ok(todos.into_iter().map(TodoResponse::from).collect())
    }

    pub async fn get_by_id(&self, id: &str) -> StoreResult<Option<TodoResponse>> {
        let Some(id) = parse_id(id) else {
            return Ok(None);
        };
        let todo = self.store.find_by_id(id).await?;
        Ok(todo.map(TodoResponse::from))
    }

    /// Create a todo. `created_at` and `updated_at` come from a single clock
    /// reading so they are equal on creation.
    pub async fn create(&self, request: TodoRequest) -> StoreResult<TodoResponse> {
        let now = Utc::now();
        let draft = TodoDraft {
            id: None,
            title: request.title,
            description: request.description,
            completed: request.completed.unwrap_or(false),
            created_at: now,
            updated_at: now,
        };

        let todo = self.store.save(draft).await?;
        tracing::info!(todo_id = %todo.id, completed = todo.completed, "Todo created");
        Ok(TodoResponse::from(todo))
    }

    /// Update a todo, returning `None` when the id is unknown.
    ///
    /// `title` and `description` are always overwritten; `completed` only
    /// when the request carries it. `updated_at` never moves backwards.
    pub async fn update(
        &self,
        id: &str,
        request: TodoRequest,
    ) -> StoreResult<Option<TodoResponse>> {
        let Some(id) = parse_id(id) else {
            return Ok(None);
        };
        let Some(existing) = self.store.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut draft = TodoDraft::from(existing);
        draft.title = request.title;
        draft.description = request.description;
        if let Some(completed) = request.completed {
            draft.completed = completed;
        }
        draft.updated_at = Utc::now().max(draft.updated_at);

        let todo = self.store.save(draft).await?;
        tracing::info!(todo_id = %todo.id, completed = todo.completed, "Todo updated");
        Ok(Some(TodoResponse::from(todo)))
    }

    /// Delete a todo. Returns `false` (leaving the store untouched) when
    /// the id is unknown.
    pub async fn delete(&self, id: &str) -> StoreResult<bool> {
        let Some(id) = parse_id(id) else {
            return Ok(false);
        };
        if !self.store.exists_by_id(id).await? {
            return Ok(false);
        }
        self.store.delete_by_id(id).await?;
        tracing::info!(todo_id = %id, "Todo deleted");
        Ok(true)
    }

    /// Probe the backing store.
    pub async fn health_check(&self) -> StoreResult<()> {
        self.store.health_check().await
    }
}

fn parse_id(raw: &str) -> Option<TodoId> {
    TodoId::parse_str(raw).ok()
}
