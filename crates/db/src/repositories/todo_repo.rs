//! Repository for the `todos` table.

use async_trait::async_trait;
use sqlx::PgPool;
use todo_core::types::TodoId;
use uuid::Uuid;

use crate::error::StoreResult;
use crate::models::todo::{Todo, TodoDraft};
use crate::store::TodoStore;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, completed, created_at, updated_at";

/// Postgres-backed [`TodoStore`].
#[derive(Debug, Clone)]
pub struct PgTodoRepo {
    pool: PgPool,
}

impl PgTodoRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TodoStore for PgTodoRepo {
    async fn find_all(&self) -> StoreResult<Vec<Todo>> {
        let query = format!("SELECT {COLUMNS} FROM todos ORDER BY created_at DESC, id DESC");
        let todos = sqlx::query_as::<_, Todo>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(todos)
    }

    async fn find_by_completed(&self, completed: bool) -> StoreResult<Vec<Todo>> {
        let query = format!(
            "SELECT {COLUMNS} FROM todos WHERE completed = $1 ORDER BY created_at DESC, id DESC"
        );
        let todos = sqlx::query_as::<_, Todo>(&query)
            .bind(completed)
            .fetch_all(&self.pool)
            .await?;
        Ok(todos)
    }

    async fn find_by_id(&self, id: TodoId) -> StoreResult<Option<Todo>> {
        let query = format!("SELECT {COLUMNS} FROM todos WHERE id = $1");
        let todo = sqlx::query_as::<_, Todo>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(todo)
    }

    async fn exists_by_id(&self, id: TodoId) -> StoreResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM todos WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }

    /// Upsert by id. A draft without an id gets a fresh time-ordered UUID.
    async fn save(&self, draft: TodoDraft) -> StoreResult<Todo> {
        let id = draft.id.unwrap_or_else(Uuid::now_v7);
        let query = format!(
            "INSERT INTO todos (id, title, description, completed, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             ON CONFLICT (id) DO UPDATE SET \
                title = EXCLUDED.title, \
                description = EXCLUDED.description, \
                completed = EXCLUDED.completed, \
                created_at = EXCLUDED.created_at, \
                updated_at = EXCLUDED.updated_at \
             RETURNING {COLUMNS}"
        );
        let todo = sqlx::query_as::<_, Todo>(&query)
            .bind(id)
            .bind(&draft.title)
            .bind(&draft.description)
            .bind(draft.completed)
            .bind(draft.created_at)
            .bind(draft.updated_at)
            .fetch_one(&self.pool)
            .await?;
        tracing::debug!(todo_id = %todo.id, "Saved todo row");
        Ok(todo)
    }

    async fn delete_by_id(&self, id: TodoId) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        tracing::debug!(todo_id = %id, rows = result.rows_affected(), "Deleted todo row");
        Ok(())
    }

    async fn health_check(&self) -> StoreResult<()> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }
}
