//! The persistence interface consumed by the service layer.

use async_trait::async_trait;
use todo_core::types::TodoId;

use crate::error::StoreResult;
use crate::models::todo::{Todo, TodoDraft};

/// Document-style storage for todos.
///
/// List operations return records newest first (`created_at` descending,
/// ties broken by `id` descending). Implementations provide their own
/// per-record atomicity; concurrent writes to one id are last-write-wins.
#[async_trait]
pub trait TodoStore: Send + Sync + 'static {
    /// Every record, newest first.
    async fn find_all(&self) -> StoreResult<Vec<Todo>>;

    /// Records whose `completed` flag equals `completed`, newest first.
    async fn find_by_completed(&self, completed: bool) -> StoreResult<Vec<Todo>>;

    async fn find_by_id(&self, id: TodoId) -> StoreResult<Option<Todo>>;

    async fn exists_by_id(&self, id: TodoId) -> StoreResult<bool>;

    /// Persist `draft`, assigning an id when it has none, and return the
    /// stored record.
    async fn save(&self, draft: TodoDraft) -> StoreResult<Todo>;

    /// Remove the record with `id`. Unknown ids are a no-op.
    async fn delete_by_id(&self, id: TodoId) -> StoreResult<()>;

    /// Cheap round-trip proving the store is reachable.
    async fn health_check(&self) -> StoreResult<()>;
}
