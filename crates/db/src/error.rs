/// Failure talking to the backing store.
///
/// Callers treat every variant as "storage unavailable"; the wrapped
/// detail is for logs only.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;
