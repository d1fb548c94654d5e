/// Todo identifiers are UUIDs assigned by the store on first save.
pub type TodoId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
