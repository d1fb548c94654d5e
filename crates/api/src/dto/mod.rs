//! Request and response shapes exposed over HTTP, and their mapping from
//! persisted records.

pub mod todo;
