//! Shared query parameter types for API handlers.

use serde::{Deserialize, Deserializer};

/// Optional `?completed=true|false` filter for list endpoints.
///
/// An empty value (`?completed=`) is treated the same as leaving it out.
#[derive(Debug, Default, Deserialize)]
pub struct CompletedFilter {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub completed: Option<bool>,
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(serde::de::Error::custom),
    }
}
