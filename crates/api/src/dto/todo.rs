//! Todo request/response DTOs.

use serde::{Deserialize, Serialize};
use todo_core::todo::{not_blank, MAX_DESCRIPTION_LENGTH, MAX_TITLE_LENGTH};
use todo_core::types::{Timestamp, TodoId};
use todo_db::models::todo::Todo;
use validator::Validate;

/// Body of `POST /api/todos` and `PUT /api/todos/{id}`.
///
/// On update, `title` and `description` always replace the stored values
/// (an omitted description clears it) while `completed` is only applied
/// when present.
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
pub struct TodoRequest {
    #[validate(
        custom(function = "not_blank"),
        length(max = MAX_TITLE_LENGTH, message = "must be at most 255 characters")
    )]
    pub title: String,
    #[validate(length(max = MAX_DESCRIPTION_LENGTH, message = "must be at most 2000 characters"))]
    pub description: Option<String>,
    pub completed: Option<bool>,
}

/// Externally visible shape of a todo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoResponse {
    pub id: TodoId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub completed: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<Todo> for TodoResponse {
    fn from(todo: Todo) -> Self {
        Self {
            id: todo.id,
            title: todo.title,
            description: todo.description,
            completed: todo.completed,
            created_at: todo.created_at,
            updated_at: todo.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    use super::*;

    fn request(title: &str) -> TodoRequest {
        TodoRequest {
            title: title.to_string(),
            ..TodoRequest::default()
        }
    }

    #[test]
    fn mapping_copies_every_field() {
        let created = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        let todo = Todo {
            id: Uuid::nil(),
            title: "Buy milk".to_string(),
            description: Some("2 litres".to_string()),
            completed: true,
            created_at: created,
            updated_at: created + chrono::Duration::minutes(1),
        };

        let response = TodoResponse::from(todo.clone());

        assert_eq!(response.id, todo.id);
        assert_eq!(response.title, todo.title);
        assert_eq!(response.description, todo.description);
        assert_eq!(response.completed, todo.completed);
        assert_eq!(response.created_at, todo.created_at);
        assert_eq!(response.updated_at, todo.updated_at);
    }

    #[test]
    fn response_serializes_camel_case_and_omits_missing_description() {
        let created = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        let response = TodoResponse {
            id: Uuid::nil(),
            title: "Test".to_string(),
            description: None,
            completed: false,
            created_at: created,
            updated_at: created,
        };

        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["id"], "00000000-0000-0000-0000-000000000000");
        assert_eq!(json["completed"], false);
        assert!(json["createdAt"].is_string());
        assert!(json["updatedAt"].is_string());
        assert!(json.get("description").is_none());
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn request_defaults_optional_fields() {
        let input: TodoRequest = serde_json::from_str(r#"{"title":"Only a title"}"#).unwrap();
        assert_eq!(input.title, "Only a title");
        assert!(input.description.is_none());
        assert!(input.completed.is_none());
    }

    #[test]
    fn request_requires_title() {
        let result: Result<TodoRequest, _> = serde_json::from_str(r#"{"completed":true}"#);
        assert!(result.is_err());
    }

    #[test]
    fn validation_accepts_plain_title() {
        assert!(request("Buy milk").validate().is_ok());
    }

    #[test]
    fn validation_rejects_blank_title() {
        let errors = request("   ").validate().unwrap_err();
        assert!(errors.field_errors().contains_key("title"));
    }

    #[test]
    fn validation_rejects_oversize_fields() {
        let long_title = request(&"t".repeat(MAX_TITLE_LENGTH as usize + 1));
        assert!(long_title.validate().is_err());

        let long_description = TodoRequest {
            description: Some("d".repeat(MAX_DESCRIPTION_LENGTH as usize + 1)),
            ..request("ok")
        };
        let errors = long_description.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("description"));
    }
}
