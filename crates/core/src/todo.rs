//! Field rules for todo input.
//!
//! The request DTOs reference these from `#[validate(...)]` attributes.

use std::borrow::Cow;

use validator::ValidationError;

/// Maximum length of a todo title, in characters.
pub const MAX_TITLE_LENGTH: u64 = 255;

/// Maximum length of a todo description, in characters.
pub const MAX_DESCRIPTION_LENGTH: u64 = 2000;

/// Entity name used in not-found errors and log fields.
pub const TODO_ENTITY: &str = "Todo";

/// Reject strings that are empty or contain only whitespace.
///
/// Signature matches what `validator`'s `custom(function = ...)` expects.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message(Cow::Borrowed("must not be blank")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_blank_accepts_text() {
        assert!(not_blank("Buy milk").is_ok());
        assert!(not_blank("  padded  ").is_ok());
    }

    #[test]
    fn not_blank_rejects_empty_and_whitespace() {
        assert!(not_blank("").is_err());
        assert!(not_blank("   \t\n").is_err());
    }

    #[test]
    fn not_blank_error_carries_code_and_message() {
        let err = not_blank("").unwrap_err();
        assert_eq!(err.code, "blank");
        assert_eq!(err.message.as_deref(), Some("must not be blank"));
    }
}
