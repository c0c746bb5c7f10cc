//! The single required-field rule applied to create requests.

use crate::error::ValidationError;
use crate::types::CreateTodoRequest;

/// Fail when `title` is absent, `null`, or `""`.
///
/// Whitespace-only titles pass; no other field is required.
pub fn validate_title(request: &CreateTodoRequest) -> Result<(), ValidationError> {
    require_title(request.title.as_deref())
}

/// The title rule on a bare value, for callers that have not decoded the
/// rest of the request yet. `None` covers both absent and `null`.
pub fn require_title(title: Option<&str>) -> Result<(), ValidationError> {
    match title {
        Some(title) if !title.is_empty() => Ok(()),
        _ => Err(ValidationError::MissingField { field: "title" }),
    }
}
