//! Error types for todo validation.

use thiserror::Error;

/// Rejection of a create request before anything reaches the store.
///
/// The display text is part of the HTTP contract and is sent verbatim as the
/// `errorMsg` of a 422 response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field was absent, `null`, or an empty string.
    #[error("Missing parameter '{field}'")]
    MissingField { field: &'static str },
}
