//! Handler errors and their JSON rendering.
//!
//! # Design
//! Every failure leaves the server as `{"errorMsg": "..."}` with an
//! `application/json` content type. Validation messages are part of the
//! contract and go out verbatim; store errors are logged and replaced by a
//! generic message.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use todo_core::ValidationError;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The body was not JSON or was sent without a JSON content type.
    #[error(transparent)]
    InvalidBody(#[from] JsonRejection),

    /// The body was JSON but a field had the wrong type.
    #[error("Failed to deserialize the JSON body into the target type: {0}")]
    InvalidFields(serde_json::Error),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("{0} is not implemented")]
    NotImplemented(&'static str),
}

/// Wire shape of every error response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub error_msg: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_msg) = match &self {
            AppError::Validation(err) => (StatusCode::UNPROCESSABLE_ENTITY, err.to_string()),
            AppError::InvalidBody(rejection) => (rejection.status(), rejection.body_text()),
            AppError::InvalidFields(_) => (StatusCode::UNPROCESSABLE_ENTITY, self.to_string()),
            AppError::Store(err) => {
                tracing::error!(error = %err, "store operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            AppError::NotImplemented(_) => (StatusCode::NOT_IMPLEMENTED, self.to_string()),
        };

        (status, Json(ErrorBody { error_msg })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_maps_to_422() {
        let resp = AppError::from(ValidationError::MissingField { field: "title" }).into_response();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            resp.headers()[axum::http::header::CONTENT_TYPE],
            "application/json"
        );
    }

    #[test]
    fn mistyped_field_maps_to_422() {
        let err = serde_json::from_str::<bool>(r#""false""#).unwrap_err();
        let resp = AppError::InvalidFields(err).into_response();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn store_error_maps_to_500() {
        let err = StoreError::MissingId("todos".to_string());
        let resp = AppError::from(err).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn not_implemented_names_the_route() {
        let err = AppError::NotImplemented("DELETE /todos");
        assert_eq!(err.to_string(), "DELETE /todos is not implemented");
        assert_eq!(err.into_response().status(), StatusCode::NOT_IMPLEMENTED);
    }

    #[test]
    fn error_body_uses_camel_case_key() {
        let body = ErrorBody {
            error_msg: "Missing parameter 'title'".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"errorMsg":"Missing parameter 'title'"}"#
        );
    }
}
