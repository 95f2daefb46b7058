//! Error types for the server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use scoped_data_scope::ScopeError;
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// A handler touched the request slot without an enclosing request scope.
    #[error("Request scope error: {0}")]
    Scope(#[from] ScopeError),

    /// Configuration or input rejected before it reaches the slot.
    #[error("Validation error: {0}")]
    Validation(String),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Error::Validation(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            Error::Scope(_) => {
                tracing::error!(error = %self, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scope_error_maps_to_internal_server_error() {
        let response = Error::from(ScopeError::NotActive).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn validation_maps_to_bad_request() {
        let response = Error::Validation("bad".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn scope_error_message_names_the_scope() {
        let err = Error::from(ScopeError::NotActive);
        assert_eq!(err.to_string(), "Request scope error: no active request scope");
    }
}
