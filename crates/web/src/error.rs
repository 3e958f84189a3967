use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};
use storage::error::StorageError;
use thiserror::Error;
use validator::ValidationErrors;

/// Failures a request handler can answer with.
#[derive(Debug, Error)]
pub enum WebError {
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("validation error: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("missing or unknown API token")]
    Unauthorized,

    #[error("caller may not modify this resource")]
    Forbidden,

    #[error("resource not found")]
    NotFound,
}

impl WebError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Storage(StorageError::NotFound) | Self::NotFound => StatusCode::NOT_FOUND,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Validation(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
        }
    }

    /// JSON body sent to the client. Storage details stay in the logs.
    fn body(&self) -> Value {
        match self {
            Self::Storage(StorageError::NotFound) | Self::NotFound => {
                json!({ "error": "Resource not found" })
            }
            Self::Storage(e) => {
                tracing::error!(error = ?e, "storage failure while handling request");
                json!({ "error": "An internal error occurred" })
            }
            Self::Validation(errors) => json!({
                "error": "Validation failed",
                "details": field_messages(errors),
            }),
            Self::BadRequest(msg) => json!({ "error": msg }),
            Self::Unauthorized => json!({ "error": "Unauthorized" }),
            Self::Forbidden => json!({ "error": "You are not allowed to modify this resource" }),
        }
    }
}

/// `field: message` for every failed rule, falling back to the rule code.
fn field_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |e| match &e.message {
                Some(message) => format!("{}: {}", field, message),
                None => format!("{}: {}", field, e.code),
            })
        })
        .collect();
    messages.sort();
    messages
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self.body())).into_response()
    }
}

pub type WebResult<T> = Result<T, WebError>;

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Named {
        #[validate(length(min = 1, message = "must not be empty"))]
        name: String,
        #[validate(length(max = 2))]
        code: String,
    }

    #[test]
    fn test_status_codes() {
        let cases = [
            (WebError::Storage(StorageError::NotFound), StatusCode::NOT_FOUND),
            (
                WebError::Storage(StorageError::Backend("down".into())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (WebError::BadRequest("x".into()), StatusCode::BAD_REQUEST),
            (WebError::Unauthorized, StatusCode::UNAUTHORIZED),
            (WebError::Forbidden, StatusCode::FORBIDDEN),
            (WebError::NotFound, StatusCode::NOT_FOUND),
        ];

        for (error, expected) in cases {
            assert_eq!(error.status_code(), expected);
            assert_eq!(error.into_response().status(), expected);
        }
    }

    #[test]
    fn test_validation_body_lists_every_field() {
        let errors = Named {
            name: String::new(),
            code: "toolong".into(),
        }
        .validate()
        .unwrap_err();

        let body = WebError::from(errors).body();
        assert_eq!(body["error"], "Validation failed");
        assert_eq!(
            body["details"],
            json!(["code: length", "name: must not be empty"])
        );
    }

    #[test]
    fn test_storage_details_are_not_exposed() {
        let body = WebError::Storage(StorageError::Backend("db password wrong".into())).body();
        assert_eq!(body, json!({ "error": "An internal error occurred" }));
    }
}
