//! Error mapping for the HTTP front door.
//!
//! Every failure in a handler, whatever its origin, surfaces to the client
//! as a 500 with the raw error message as a plain-text body. No error is
//! retried and none is fatal to the process.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::classify::ClassifyError;
use crate::store::StoreError;

/// Result type for request handlers
pub type AppResult<T> = Result<T, AppError>;

/// Errors surfaced by the HTTP front door
#[derive(Debug, Error)]
pub enum AppError {
    /// Remote fetch or decode failed
    #[error("{0}")]
    Classify(#[from] ClassifyError),

    /// Store liveness or insert failed
    #[error("{0}")]
    Store(#[from] StoreError),

    /// Page template failed to render
    #[error("{0}")]
    Render(#[from] askama::Error),
}

impl AppError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            // Everything maps to 500: the caller is not distinguished from
            // the server on this surface.
            AppError::Classify(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status_code(), self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::BookStore;

    #[test]
    fn test_all_errors_map_to_500() {
        let store = BookStore::open_in_memory().unwrap();
        let err = AppError::from(store.ping().unwrap_err());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_body_is_the_raw_message() {
        let store = BookStore::open_in_memory().unwrap();
        let store_err = store.ping().unwrap_err();
        let message = store_err.to_string();

        let err = AppError::from(store_err);
        assert_eq!(err.to_string(), message);
    }
}
