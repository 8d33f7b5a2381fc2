use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use vocab_core::LookupError;

use crate::routes::LookupResponse;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Word parameter is required")]
    MissingWord,

    #[error(transparent)]
    Lookup(#[from] LookupError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingWord | AppError::Lookup(LookupError::InvalidWord) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Lookup(LookupError::NotFound { .. }) => StatusCode::NOT_FOUND,
            AppError::Lookup(LookupError::Upstream(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Error processing word: {self}");
        }

        (status, Json(LookupResponse::failure(self.to_string()))).into_response()
    }
}
