//! API error type and its mapping to HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use catalog::CatalogError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Nothing stored under the requested title
    #[error("no stored entry for {0}")]
    NotStored(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotStored(_) => StatusCode::NOT_FOUND,
            ApiError::Catalog(err) => match err {
                CatalogError::NotFound { .. } => StatusCode::NOT_FOUND,
                CatalogError::Network { .. } => StatusCode::BAD_GATEWAY,
                CatalogError::InvalidTitle => StatusCode::BAD_REQUEST,
                CatalogError::Duplicate { .. } => StatusCode::CONFLICT,
                CatalogError::Storage(_)
                | CatalogError::Migration(_)
                | CatalogError::MissingRow { .. }
                | CatalogError::Corrupt { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = if status.is_server_error() && status != StatusCode::BAD_GATEWAY {
            tracing::error!(error = %self, "Internal error");
            "An internal error occurred".to_string()
        } else {
            self.to_string()
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
