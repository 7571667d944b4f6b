use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

/// Failures of page-rendering endpoints. They answer with a plain-text
/// body, unlike the JSON endpoints.
#[derive(Debug, Error)]
pub enum PageError {
    #[error("Invalid product ID")]
    InvalidProductId,
    #[error("Product not found")]
    ProductNotFound,
    #[error("Bad Request: {0}")]
    BadForm(String),
    #[error("Internal server error")]
    Internal,
}

impl PageError {
    pub fn status(&self) -> StatusCode {
        match self {
            PageError::InvalidProductId | PageError::BadForm(_) => StatusCode::BAD_REQUEST,
            PageError::ProductNotFound => StatusCode::NOT_FOUND,
            PageError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<askama::Error> for PageError {
    fn from(err: askama::Error) -> Self {
        error!("❌ Failed to render template: {}", err);
        PageError::Internal
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}
