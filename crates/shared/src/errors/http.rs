use crate::errors::{
    error::ErrorResponse, payment::PaymentError, repository::RepositoryError,
};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug)]
pub enum HttpError {
    BadRequest(String),
    NotFound(String),
    Internal(String),
}

impl From<RepositoryError> for HttpError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => HttpError::NotFound("Not found".into()),
            RepositoryError::Duplicate => HttpError::BadRequest("Already exists".into()),
            RepositoryError::Timeout(_) => {
                HttpError::Internal("Database did not respond in time".into())
            }
            RepositoryError::Sqlx(_) => HttpError::Internal("Database error".into()),
        }
    }
}

impl From<PaymentError> for HttpError {
    fn from(err: PaymentError) -> Self {
        if err.is_transport() {
            HttpError::Internal(err.message)
        } else {
            HttpError::BadRequest(err.message)
        }
    }
}

impl HttpError {
    pub fn status(&self) -> StatusCode {
        match self {
            HttpError::BadRequest(_) => StatusCode::BAD_REQUEST,
            HttpError::NotFound(_) => StatusCode::NOT_FOUND,
            HttpError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();
        let msg = match self {
            HttpError::BadRequest(msg) | HttpError::NotFound(msg) | HttpError::Internal(msg) => msg,
        };

        (status, Json(ErrorResponse::new(msg))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::PaymentErrorKind;
    use std::time::Duration;

    #[test]
    fn repository_errors_map_to_status_codes() {
        assert_eq!(
            HttpError::from(RepositoryError::NotFound).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            HttpError::from(RepositoryError::Timeout(Duration::from_secs(3))).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            HttpError::from(RepositoryError::from(sqlx::Error::RowNotFound)).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            HttpError::from(RepositoryError::Duplicate).status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn payment_errors_keep_safe_message() {
        let declined = PaymentError::new(PaymentErrorKind::Declined, "Your card was declined");
        match HttpError::from(declined) {
            HttpError::BadRequest(msg) => assert_eq!(msg, "Your card was declined"),
            other => panic!("unexpected mapping: {other:?}"),
        }

        let unreachable = PaymentError::transport("Payment processor is unreachable");
        assert_eq!(
            HttpError::from(unreachable).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
