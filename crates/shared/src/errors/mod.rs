mod error;
mod http;
mod payment;
mod repository;

pub use self::error::ErrorResponse;
pub use self::http::HttpError;
pub use self::payment::{PaymentError, PaymentErrorKind};
pub use self::repository::RepositoryError;
