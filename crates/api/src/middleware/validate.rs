use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use shared::errors::HttpError;
use tracing::warn;
use validator::{Validate, ValidationErrors};

/// JSON body extractor whose rejection is a 400 `{ok:false,message}` body.
/// Field rules are left to [`validate_payload`] so handlers pick when they
/// run.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                warn!("⚠️ Rejected request body: {}", rejection.body_text());
                HttpError::BadRequest(format!(
                    "Invalid request payload: {}",
                    rejection.body_text()
                ))
            })?;

        Ok(Self(value))
    }
}

/// Runs the `validator` rules of `value`, joining failed rule messages into
/// one 400.
pub fn validate_payload<T: Validate>(value: &T) -> Result<(), HttpError> {
    value.validate().map_err(|errors| {
        let message = format_validation_errors(&errors);
        warn!("⚠️ Validation failed: {}", message);
        HttpError::BadRequest(message)
    })
}

fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut messages = Vec::new();

    for (field, field_errors) in errors.field_errors() {
        for error in field_errors {
            let message = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| match error.code.as_ref() {
                    "length" => "Invalid length".to_string(),
                    "range" => "Value out of range".to_string(),
                    _ => format!("Invalid {field}"),
                });
            messages.push(message);
        }
    }

    if messages.is_empty() {
        "Validation failed".to_string()
    } else {
        messages.join("; ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::domain::requests::PaymentIntentPayload;

    #[test]
    fn uses_the_rule_message() {
        let payload = PaymentIntentPayload {
            currency: "x".into(),
            amount: "100".into(),
        };

        let errors = payload.validate().unwrap_err();
        assert_eq!(format_validation_errors(&errors), "Invalid currency");
    }

    #[test]
    fn validate_payload_is_a_bad_request() {
        let payload = PaymentIntentPayload {
            currency: String::new(),
            amount: "100".into(),
        };

        match validate_payload(&payload) {
            Err(HttpError::BadRequest(msg)) => assert_eq!(msg, "Invalid currency"),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
