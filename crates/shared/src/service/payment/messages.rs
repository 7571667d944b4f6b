use crate::errors::{PaymentError, PaymentErrorKind};
use reqwest::StatusCode;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub(super) struct ProcessorErrorEnvelope {
    #[serde(default)]
    pub error: ProcessorErrorBody,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct ProcessorErrorBody {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub param: Option<String>,
}

fn card_message(code: Option<&str>) -> &'static str {
    match code {
        Some("expired_card") => "Your card is expired",
        Some("incorrect_cvc") => "Incorrect CVC code",
        Some("incorrect_zip") => "Incorrect zip/postal code",
        Some("amount_too_large") => "The amount is too large to charge to your card",
        Some("amount_too_small") => "The amount is too small to charge to your card",
        Some("balance_insufficient") => "Insufficient balance",
        Some("postal_code_invalid") => "Your postal code is invalid",
        _ => "Your card was declined",
    }
}

fn invalid_request_message(code: Option<&str>, param: Option<&str>) -> &'static str {
    match (code, param) {
        (Some("amount_too_large" | "amount_too_small"), _) => card_message(code),
        (_, Some("currency")) => "Unsupported currency",
        (_, Some("amount")) => "Invalid amount",
        (Some("resource_missing"), _) => "Payment not found",
        _ => "Invalid payment request",
    }
}

/// Turns a processor error response into a customer-safe [`PaymentError`].
/// The raw body must be logged by the caller; nothing from it is copied
/// into the returned message.
pub(super) fn classify(status: StatusCode, body: &ProcessorErrorBody) -> PaymentError {
    let code = body.code.as_deref();

    if status == StatusCode::UNAUTHORIZED
        || body.kind.as_deref() == Some("authentication_error")
    {
        return PaymentError::new(
            PaymentErrorKind::Authentication,
            "Payment processor authentication failed",
        );
    }

    match body.kind.as_deref() {
        Some("card_error") => PaymentError::new(PaymentErrorKind::Declined, card_message(code)),
        Some("invalid_request_error") => PaymentError::invalid_request(invalid_request_message(
            code,
            body.param.as_deref(),
        )),
        _ => PaymentError::new(
            PaymentErrorKind::Unexpected,
            "Unable to process payment at this time",
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(kind: &str, code: Option<&str>, param: Option<&str>) -> ProcessorErrorBody {
        ProcessorErrorBody {
            kind: Some(kind.into()),
            code: code.map(Into::into),
            param: param.map(Into::into),
        }
    }

    #[test]
    fn card_errors_use_fixed_messages() {
        let err = classify(
            StatusCode::PAYMENT_REQUIRED,
            &body("card_error", Some("incorrect_cvc"), None),
        );
        assert_eq!(err.kind, PaymentErrorKind::Declined);
        assert_eq!(err.message, "Incorrect CVC code");

        let err = classify(
            StatusCode::PAYMENT_REQUIRED,
            &body("card_error", Some("something_new"), None),
        );
        assert_eq!(err.message, "Your card was declined");
    }

    #[test]
    fn invalid_requests_map_by_parameter() {
        let err = classify(
            StatusCode::BAD_REQUEST,
            &body("invalid_request_error", Some("parameter_invalid"), Some("currency")),
        );
        assert_eq!(err.kind, PaymentErrorKind::InvalidRequest);
        assert_eq!(err.message, "Unsupported currency");
    }

    #[test]
    fn unauthorized_is_authentication_failure() {
        let err = classify(
            StatusCode::UNAUTHORIZED,
            &body("invalid_request_error", None, None),
        );
        assert_eq!(err.kind, PaymentErrorKind::Authentication);
    }

    #[test]
    fn unknown_error_types_are_unexpected() {
        let err = classify(StatusCode::INTERNAL_SERVER_ERROR, &ProcessorErrorBody::default());
        assert_eq!(err.kind, PaymentErrorKind::Unexpected);
    }
}
