use crate::{
    handler::pretty_json,
    middleware::validate::{JsonBody, validate_payload},
    state::AppState,
};
use axum::{
    extract::Extension,
    http::StatusCode,
    response::Response,
    routing::post,
};
use shared::{
    abstract_trait::DynPaymentGateway,
    config::StripeConfig,
    domain::{requests::PaymentIntentPayload, responses::PaymentIntent},
    errors::{ErrorResponse, HttpError},
};
use std::sync::Arc;
use tracing::{error, info, warn};
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    post,
    path = "/api/payment-intent",
    tag = "Payment",
    request_body = PaymentIntentPayload,
    responses(
        (status = 200, description = "Payment intent created", body = PaymentIntent),
        (status = 400, description = "Invalid payload or rejected by the processor", body = ErrorResponse),
        (status = 500, description = "Processor not configured or unreachable", body = ErrorResponse)
    )
)]
pub async fn create_payment_intent(
    Extension(gateway): Extension<DynPaymentGateway>,
    Extension(stripe): Extension<StripeConfig>,
    JsonBody(payload): JsonBody<PaymentIntentPayload>,
) -> Result<Response, HttpError> {
    let amount = payload.parse_amount().ok_or_else(|| {
        warn!("⚠️ Rejected non-numeric amount: {:?}", payload.amount);
        HttpError::BadRequest("Invalid amount".into())
    })?;

    if !stripe.has_secret() {
        error!("❌ STRIPE_SECRET is empty, refusing to create a payment intent");
        return Err(HttpError::Internal(
            "Stripe secret key is not configured. Please set STRIPE_SECRET environment variable."
                .into(),
        ));
    }

    validate_payload(&payload)?;

    let intent = gateway
        .create_payment_intent(&payload.currency, amount)
        .await
        .map_err(|err| {
            error!(
                "❌ Payment intent for {} {} failed: {:?}",
                amount, payload.currency, err.kind
            );
            HttpError::from(err)
        })?;

    info!("✅ Created payment intent {} for {} {}", intent.id, amount, payload.currency);

    pretty_json(StatusCode::OK, &intent)
}

pub fn payment_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/payment-intent", post(create_payment_intent))
        .layer(Extension(app_state.payment_gateway.clone()))
        .layer(Extension(app_state.stripe.clone()))
}
