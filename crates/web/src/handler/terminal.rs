use crate::{
    error::PageError,
    purchase::PurchaseRecorder,
    state::{AppState, PageContext},
    templates::{SucceededTemplate, TerminalTemplate, format_minor_units},
};
use askama::Template;
use axum::{
    Form, Router,
    extract::{Extension, rejection::FormRejection},
    response::Html,
    routing::{get, post},
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Debug, Default, Deserialize)]
pub struct PaymentSucceededForm {
    #[serde(rename = "cardholder-name", default)]
    pub cardholder_name: String,
    #[serde(rename = "cardholder-email", default)]
    pub cardholder_email: String,
    #[serde(default)]
    pub payment_intent: String,
    #[serde(default)]
    pub payment_method: String,
    #[serde(default)]
    pub payment_amount: String,
    #[serde(default)]
    pub payment_currency: String,
    #[serde(default)]
    pub product_id: Option<String>,
}

impl PaymentSucceededForm {
    /// The product being bought, if the form came from a product page.
    pub fn product_id(&self) -> Option<i32> {
        self.product_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .and_then(|id| id.parse().ok())
    }
}

pub async fn virtual_terminal(
    Extension(pages): Extension<PageContext>,
) -> Result<Html<String>, PageError> {
    let page = TerminalTemplate {
        stripe_key: &pages.stripe_key,
    }
    .render()?;

    Ok(Html(page))
}

pub async fn payment_succeeded(
    Extension(recorder): Extension<PurchaseRecorder>,
    form: Result<Form<PaymentSucceededForm>, FormRejection>,
) -> Result<Html<String>, PageError> {
    let Form(form) = form.map_err(|rejection| {
        warn!("⚠️ Malformed payment form: {}", rejection.body_text());
        PageError::BadForm(rejection.body_text())
    })?;

    info!("💳 Payment succeeded for intent {}", form.payment_intent);

    let purchase_note = match form.product_id() {
        Some(mac_id) => Some(
            match recorder
                .record(mac_id, &form.payment_intent, &form.payment_method)
                .await
            {
                Ok(recorded) => format!("Order #{} has been recorded.", recorded.order_id),
                Err(err) => format!("Your payment went through, but: {err}"),
            },
        ),
        None => None,
    };

    let amount = form
        .payment_amount
        .parse::<i64>()
        .map(format_minor_units)
        .unwrap_or_else(|_| form.payment_amount.clone());

    let page = SucceededTemplate {
        cardholder: &form.cardholder_name,
        email: &form.cardholder_email,
        payment_intent: &form.payment_intent,
        payment_method: &form.payment_method,
        amount,
        currency: form.payment_currency.to_uppercase(),
        purchase_note,
    }
    .render()?;

    Ok(Html(page))
}

pub fn terminal_routes(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route("/virtual-terminal", get(virtual_terminal))
        .route("/payment-succeeded", post(payment_succeeded))
        .layer(Extension(app_state.pages.clone()))
        .layer(Extension(app_state.purchases.clone()))
}
