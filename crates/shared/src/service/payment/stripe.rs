use super::messages::{ProcessorErrorEnvelope, classify};
use crate::{
    abstract_trait::PaymentGatewayTrait,
    config::StripeConfig,
    domain::responses::{PaymentIntent, PaymentMethod},
    errors::{PaymentError, PaymentErrorKind},
};
use anyhow::Context;
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::{error, info};

/// Payment gateway backed by the Stripe REST API.
#[derive(Clone)]
pub struct StripeClient {
    http: Client,
    secret: String,
    api_base: String,
}

impl std::fmt::Debug for StripeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StripeClient")
            .field("api_base", &self.api_base)
            .finish()
    }
}

impl StripeClient {
    pub fn new(config: &StripeConfig) -> anyhow::Result<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .context("Failed to build payment processor HTTP client")?;

        Ok(Self {
            http,
            secret: config.secret.clone(),
            api_base: config.api_base.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        operation: &str,
        request: RequestBuilder,
    ) -> Result<T, PaymentError> {
        let response = request.bearer_auth(&self.secret).send().await.map_err(|e| {
            error!("❌ {operation}: payment processor request failed: {e}");
            if e.is_timeout() {
                PaymentError::transport("Payment processor did not respond in time")
            } else {
                PaymentError::transport("Payment processor is unreachable")
            }
        })?;

        let status = response.status();

        if status.is_success() {
            return response.json::<T>().await.map_err(|e| {
                error!("❌ {operation}: unreadable payment processor response: {e}");
                PaymentError::new(
                    PaymentErrorKind::Unexpected,
                    "Unexpected response from payment processor",
                )
            });
        }

        let raw = response.text().await.unwrap_or_default();
        error!("❌ {operation}: payment processor returned {status}: {raw}");

        let envelope = serde_json::from_str::<ProcessorErrorEnvelope>(&raw).unwrap_or_default();
        Err(classify(status, &envelope.error))
    }
}

#[async_trait]
impl PaymentGatewayTrait for StripeClient {
    async fn create_payment_intent(
        &self,
        currency: &str,
        amount: i64,
    ) -> Result<PaymentIntent, PaymentError> {
        if amount <= 0 {
            return Err(PaymentError::invalid_request(
                "The amount must be greater than zero",
            ));
        }
        if currency.trim().is_empty() {
            return Err(PaymentError::invalid_request("A currency is required"));
        }

        info!("💳 Creating payment intent for {amount} {currency}");

        let params = [
            ("amount", amount.to_string()),
            ("currency", currency.to_lowercase()),
            ("payment_method_types[]", "card".to_string()),
        ];

        let request = self
            .http
            .post(self.url("/v1/payment_intents"))
            .form(&params);

        let intent: PaymentIntent = self.send("create_payment_intent", request).await?;

        info!("✅ Created payment intent {}", intent.id);
        Ok(intent)
    }

    async fn retrieve_payment_intent(&self, id: &str) -> Result<PaymentIntent, PaymentError> {
        let id = object_id(id, "pi_", "Payment not found")?;

        let request = self.http.get(self.url(&format!("/v1/payment_intents/{id}")));
        let intent: PaymentIntent = self.send("retrieve_payment_intent", request).await?;

        expect_object("retrieve_payment_intent", &intent.object, "payment_intent")?;
        Ok(intent)
    }

    async fn retrieve_payment_method(&self, id: &str) -> Result<PaymentMethod, PaymentError> {
        let id = object_id(id, "pm_", "Payment method not found")?;

        let request = self.http.get(self.url(&format!("/v1/payment_methods/{id}")));
        let method: PaymentMethod = self.send("retrieve_payment_method", request).await?;

        expect_object("retrieve_payment_method", &method.object, "payment_method")?;
        Ok(method)
    }
}

/// Accepts only `<prefix>` followed by ASCII alphanumerics or `_`, so a
/// browser-supplied id always stays a single path segment.
fn object_id<'a>(id: &'a str, prefix: &str, not_found: &str) -> Result<&'a str, PaymentError> {
    let valid = id.strip_prefix(prefix).is_some_and(|rest| {
        !rest.is_empty() && rest.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
    });

    if valid {
        Ok(id)
    } else {
        Err(PaymentError::invalid_request(not_found))
    }
}

fn expect_object(operation: &str, found: &str, expected: &str) -> Result<(), PaymentError> {
    if found == expected {
        return Ok(());
    }

    error!("❌ {operation}: expected a {expected} object, got {found:?}");
    Err(PaymentError::new(
        PaymentErrorKind::Unexpected,
        "Unexpected response from payment processor",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_ids_must_be_a_single_prefixed_token() {
        assert_eq!(object_id("pi_3Abc_9", "pi_", "nf").unwrap(), "pi_3Abc_9");

        let rejected = [
            "",
            "pi_",
            "pm_123",
            "../charges/ch_1",
            "pi_1/../../charges/ch_1",
            "pi_1?x=1",
            "pi_1%2F",
        ];
        for id in rejected {
            let err = object_id(id, "pi_", "Payment not found").unwrap_err();
            assert_eq!(err.kind, PaymentErrorKind::InvalidRequest, "{id}");
            assert_eq!(err.message, "Payment not found");
        }
    }
}
