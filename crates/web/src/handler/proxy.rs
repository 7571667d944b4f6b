use crate::state::{ApiUpstream, AppState};
use axum::{
    Router,
    body::{Body, to_bytes},
    extract::Extension,
    http::{HeaderName, HeaderValue, header::CONTENT_TYPE},
    response::Response,
    routing::post,
};
use shared::errors::HttpError;
use std::sync::Arc;
use tracing::{error, info};

const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Connection-scoped headers that must not be relayed.
const HOP_BY_HOP: &[&str] = &[
    "connection",
    "keep-alive",
    "proxy-connection",
    "transfer-encoding",
    "te",
    "trailer",
    "upgrade",
];

fn is_relayed(name: &HeaderName) -> bool {
    *name != CONTENT_TYPE && !HOP_BY_HOP.contains(&name.as_str())
}

/// Forwards the raw body to the api server and relays its answer. The
/// upstream body is streamed through untouched.
pub async fn payment_intent_proxy(
    Extension(upstream): Extension<ApiUpstream>,
    body: Body,
) -> Result<Response, HttpError> {
    let body = to_bytes(body, MAX_BODY_BYTES).await.map_err(|e| {
        error!("❌ Error reading request body: {e}");
        HttpError::BadRequest("Bad Request: Invalid request body".into())
    })?;

    let url = format!("{}/api/payment-intent", upstream.base_url);

    let response = upstream
        .client
        .post(&url)
        .header(CONTENT_TYPE, "application/json")
        .body(body)
        .send()
        .await
        .map_err(|e| {
            error!("❌ Error making request to API: {e}");
            HttpError::Internal(format!(
                "Internal Server Error: Failed to connect to API server: {e}"
            ))
        })?;

    let status = response.status();
    info!("↩️ API answered payment-intent with {}", status);

    let mut builder = Response::builder().status(status);

    if let Some(headers) = builder.headers_mut() {
        for (name, value) in response.headers().iter().filter(|(n, _)| is_relayed(n)) {
            headers.append(name.clone(), value.clone());
        }
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    }

    builder
        .body(Body::from_stream(response.bytes_stream()))
        .map_err(|e| {
            error!("❌ Error building proxied response: {e}");
            HttpError::Internal("Internal Server Error: Failed to relay API response".into())
        })
}

pub fn proxy_routes(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/payment-intent", post(payment_intent_proxy))
        .layer(Extension(app_state.upstream.clone()))
}
