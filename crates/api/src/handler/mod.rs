mod mac;
mod payment;

use crate::state::AppState;
use anyhow::Result;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{StatusCode, header::CONTENT_TYPE},
    middleware,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Serialize;
use shared::{
    errors::HttpError,
    utils::{metrics_handler, shutdown_signal, track_metrics},
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing::{error, info};
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

pub use self::mac::mac_routes;
pub use self::payment::payment_routes;

#[derive(OpenApi)]
#[openapi(
    paths(
        payment::create_payment_intent,
        mac::get_mac,
    ),
    tags(
        (name = "Payment", description = "Payment intent endpoints"),
        (name = "Mac", description = "Product endpoints"),
    )
)]
struct ApiDoc;

/// Serializes `value` as indented JSON with an `application/json` type.
pub(crate) fn pretty_json<T: Serialize>(
    status: StatusCode,
    value: &T,
) -> Result<Response, HttpError> {
    let body = serde_json::to_string_pretty(value).map_err(|e| {
        error!("❌ Failed to encode response body: {e}");
        HttpError::Internal("Failed to encode response".into())
    })?;

    Ok((status, [(CONTENT_TYPE, "application/json")], body).into_response())
}

pub struct AppRouter;

impl AppRouter {
    pub fn build(app_state: AppState) -> Router {
        let shared_state = Arc::new(app_state);

        let api_router = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .route("/metrics", get(metrics_handler))
            .with_state(shared_state.registry.clone())
            .merge(payment_routes(shared_state.clone()))
            .merge(mac_routes(shared_state.clone()));

        let router_with_layers = api_router
            .layer(middleware::from_fn_with_state(
                shared_state.metrics.clone(),
                track_metrics,
            ))
            .layer(TraceLayer::new_for_http())
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(1024 * 1024));

        let (app_router, api) = router_with_layers.split_for_parts();

        app_router.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
    }

    pub async fn serve(port: u16, app_state: AppState) -> Result<()> {
        let app = Self::build(app_state);

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr).await?;

        info!("🚀 API server running on http://{}", listener.local_addr()?);
        info!("📖 Swagger UI: http://localhost:{port}/swagger-ui");
        info!("📊 Metrics: http://localhost:{port}/metrics");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}
