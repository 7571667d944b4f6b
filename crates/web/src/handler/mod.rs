mod mac;
mod proxy;
mod terminal;

use crate::state::AppState;
use anyhow::Result;
use axum::{Router, middleware, routing::get};
use shared::utils::{metrics_handler, shutdown_signal, track_metrics};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::info;

pub use self::mac::mac_routes;
pub use self::proxy::proxy_routes;
pub use self::terminal::{PaymentSucceededForm, terminal_routes};

pub struct AppRouter;

impl AppRouter {
    pub fn build(app_state: AppState) -> Router {
        let shared_state = Arc::new(app_state);

        let metrics_router = Router::new()
            .route("/metrics", get(metrics_handler))
            .with_state(shared_state.registry.clone());

        Router::new()
            .merge(metrics_router)
            .merge(terminal_routes(shared_state.clone()))
            .merge(proxy_routes(shared_state.clone()))
            .merge(mac_routes(shared_state.clone()))
            .nest_service("/static", ServeDir::new(&shared_state.static_dir))
            .layer(middleware::from_fn_with_state(
                shared_state.metrics.clone(),
                track_metrics,
            ))
            .layer(TraceLayer::new_for_http())
    }

    pub async fn serve(port: u16, app_state: AppState) -> Result<()> {
        let app = Self::build(app_state);

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr).await?;

        info!("🚀 Web server running on http://{}", listener.local_addr()?);
        info!("💳 Virtual terminal: http://localhost:{port}/virtual-terminal");
        info!("📊 Metrics: http://localhost:{port}/metrics");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}
