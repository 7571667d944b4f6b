use crate::{handler::pretty_json, state::AppState};
use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::Response,
    routing::get,
};
use shared::{
    abstract_trait::DynMacQueryRepository,
    errors::{ErrorResponse, HttpError, RepositoryError},
    model::Mac,
};
use std::sync::Arc;
use tracing::{error, warn};
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/mac/{id}",
    tag = "Mac",
    params(("id" = i32, Path, description = "Mac ID")),
    responses(
        (status = 200, description = "Mac details", body = Mac),
        (status = 400, description = "Non-numeric ID", body = ErrorResponse),
        (status = 404, description = "Mac not found", body = ErrorResponse),
        (status = 500, description = "Database failure", body = ErrorResponse)
    )
)]
pub async fn get_mac(
    Extension(repository): Extension<DynMacQueryRepository>,
    Path(id): Path<String>,
) -> Result<Response, HttpError> {
    let id = id.parse::<i32>().map_err(|_| {
        warn!("⚠️ Rejected non-numeric mac id: {:?}", id);
        HttpError::BadRequest("Invalid product ID".into())
    })?;

    let mac = repository.get_mac(id).await.map_err(|err| match err {
        RepositoryError::NotFound => HttpError::NotFound("Product not found".into()),
        other => {
            error!("❌ Failed to load mac {}: {}", id, other);
            HttpError::from(other)
        }
    })?;

    pretty_json(StatusCode::OK, &mac)
}

pub fn mac_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/mac/{id}", get(get_mac))
        .layer(Extension(app_state.mac_query.clone()))
}
