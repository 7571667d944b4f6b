use crate::{
    error::PageError,
    state::{AppState, PageContext},
    templates::{BuyOnceTemplate, format_minor_units},
};
use askama::Template;
use axum::{
    Router,
    extract::{Extension, Path},
    response::Html,
    routing::get,
};
use shared::{abstract_trait::DynMacQueryRepository, errors::RepositoryError};
use std::sync::Arc;
use tracing::{error, warn};

pub async fn buy_once(
    Extension(pages): Extension<PageContext>,
    Extension(repository): Extension<DynMacQueryRepository>,
    Path(id): Path<String>,
) -> Result<Html<String>, PageError> {
    let mac_id = id.parse::<i32>().map_err(|e| {
        warn!("⚠️ Invalid ID parameter {:?}: {}", id, e);
        PageError::InvalidProductId
    })?;

    let mac = repository.get_mac(mac_id).await.map_err(|err| {
        error!("❌ Error getting Mac with ID {}: {}", mac_id, err);
        match err {
            RepositoryError::NotFound => PageError::ProductNotFound,
            _ => PageError::Internal,
        }
    })?;

    let page = BuyOnceTemplate {
        stripe_key: &pages.stripe_key,
        mac: &mac,
        price: format_minor_units(mac.price),
    }
    .render()?;

    Ok(Html(page))
}

pub fn mac_routes(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route("/mac/{id}", get(buy_once))
        .layer(Extension(app_state.pages.clone()))
        .layer(Extension(app_state.mac_query.clone()))
}
