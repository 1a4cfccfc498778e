use std::sync::Arc;

use axum::{
    Extension, Json, Router,
    extract::Path,
    routing::get,
};

use crate::app::dto::ProductResponse;
use crate::app::errors::ApiError;
use crate::app::services::AppServices;

/// Read-only: the catalog has no write routes.
pub fn router() -> Router {
    Router::new()
        .route("/", get(list_products))
        .route("/:id", get(get_product))
}

pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
) -> Json<Vec<ProductResponse>> {
    let items = services
        .catalog
        .list_products()
        .into_iter()
        .map(ProductResponse::from)
        .collect();
    Json(items)
}

pub async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> Result<Json<ProductResponse>, ApiError> {
    let product = services.catalog.get_product(&id)?;
    Ok(Json(ProductResponse::from(product)))
}
