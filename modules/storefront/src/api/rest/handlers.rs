//! REST handlers for the storefront

use std::sync::Arc;

use axum::Extension;
use axum::extract::Path;
use axum::response::Html;

use crate::domain::Service;

use super::error::PageError;
use super::render;

/// Handler for GET /
pub async fn homepage(
    Extension(service): Extension<Arc<Service>>,
) -> Result<Html<String>, PageError> {
    let page = service.homepage().await?;
    Ok(Html(render::homepage(&page)))
}

/// Handler for GET /product/{product_id}
pub async fn product_page(
    Extension(service): Extension<Arc<Service>>,
    Path(product_id): Path<String>,
) -> Result<Html<String>, PageError> {
    tracing::info!(%product_id, "loading product page");
    let page = service.product_page(&product_id).await?;
    Ok(Html(render::product_page(&page)))
}
