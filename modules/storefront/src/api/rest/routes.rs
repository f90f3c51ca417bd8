//! Route registration for the storefront

use std::sync::Arc;

use axum::routing::get;
use axum::{Extension, Router};
use tower_http::trace::TraceLayer;
use tracing::field::Empty;

use crate::domain::Service;

use super::handlers;

/// Build the storefront router.
///
/// `GET` routes also answer `HEAD`.
#[must_use]
pub fn router(service: Arc<Service>) -> Router {
    Router::new()
        .route("/", get(handlers::homepage))
        .route("/product/{product_id}", get(handlers::product_page))
        .layer(Extension(service))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|req: &axum::http::Request<axum::body::Body>| {
                    tracing::info_span!(
                        "http_request",
                        method = %req.method(),
                        uri = %req.uri().path(),
                        status = Empty,
                        latency_ms = Empty,
                    )
                })
                .on_response(
                    |res: &axum::http::Response<axum::body::Body>,
                     latency: std::time::Duration,
                     span: &tracing::Span| {
                        span.record("status", res.status().as_u16());
                        span.record("latency_ms", latency.as_millis());
                    },
                ),
        )
}
