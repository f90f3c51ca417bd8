//! Mapping from page assembly failures to HTTP error pages.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::domain::ServiceError;

use super::render;

/// An HTML error page with its status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageError {
    pub status: StatusCode,
    pub message: String,
}

impl PageError {
    #[must_use]
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

impl From<ServiceError> for PageError {
    fn from(err: ServiceError) -> Self {
        let status = match &err {
            ServiceError::ProductNotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::NoOffer => StatusCode::INTERNAL_SERVER_ERROR,
            e if e.is_timeout() => StatusCode::GATEWAY_TIMEOUT,
            ServiceError::Catalog(_) | ServiceError::Offers(_) | ServiceError::Timeout(_) => {
                StatusCode::BAD_GATEWAY
            }
        };

        if status.is_server_error() {
            tracing::warn!(error = %err, status = status.as_u16(), "page failed");
        } else {
            tracing::debug!(error = %err, status = status.as_u16(), "page not served");
        }

        // Downstream detail stays in the log.
        let message = match &err {
            ServiceError::ProductNotFound(_) => err.to_string(),
            _ => status
                .canonical_reason()
                .unwrap_or("Internal Server Error")
                .to_owned(),
        };
        Self::new(status, message)
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        (self.status, Html(render::error_page(self.status, &self.message))).into_response()
    }
}
