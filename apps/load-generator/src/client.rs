//! Minimal `HEAD` client over hyper-util.

use std::time::Duration;

use bytes::Bytes;
use http::{Request, StatusCode, Uri};
use http_body_util::Empty;
use hyper_util::client::legacy::Client;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::rt::{TokioExecutor, TokioTimer};

#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error("invalid url '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("failed to connect: {0}")]
    Connect(String),

    #[error("no response within {0:?}")]
    Timeout(Duration),
}

/// Pooled HTTP/1 client that only sends `HEAD`.
#[derive(Clone)]
pub struct HeadClient {
    inner: Client<HttpConnector, Empty<Bytes>>,
    timeout: Duration,
}

impl HeadClient {
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        let mut connector = HttpConnector::new();
        connector.set_connect_timeout(Some(timeout));

        let inner = Client::builder(TokioExecutor::new())
            .pool_timer(TokioTimer::new())
            .build(connector);

        Self { inner, timeout }
    }

    /// Send `HEAD url` and return the response status.
    ///
    /// Any status, including 4xx and 5xx, is a successful exchange.
    ///
    /// # Errors
    /// Fails if the URL is malformed, the connection fails, or no response
    /// arrives in time.
    pub async fn head(&self, url: &str) -> Result<StatusCode, LoadError> {
        let uri: Uri = url.parse().map_err(|e: http::uri::InvalidUri| LoadError::InvalidUrl {
            url: url.to_owned(),
            reason: e.to_string(),
        })?;
        let request = Request::head(uri)
            .body(Empty::<Bytes>::new())
            .map_err(|e| LoadError::InvalidUrl {
                url: url.to_owned(),
                reason: e.to_string(),
            })?;

        let response = tokio::time::timeout(self.timeout, self.inner.request(request))
            .await
            .map_err(|_| LoadError::Timeout(self.timeout))?
            .map_err(|e| LoadError::Connect(e.to_string()))?;

        Ok(response.status())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn malformed_url_is_rejected() {
        let client = HeadClient::new(Duration::from_secs(1));
        let err = client.head("http://bad host/").await.unwrap_err();
        assert!(matches!(err, LoadError::InvalidUrl { .. }));
    }

    #[tokio::test]
    async fn refused_connection_is_an_error() {
        let addr = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap()
        };
        let client = HeadClient::new(Duration::from_secs(1));
        let err = client.head(&format!("http://{addr}/")).await.unwrap_err();
        assert!(matches!(err, LoadError::Connect(_)));
    }
}
