//! gRPC Server implementation for the catalog
//!
//! Translates wire requests into domain queries and delegates to the
//! domain Service.

use std::sync::Arc;

use tonic::{Request, Response, Status};
use tracing::instrument;

use catalog_sdk::{Catalog, CatalogQuery, CatalogRequest, CatalogResponse, proto};

use crate::domain::Service;

/// gRPC service implementation that wraps the domain Service.
#[derive(Clone)]
pub struct CatalogServiceImpl {
    service: Arc<Service>,
}

impl CatalogServiceImpl {
    /// Create a new Catalog implementation with the given Service.
    #[must_use]
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[tonic::async_trait]
impl Catalog for CatalogServiceImpl {
    #[instrument(
        skip_all,
        name = "catalog.Catalog",
        fields(max_results = request.get_ref().max_results, product_id = %request.get_ref().product_id)
    )]
    async fn catalog(
        &self,
        request: Request<CatalogRequest>,
    ) -> Result<Response<CatalogResponse>, Status> {
        let query = CatalogQuery::from(request.into_inner());

        let items = self.service.query(&query).await;

        Ok(Response::new(CatalogResponse {
            items: items.iter().map(proto::CatalogItem::from).collect(),
        }))
    }
}
