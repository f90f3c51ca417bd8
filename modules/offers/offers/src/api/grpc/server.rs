//! gRPC Server implementation for offers

use std::sync::Arc;

use tonic::{Request, Response, Status};
use tracing::instrument;

use offers_sdk::{OfferRequest, OfferResponse, Offers, proto};

use crate::domain::Service;

/// gRPC service implementation that wraps the domain Service.
#[derive(Clone)]
pub struct OffersServiceImpl {
    service: Arc<Service>,
}

impl OffersServiceImpl {
    #[must_use]
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[tonic::async_trait]
impl Offers for OffersServiceImpl {
    #[instrument(skip_all, name = "offers.Offer", fields(max_results = request.get_ref().max_results))]
    async fn offer(
        &self,
        request: Request<OfferRequest>,
    ) -> Result<Response<OfferResponse>, Status> {
        let offers = self.service.offer(request.into_inner().max_results);

        Ok(Response::new(OfferResponse {
            offers: offers.iter().map(proto::NftOffer::from).collect(),
        }))
    }
}
