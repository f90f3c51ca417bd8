//! Domain service for the storefront
//!
//! Fans every page out to the catalog and offers services concurrently and
//! assembles the results into page models.

use std::sync::Arc;
use std::time::Duration;

use catalog_sdk::{CatalogClientV1, CatalogError, CatalogItem, CatalogQuery, is_sample_sentinel};
use offers_sdk::{NftOffer, OffersClientV1, OffersError};
use tracing::{debug, instrument};

/// Error type for page assembly.
#[derive(thiserror::Error, Debug)]
pub enum ServiceError {
    #[error("catalog call failed: {0}")]
    Catalog(#[from] CatalogError),

    #[error("offers call failed: {0}")]
    Offers(#[from] OffersError),

    /// The fan-out as a whole did not finish within the request timeout.
    #[error("downstream calls did not finish within {0:?}")]
    Timeout(Duration),

    #[error("product '{0}' not found")]
    ProductNotFound(String),

    /// The offers service returned nothing, so the page cannot be rendered.
    #[error("no offer available")]
    NoOffer,
}

impl ServiceError {
    /// Whether the failure is a downstream deadline rather than a broken
    /// dependency.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(
            self,
            Self::Timeout(_)
                | Self::Catalog(CatalogError::DeadlineExceeded(_))
                | Self::Offers(OffersError::DeadlineExceeded(_))
        )
    }
}

/// Everything the homepage shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomePage {
    pub items: Vec<CatalogItem>,
    pub offer: NftOffer,
}

/// Everything a product page shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductPage {
    pub item: CatalogItem,
    pub offer: NftOffer,
}

/// Page assembly over the two downstream clients.
pub struct Service {
    catalog: Arc<dyn CatalogClientV1>,
    offers: Arc<dyn OffersClientV1>,
    homepage_items: u32,
    request_timeout: Duration,
}

impl Service {
    #[must_use]
    pub fn new(
        catalog: Arc<dyn CatalogClientV1>,
        offers: Arc<dyn OffersClientV1>,
        homepage_items: u32,
        request_timeout: Duration,
    ) -> Self {
        Self {
            catalog,
            offers,
            homepage_items,
            request_timeout,
        }
    }

    /// A catalog sample plus one offer.
    ///
    /// # Errors
    /// Fails if either call fails, the deadline passes, or no offer comes
    /// back.
    #[instrument(skip(self))]
    pub async fn homepage(&self) -> Result<HomePage, ServiceError> {
        let (items, offer) = self
            .fan_out(CatalogQuery::sample(self.homepage_items))
            .await?;
        debug!(items = items.len(), offer = offer.id, "homepage assembled");
        Ok(HomePage { items, offer })
    }

    /// One product plus one offer.
    ///
    /// # Errors
    /// [`ServiceError::ProductNotFound`] if the catalog has no such product
    /// or `product_id` is the reserved sampling id; otherwise as
    /// [`Service::homepage`].
    #[instrument(skip(self))]
    pub async fn product_page(&self, product_id: &str) -> Result<ProductPage, ServiceError> {
        if is_sample_sentinel(product_id) {
            return Err(ServiceError::ProductNotFound(product_id.to_owned()));
        }

        let (items, offer) = self.fan_out(CatalogQuery::by_id(product_id)).await?;
        let item = items
            .into_iter()
            .next()
            .ok_or_else(|| ServiceError::ProductNotFound(product_id.to_owned()))?;
        Ok(ProductPage { item, offer })
    }

    /// Issue the catalog query and a single-offer request concurrently.
    ///
    /// The first failure drops the other call; so does the request timeout.
    async fn fan_out(
        &self,
        query: CatalogQuery,
    ) -> Result<(Vec<CatalogItem>, NftOffer), ServiceError> {
        let catalog = async { self.catalog.catalog(query).await.map_err(ServiceError::from) };
        let offers = async { self.offers.offer(1).await.map_err(ServiceError::from) };

        let (items, offers) =
            tokio::time::timeout(self.request_timeout, async { tokio::try_join!(catalog, offers) })
                .await
                .map_err(|_| ServiceError::Timeout(self.request_timeout))??;

        let offer = offers.into_iter().next().ok_or(ServiceError::NoOffer)?;
        Ok((items, offer))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use catalog_sdk::Price;

    use super::*;

    fn sheep(n: u8) -> CatalogItem {
        CatalogItem {
            id: format!("electric-sheep{n:02}"),
            title: format!("Sheep {n}"),
            author: "Test".to_owned(),
            description: "A test sheep.".to_owned(),
            rating: 3,
            price: Price::new(1, 50),
        }
    }

    struct FakeCatalog {
        items: Vec<CatalogItem>,
        error: Option<CatalogError>,
        delay: Duration,
        calls: AtomicUsize,
    }

    impl FakeCatalog {
        fn with_items(items: Vec<CatalogItem>) -> Self {
            Self {
                items,
                error: None,
                delay: Duration::ZERO,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl CatalogClientV1 for FakeCatalog {
        async fn catalog(&self, query: CatalogQuery) -> Result<Vec<CatalogItem>, CatalogError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(self.delay).await;
            if let Some(err) = &self.error {
                return Err(err.clone());
            }
            Ok(match query {
                CatalogQuery::Sample { max_results } => {
                    self.items.iter().take(max_results as usize).cloned().collect()
                }
                CatalogQuery::ById { product_id } => self
                    .items
                    .iter()
                    .filter(|i| i.id == product_id)
                    .cloned()
                    .collect(),
            })
        }
    }

    struct FakeOffers {
        offers: Vec<NftOffer>,
        error: Option<OffersError>,
        delay: Duration,
    }

    #[async_trait]
    impl OffersClientV1 for FakeOffers {
        async fn offer(&self, max_results: u32) -> Result<Vec<NftOffer>, OffersError> {
            tokio::time::sleep(self.delay).await;
            if let Some(err) = &self.error {
                return Err(err.clone());
            }
            Ok(self.offers.iter().take(max_results as usize).cloned().collect())
        }
    }

    fn one_offer() -> FakeOffers {
        FakeOffers {
            offers: vec![NftOffer::new(1, "Buy 3 Nfts and get the 4th for free!")],
            error: None,
            delay: Duration::ZERO,
        }
    }

    fn service(catalog: FakeCatalog, offers: FakeOffers) -> Service {
        Service::new(Arc::new(catalog), Arc::new(offers), 12, Duration::from_secs(5))
    }

    #[tokio::test]
    async fn homepage_has_items_and_offer() {
        let svc = service(FakeCatalog::with_items((1..=12).map(sheep).collect()), one_offer());
        let page = svc.homepage().await.unwrap();
        assert_eq!(page.items.len(), 12);
        assert_eq!(page.offer.id, 1);
    }

    #[tokio::test]
    async fn product_page_finds_item() {
        let svc = service(FakeCatalog::with_items((1..=12).map(sheep).collect()), one_offer());
        let page = svc.product_page("electric-sheep05").await.unwrap();
        assert_eq!(page.item, sheep(5));
    }

    #[tokio::test]
    async fn unknown_product_is_not_found() {
        let svc = service(FakeCatalog::with_items((1..=12).map(sheep).collect()), one_offer());
        let err = svc.product_page("nonexistent").await.unwrap_err();
        assert!(matches!(err, ServiceError::ProductNotFound(ref id) if id == "nonexistent"));
    }

    #[tokio::test]
    async fn sampling_id_is_not_a_product() {
        let catalog = Arc::new(FakeCatalog::with_items((1..=12).map(sheep).collect()));
        let svc = Service::new(
            catalog.clone(),
            Arc::new(one_offer()),
            12,
            Duration::from_secs(5),
        );
        let err = svc.product_page("dummy").await.unwrap_err();
        assert!(matches!(err, ServiceError::ProductNotFound(_)));
        assert_eq!(catalog.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn empty_offers_fail_the_page() {
        let offers = FakeOffers {
            offers: Vec::new(),
            ..one_offer()
        };
        let svc = service(FakeCatalog::with_items(vec![sheep(1)]), offers);
        assert!(matches!(svc.homepage().await, Err(ServiceError::NoOffer)));
    }

    #[tokio::test]
    async fn downstream_errors_propagate() {
        let mut catalog = FakeCatalog::with_items(Vec::new());
        catalog.error = Some(CatalogError::Unavailable("connection refused".to_owned()));
        let svc = service(catalog, one_offer());
        let err = svc.homepage().await.unwrap_err();
        assert!(matches!(err, ServiceError::Catalog(CatalogError::Unavailable(_))));
        assert!(!err.is_timeout());

        let offers = FakeOffers {
            error: Some(OffersError::DeadlineExceeded("slow".to_owned())),
            ..one_offer()
        };
        let svc = service(FakeCatalog::with_items(vec![sheep(1)]), offers);
        let err = svc.homepage().await.unwrap_err();
        assert!(err.is_timeout());
    }

    #[tokio::test(start_paused = true)]
    async fn calls_run_concurrently() {
        let mut catalog = FakeCatalog::with_items(vec![sheep(1)]);
        catalog.delay = Duration::from_millis(300);
        let offers = FakeOffers {
            delay: Duration::from_millis(300),
            ..one_offer()
        };
        let svc = service(catalog, offers);

        let start = tokio::time::Instant::now();
        svc.homepage().await.unwrap();
        assert!(start.elapsed() < Duration::from_millis(600));
    }

    #[tokio::test(start_paused = true)]
    async fn slow_downstream_hits_request_timeout() {
        let mut catalog = FakeCatalog::with_items(vec![sheep(1)]);
        catalog.delay = Duration::from_secs(60);
        let svc = Service::new(
            Arc::new(catalog),
            Arc::new(one_offer()),
            12,
            Duration::from_secs(1),
        );

        let err = svc.homepage().await.unwrap_err();
        assert!(matches!(err, ServiceError::Timeout(d) if d == Duration::from_secs(1)));
        assert!(err.is_timeout());
    }
}
