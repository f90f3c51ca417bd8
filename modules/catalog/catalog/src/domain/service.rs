//! Domain service for the catalog
//!
//! Answers sampled-listing and lookup-by-id queries over an immutable
//! product list.

use std::sync::Arc;
use std::time::Duration;

use catalog_sdk::{CatalogItem, CatalogQuery};
use nftstore_utils::sample_without_replacement;
use tracing::debug;

use super::seed::seed_catalog;

/// Stateless query handler over a catalog injected at construction.
///
/// Cloning shares the same backing list.
#[derive(Clone, Debug)]
pub struct Service {
    items: Arc<[CatalogItem]>,
    injected_latency: Duration,
}

impl Service {
    /// Create a service over `items`, delaying every query by
    /// `injected_latency` (zero disables the delay).
    #[must_use]
    pub fn new(items: impl Into<Arc<[CatalogItem]>>, injected_latency: Duration) -> Self {
        Self {
            items: items.into(),
            injected_latency,
        }
    }

    /// Create a service over the built-in catalog.
    #[must_use]
    pub fn with_seed_catalog(injected_latency: Duration) -> Self {
        Self::new(seed_catalog(), injected_latency)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Answer a catalog query.
    ///
    /// Waits out the injected latency first. The wait is a timer, not a
    /// blocked thread, so a cancelled call stops waiting immediately.
    pub async fn query(&self, query: &CatalogQuery) -> Vec<CatalogItem> {
        if !self.injected_latency.is_zero() {
            debug!(latency = ?self.injected_latency, "applying injected latency");
            tokio::time::sleep(self.injected_latency).await;
        }

        match query {
            CatalogQuery::Sample { max_results } => self.sample(*max_results),
            CatalogQuery::ById { product_id } => self.find(product_id),
        }
    }

    /// Up to `max_results` distinct items in random order.
    #[must_use]
    pub fn sample(&self, max_results: u32) -> Vec<CatalogItem> {
        let items = sample_without_replacement(&self.items, max_results, &mut rand::rng());
        debug!(max_results, returned = items.len(), "sampled catalog");
        items
    }

    /// The item with `product_id`, or nothing.
    #[must_use]
    pub fn find(&self, product_id: &str) -> Vec<CatalogItem> {
        let found: Vec<CatalogItem> = self
            .items
            .iter()
            .find(|item| item.id == product_id)
            .cloned()
            .into_iter()
            .collect();
        debug!(product_id, found = !found.is_empty(), "looked up product");
        found
    }
}
