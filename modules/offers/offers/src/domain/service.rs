//! Domain service for offers

use std::sync::Arc;

use nftstore_utils::sample_without_replacement;
use offers_sdk::NftOffer;
use tracing::debug;

use super::seed::active_offers;

/// Samples from an immutable offer list.
#[derive(Clone, Debug)]
pub struct Service {
    offers: Arc<[NftOffer]>,
}

impl Service {
    #[must_use]
    pub fn new(offers: impl Into<Arc<[NftOffer]>>) -> Self {
        Self {
            offers: offers.into(),
        }
    }

    #[must_use]
    pub fn with_active_offers() -> Self {
        Self::new(active_offers())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.offers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.offers.is_empty()
    }

    /// Up to `max_results` distinct offers in random order.
    #[must_use]
    pub fn offer(&self, max_results: u32) -> Vec<NftOffer> {
        let offers = sample_without_replacement(&self.offers, max_results, &mut rand::rng());
        debug!(max_results, returned = offers.len(), "sampled offers");
        offers
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn single_offer_is_one_of_the_active_ones() {
        let service = Service::with_active_offers();
        let all = active_offers();
        for _ in 0..50 {
            let got = service.offer(1);
            assert_eq!(got.len(), 1);
            assert!(all.contains(&got[0]));
        }
    }

    #[test]
    fn never_returns_duplicates() {
        let service = Service::with_active_offers();
        for max in 0..=7 {
            let got = service.offer(max);
            assert_eq!(got.len(), (max as usize).min(5));
            let ids: HashSet<i32> = got.iter().map(|o| o.id).collect();
            assert_eq!(ids.len(), got.len());
        }
    }

    #[test]
    fn empty_list_yields_nothing() {
        let service = Service::new(Vec::new());
        assert!(service.is_empty());
        assert!(service.offer(3).is_empty());
    }
}
