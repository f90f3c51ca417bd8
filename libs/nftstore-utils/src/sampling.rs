//! Uniform sampling without replacement.

use rand::Rng;
use rand::seq::index;

/// Number of elements a sampling request can actually return.
///
/// The result is `min(requested, available)`.
#[must_use]
pub fn sample_count(requested: u32, available: usize) -> usize {
    usize::try_from(requested).map_or(available, |requested| requested.min(available))
}

/// Pick up to `requested` distinct elements of `items`.
///
/// Every subset of size `sample_count(requested, items.len())` is equally
/// likely, and the returned elements are in random order. No element is
/// returned twice.
pub fn sample_without_replacement<T, R>(items: &[T], requested: u32, rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let amount = sample_count(requested, items.len());
    index::sample(rng, items.len(), amount)
        .into_iter()
        .map(|i| items[i].clone())
        .collect()
}
