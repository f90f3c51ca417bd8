//! What to request next and how long to wait afterwards.

use std::time::Duration;

use rand::Rng;

/// Shortest pause between requests, in seconds.
pub const MIN_PAUSE_SECS: u64 = 1;
/// Longest pause between requests, in seconds.
pub const MAX_PAUSE_SECS: u64 = 5;
/// Pauses shorter than this go to the homepage.
pub const HOMEPAGE_BELOW_SECS: u64 = 2;
/// Products are numbered `electric-sheep01` to `electric-sheep12`.
pub const PRODUCT_COUNT: u8 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Homepage,
    Product(u8),
}

impl Target {
    #[must_use]
    pub fn path(self) -> String {
        match self {
            Self::Homepage => "/".to_owned(),
            Self::Product(n) => format!("/product/electric-sheep{n:02}"),
        }
    }

    /// Absolute URL on `frontend_addr` (`host` or `host:port`).
    #[must_use]
    pub fn url(self, frontend_addr: &str) -> String {
        format!("http://{frontend_addr}{}", self.path())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub target: Target,
    pub pause: Duration,
}

/// Draw the next request and the pause that follows it.
#[must_use]
pub fn next_step<R: Rng + ?Sized>(rng: &mut R) -> Step {
    let secs = rng.random_range(MIN_PAUSE_SECS..=MAX_PAUSE_SECS);
    let target = if secs < HOMEPAGE_BELOW_SECS {
        Target::Homepage
    } else {
        Target::Product(rng.random_range(1..=PRODUCT_COUNT))
    };
    Step {
        target,
        pause: Duration::from_secs(secs),
    }
}
