#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

//! Small helpers shared by the nftstore services.
//!
//! - [`sampling`] draws uniform samples without replacement from a fixed list.
//! - [`humantime_serde`] reads and writes `Duration` config values as
//!   human-readable strings such as `"250ms"` or `"2s"`.

pub mod humantime_serde;
pub mod sampling;

pub use sampling::{sample_count, sample_without_replacement};
