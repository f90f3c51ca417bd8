//! Load generator for the storefront.
//!
//! Issues one `HEAD` request at a time against a random page, then pauses
//! for a random number of seconds. Short pauses hit the homepage, longer ones
//! a product page.

pub mod client;
pub mod config;
pub mod runner;
pub mod target;

pub use client::{HeadClient, LoadError};
pub use config::LoadGenConfig;
pub use runner::{RunStats, run};
pub use target::{Step, Target, next_step};
