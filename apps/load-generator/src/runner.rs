//! The request loop.

use rand::Rng;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::client::HeadClient;
use crate::target::next_step;

/// Outcome counts of a finished run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    /// Requests that got any HTTP response.
    pub answered: u64,
    /// Requests that failed before a response arrived.
    pub failed: u64,
}

/// Issue requests against `frontend_addr` until `cancel` fires.
///
/// A failed request is logged and the loop carries on. Cancellation is
/// honoured between requests and during the pause; a request already in
/// flight runs to completion (bounded by the client timeout) and is counted.
pub async fn run<R: Rng + ?Sized>(
    client: &HeadClient,
    frontend_addr: &str,
    rng: &mut R,
    cancel: &CancellationToken,
) -> RunStats {
    let mut stats = RunStats::default();

    while !cancel.is_cancelled() {
        let step = next_step(rng);
        let url = step.target.url(frontend_addr);

        match client.head(&url).await {
            Ok(status) => {
                stats.answered += 1;
                info!(%url, status = status.as_u16(), "request answered");
            }
            Err(e) => {
                stats.failed += 1;
                warn!(%url, error = %e, "request failed");
            }
        }

        tokio::select! {
            () = cancel.cancelled() => break,
            () = tokio::time::sleep(step.pause) => {}
        }
    }

    info!(answered = stats.answered, failed = stats.failed, "load generator stopped");
    stats
}
