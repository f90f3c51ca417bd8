//! Tokio runtime sized from configuration.

use tokio::runtime::{Builder, Runtime};

/// Build a multi-threaded runtime with exactly `workers` worker threads.
///
/// `thread_name` prefixes every worker thread, which keeps stack traces and
/// `top -H` output readable.
///
/// # Errors
/// Returns the underlying I/O error if the runtime cannot be created.
pub fn build_runtime(workers: usize, thread_name: &str) -> std::io::Result<Runtime> {
    Builder::new_multi_thread()
        .worker_threads(workers.max(1))
        .thread_name(thread_name)
        .enable_all()
        .build()
}
