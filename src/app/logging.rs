//! Progress logging utilities.

use log::info;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Logs progress information about article processing.
///
/// # Arguments
///
/// * `start_time` - The start time of processing
/// * `stored` - Atomic counter of stored articles
/// * `failed` - Atomic counter of failed URLs
/// * `total` - Optional total number of URLs in the input
pub fn log_progress(
    start_time: std::time::Instant,
    stored: &Arc<AtomicUsize>,
    failed: &Arc<AtomicUsize>,
    total: Option<&Arc<AtomicUsize>>,
) {
    let elapsed_secs = start_time.elapsed().as_secs_f64();
    let stored_count = stored.load(Ordering::SeqCst);
    let failed_count = failed.load(Ordering::SeqCst);
    let rate = if elapsed_secs > 0.0 {
        stored_count as f64 / elapsed_secs
    } else {
        0.0
    };

    match total {
        Some(total) => {
            let total_count = total.load(Ordering::SeqCst);
            info!(
                "Stored {}/{} articles ({} failed) in {:.2}s (~{:.2}/sec)",
                stored_count, total_count, failed_count, elapsed_secs, rate
            );
        }
        None => {
            info!(
                "Stored {} articles ({} failed) in {:.2}s (~{:.2}/sec)",
                stored_count, failed_count, elapsed_secs, rate
            );
        }
    }
}
