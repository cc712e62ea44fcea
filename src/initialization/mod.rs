//! Resource initialization.
//!
//! This module provides initialization functions for the logger, the HTTP
//! client, and the concurrency semaphore.

mod client;
mod logger;

use std::sync::Arc;

use tokio::sync::Semaphore;

pub use client::init_client;
pub use logger::init_logger_with;

/// Initializes the semaphore bounding concurrent fetches.
pub fn init_semaphore(max_concurrency: usize) -> Arc<Semaphore> {
    Arc::new(Semaphore::new(max_concurrency))
}
