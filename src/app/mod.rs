//! Application-level helpers.
//!
//! URL validation, progress logging, statistics output, and graceful
//! shutdown of background tasks.

mod logging;
mod shutdown;
pub mod statistics;
mod url;

pub use logging::log_progress;
pub use shutdown::shutdown_gracefully;
pub use url::validate_and_normalize_url;
