//! HTTP client initialization.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, CONNECTION, DNT};
use reqwest::ClientBuilder;

use crate::config::{HarvestConfig, DEFAULT_ACCEPT_LANGUAGE};
use crate::error_handling::InitializationError;

/// Initializes the HTTP client used for article fetching.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent from config
/// - Browser-like default headers (Accept, Accept-Language, DNT)
/// - Per-request timeout from config
/// - Redirect following enabled (reqwest default, up to 10 hops)
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(config: &HarvestConfig) -> Result<Arc<reqwest::Client>, InitializationError> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("*/*"));
    headers.insert(
        ACCEPT_LANGUAGE,
        HeaderValue::from_static(DEFAULT_ACCEPT_LANGUAGE),
    );
    headers.insert(DNT, HeaderValue::from_static("1"));
    headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));

    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(config.user_agent.clone())
        .default_headers(headers)
        .build()?;
    Ok(Arc::new(client))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_client_succeeds_with_defaults() {
        let config = HarvestConfig::default();
        assert!(init_client(&config).is_ok());
    }

    #[test]
    fn test_init_client_custom_user_agent() {
        let config = HarvestConfig {
            user_agent: "test-agent/1.0".to_string(),
            ..Default::default()
        };
        assert!(init_client(&config).is_ok());
    }
}
