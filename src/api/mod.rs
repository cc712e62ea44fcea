//! Read API for stored articles.
//!
//! Provides two endpoints:
//! - `GET /articles` - list of article summaries, optionally filtered with
//!   `?source=<substring>` (case-insensitive)
//! - `GET /articles/{id}` - full article detail, 404 when absent
//!
//! The server binds to localhost only; fronting it publicly is the
//! deployment's concern.

mod handlers;
mod types;

use axum::routing::get;
use axum::Router;

use handlers::{get_article_handler, list_articles_handler};
pub use types::{ApiState, ArticleDetailResponse, ArticleSummaryResponse, ErrorResponse};

/// Builds the API router with its state attached.
pub fn api_router(state: ApiState) -> Router {
    Router::new()
        .route("/articles", get(list_articles_handler))
        .route("/articles/{id}", get(get_article_handler))
        .with_state(state)
}

/// Creates and starts the API server.
pub async fn start_api_server(port: u16, state: ApiState) -> Result<(), anyhow::Error> {
    let app = api_router(state);

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind API server to port {}: {}", port, e))?;

    log::info!("API server listening on http://127.0.0.1:{}/", port);
    log::info!("  - List: http://127.0.0.1:{}/articles", port);
    log::info!("  - Detail: http://127.0.0.1:{}/articles/{{id}}", port);

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("API server error: {}", e))?;

    Ok(())
}
