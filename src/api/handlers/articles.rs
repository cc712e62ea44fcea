//! Article list and detail handlers.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use crate::api::types::{ApiState, ArticleDetailResponse, ArticleSummaryResponse, ErrorResponse};
use crate::storage;

/// Query parameters accepted by the list endpoint.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    /// Case-insensitive substring match on the article source
    pub source: Option<String>,
}

/// `GET /articles` - list stored articles, newest published first.
pub async fn list_articles_handler(
    State(state): State<ApiState>,
    Query(params): Query<ListParams>,
) -> Response {
    match storage::list_articles(&state.pool, params.source.as_deref()).await {
        Ok(articles) => {
            let body: Vec<ArticleSummaryResponse> =
                articles.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => {
            log::error!("Failed to list articles: {e}");
            internal_error()
        }
    }
}

/// `GET /articles/{id}` - full article detail.
pub async fn get_article_handler(
    State(state): State<ApiState>,
    Path(id): Path<i64>,
) -> Response {
    match storage::get_article(&state.pool, id).await {
        Ok(Some(article)) => {
            (StatusCode::OK, Json(ArticleDetailResponse::from(article))).into_response()
        }
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("article {id} not found"),
            }),
        )
            .into_response(),
        Err(e) => {
            log::error!("Failed to fetch article {id}: {e}");
            internal_error()
        }
    }
}

fn internal_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: "database error".to_string(),
        }),
    )
        .into_response()
}
